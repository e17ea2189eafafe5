//! Shared test fixtures for the application layer
//!
//! A hand-rolled recording map surface: stores every primitive call so
//! tests can assert on marker identity and the route source/layer
//! lifecycle, which mock expectations express poorly.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::value_objects::GeoPoint;

use crate::ports::{MapSurfacePort, MarkerHandle};

/// One recorded surface primitive invocation
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceCall {
    CreateMap {
        center: GeoPoint,
        zoom: f64,
        style_url: String,
    },
    AddNavigationControl,
    SetCenter(GeoPoint),
    AddMarker {
        handle: MarkerHandle,
        color: String,
        at: GeoPoint,
    },
    MoveMarker {
        handle: MarkerHandle,
        to: GeoPoint,
    },
    AddLineSource {
        id: String,
        points: Vec<GeoPoint>,
    },
    AddLineLayer {
        id: String,
        source_id: String,
    },
    RemoveLayer(String),
    RemoveSource(String),
}

/// Map surface that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    calls: Mutex<Vec<SurfaceCall>>,
    next_handle: AtomicU64,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Number of markers ever created
    pub(crate) fn markers_added(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::AddMarker { .. }))
            .count()
    }

    /// Replay add/remove calls to count currently live sources with `id`
    pub(crate) fn live_sources(&self, id: &str) -> usize {
        self.calls().iter().fold(0usize, |count, call| match call {
            SurfaceCall::AddLineSource { id: added, .. } if added == id => count + 1,
            SurfaceCall::RemoveSource(removed) if removed == id => count.saturating_sub(1),
            _ => count,
        })
    }

    /// Replay add/remove calls to count currently live layers with `id`
    pub(crate) fn live_layers(&self, id: &str) -> usize {
        self.calls().iter().fold(0usize, |count, call| match call {
            SurfaceCall::AddLineLayer { id: added, .. } if added == id => count + 1,
            SurfaceCall::RemoveLayer(removed) if removed == id => count.saturating_sub(1),
            _ => count,
        })
    }
}

impl MapSurfacePort for RecordingSurface {
    fn create_map(&self, center: GeoPoint, zoom: f64, style_url: &str) {
        self.record(SurfaceCall::CreateMap {
            center,
            zoom,
            style_url: style_url.to_string(),
        });
    }

    fn add_navigation_control(&self) {
        self.record(SurfaceCall::AddNavigationControl);
    }

    fn set_center(&self, center: GeoPoint) {
        self.record(SurfaceCall::SetCenter(center));
    }

    fn add_marker(&self, color: &str, at: GeoPoint) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.record(SurfaceCall::AddMarker {
            handle,
            color: color.to_string(),
            at,
        });
        handle
    }

    fn move_marker(&self, marker: MarkerHandle, to: GeoPoint) {
        self.record(SurfaceCall::MoveMarker { handle: marker, to });
    }

    fn add_line_source(&self, id: &str, points: &[GeoPoint]) {
        self.record(SurfaceCall::AddLineSource {
            id: id.to_string(),
            points: points.to_vec(),
        });
    }

    fn add_line_layer(&self, id: &str, source_id: &str, _color: &str, _width: f64) {
        self.record(SurfaceCall::AddLineLayer {
            id: id.to_string(),
            source_id: source_id.to_string(),
        });
    }

    fn remove_layer(&self, id: &str) {
        self.record(SurfaceCall::RemoveLayer(id.to_string()));
    }

    fn remove_source(&self, id: &str) {
        self.record(SurfaceCall::RemoveSource(id.to_string()));
    }
}
