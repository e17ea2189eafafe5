//! Marker registry service
//!
//! Owns the two endpoint markers. Each role's marker is created on the
//! surface at most once per session; every later placement moves the same
//! marker. Placing the start marker also re-centers the map.

use domain::entities::Marker;
use domain::value_objects::{GeoPoint, MarkerRole};
use tracing::debug;

use crate::ports::MarkerHandle;
use crate::services::MapSession;

#[derive(Debug, Clone)]
struct PlacedMarker {
    marker: Marker,
    handle: MarkerHandle,
}

/// Registry owning the start and end markers
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    start: Option<PlacedMarker>,
    end: Option<PlacedMarker>,
}

impl MarkerRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Place the start marker
    ///
    /// First call creates it at `at`; later calls move the existing marker
    /// and re-center the map on it.
    pub fn place_start(&mut self, map: &MapSession, at: GeoPoint) {
        if let Some(placed) = &mut self.start {
            map.move_marker(placed.handle, at);
            placed.marker.move_to(at);
            map.center_on(at);
            debug!(%at, "Start marker moved");
        } else {
            let handle = map.add_marker(MarkerRole::Start.color(), at);
            self.start = Some(PlacedMarker {
                marker: Marker::new(MarkerRole::Start, at),
                handle,
            });
            debug!(%at, "Start marker created");
        }
    }

    /// Place the end marker
    ///
    /// Created lazily on first call; later calls move it. Never changes
    /// the map center.
    pub fn place_end(&mut self, map: &MapSession, at: GeoPoint) {
        if let Some(placed) = &mut self.end {
            map.move_marker(placed.handle, at);
            placed.marker.move_to(at);
            debug!(%at, "End marker moved");
        } else {
            let handle = map.add_marker(MarkerRole::End.color(), at);
            self.end = Some(PlacedMarker {
                marker: Marker::new(MarkerRole::End, at),
                handle,
            });
            debug!(%at, "End marker created");
        }
    }

    /// The start marker, if placed
    #[must_use]
    pub fn start(&self) -> Option<&Marker> {
        self.start.as_ref().map(|p| &p.marker)
    }

    /// The end marker, if placed
    #[must_use]
    pub fn end(&self) -> Option<&Marker> {
        self.end.as_ref().map(|p| &p.marker)
    }

    /// Surface handle of the start marker, if placed
    #[must_use]
    pub fn start_handle(&self) -> Option<MarkerHandle> {
        self.start.as_ref().map(|p| p.handle)
    }

    /// Surface handle of the end marker, if placed
    #[must_use]
    pub fn end_handle(&self) -> Option<MarkerHandle> {
        self.end.as_ref().map(|p| p.handle)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::MapConfig;
    use crate::test_support::{RecordingSurface, SurfaceCall};

    fn setup() -> (MapSession, Arc<RecordingSurface>, MarkerRegistry) {
        let surface = Arc::new(RecordingSurface::new());
        let mut session = MapSession::new(surface.clone(), MapConfig::default());
        session.initialize(GeoPoint::tashkent());
        (session, surface, MarkerRegistry::new())
    }

    #[test]
    fn test_start_created_once_then_moved() {
        let (session, surface, mut registry) = setup();
        let first = GeoPoint::new_unchecked(69.24, 41.31);
        let second = GeoPoint::new_unchecked(69.30, 41.30);

        registry.place_start(&session, first);
        let handle = registry.start_handle().expect("placed");

        registry.place_start(&session, second);

        assert_eq!(surface.markers_added(), 1);
        assert_eq!(registry.start_handle(), Some(handle));
        assert_eq!(registry.start().expect("placed").location, second);
    }

    #[test]
    fn test_first_start_placement_does_not_recenter() {
        let (session, surface, mut registry) = setup();
        registry.place_start(&session, GeoPoint::tashkent());

        assert!(
            !surface
                .calls()
                .iter()
                .any(|c| matches!(c, SurfaceCall::SetCenter(_)))
        );
    }

    #[test]
    fn test_moving_start_recenters() {
        let (session, surface, mut registry) = setup();
        let second = GeoPoint::new_unchecked(69.30, 41.30);

        registry.place_start(&session, GeoPoint::tashkent());
        registry.place_start(&session, second);

        assert!(surface.calls().contains(&SurfaceCall::SetCenter(second)));
    }

    #[test]
    fn test_end_created_lazily_and_never_recenters() {
        let (session, surface, mut registry) = setup();
        let first = GeoPoint::new_unchecked(69.28, 41.29);
        let second = GeoPoint::new_unchecked(69.25, 41.28);

        registry.place_start(&session, GeoPoint::tashkent());
        assert!(registry.end().is_none());

        registry.place_end(&session, first);
        let handle = registry.end_handle().expect("placed");
        registry.place_end(&session, second);

        // one start + one end, no recreation
        assert_eq!(surface.markers_added(), 2);
        assert_eq!(registry.end_handle(), Some(handle));
        assert_eq!(registry.end().expect("placed").location, second);
        assert!(
            !surface
                .calls()
                .iter()
                .any(|c| matches!(c, SurfaceCall::SetCenter(_)))
        );
    }

    #[test]
    fn test_marker_colors() {
        let (session, surface, mut registry) = setup();
        registry.place_start(&session, GeoPoint::tashkent());
        registry.place_end(&session, GeoPoint::new_unchecked(69.28, 41.29));

        let colors: Vec<String> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::AddMarker { color, .. } => Some(color.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec!["blue".to_string(), "red".to_string()]);
    }
}
