//! Map session service
//!
//! Owns the single map surface handle and enforces the route-visual
//! invariant: at any moment there are exactly zero or one route
//! source/layer pairs, and never a source without its layer.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ports::{MapSurfacePort, MarkerHandle};

/// Fixed id shared by the route source and its line layer
pub const ROUTE_VISUAL_ID: &str = "route";

/// Configuration for the map surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Style URL handed to the surface at creation
    #[serde(default = "default_style_url")]
    pub style_url: String,

    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Route line color
    #[serde(default = "default_route_color")]
    pub route_color: String,

    /// Route line width in pixels
    #[serde(default = "default_route_width")]
    pub route_width: f64,
}

fn default_style_url() -> String {
    "https://tiles.stadiamaps.com/styles/alidade_smooth.json".to_string()
}

const fn default_zoom() -> f64 {
    12.0
}

fn default_route_color() -> String {
    "#007cbf".to_string()
}

const fn default_route_width() -> f64 {
    4.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: default_style_url(),
            zoom: default_zoom(),
            route_color: default_route_color(),
            route_width: default_route_width(),
        }
    }
}

/// The single map surface owner
pub struct MapSession {
    surface: Arc<dyn MapSurfacePort>,
    config: MapConfig,
    initialized: bool,
    route_visual: bool,
}

impl fmt::Debug for MapSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSession")
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .field("route_visual", &self.route_visual)
            .finish_non_exhaustive()
    }
}

impl MapSession {
    /// Create a session over a surface; the map itself is not created yet
    pub fn new(surface: Arc<dyn MapSurfacePort>, config: MapConfig) -> Self {
        Self {
            surface,
            config,
            initialized: false,
            route_visual: false,
        }
    }

    /// Create the map centered at `center` and add the navigation control
    ///
    /// Runs exactly once; a second call is a logged no-op.
    pub fn initialize(&mut self, center: GeoPoint) {
        if self.initialized {
            warn!("Map session already initialized");
            return;
        }
        self.surface
            .create_map(center, self.config.zoom, &self.config.style_url);
        self.surface.add_navigation_control();
        self.initialized = true;
        debug!(%center, zoom = self.config.zoom, "Map created");
    }

    /// Whether the map has been created
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Re-center the map
    pub fn center_on(&self, center: GeoPoint) {
        debug_assert!(self.initialized, "center_on before initialize");
        self.surface.set_center(center);
    }

    /// Create a colored marker on the surface
    pub fn add_marker(&self, color: &str, at: GeoPoint) -> MarkerHandle {
        debug_assert!(self.initialized, "add_marker before initialize");
        self.surface.add_marker(color, at)
    }

    /// Move an existing marker
    pub fn move_marker(&self, marker: MarkerHandle, to: GeoPoint) {
        self.surface.move_marker(marker, to);
    }

    /// Replace the route visual with new geometry
    ///
    /// Removes the previous layer and source (in that order) before adding
    /// the new pair, so the surface never holds two route visuals or a
    /// dangling source.
    pub fn set_route_geometry(&mut self, points: &[GeoPoint]) {
        debug_assert!(self.initialized, "set_route_geometry before initialize");
        if self.route_visual {
            self.surface.remove_layer(ROUTE_VISUAL_ID);
            self.surface.remove_source(ROUTE_VISUAL_ID);
        }
        self.surface.add_line_source(ROUTE_VISUAL_ID, points);
        self.surface.add_line_layer(
            ROUTE_VISUAL_ID,
            ROUTE_VISUAL_ID,
            &self.config.route_color,
            self.config.route_width,
        );
        self.route_visual = true;
        debug!(points = points.len(), "Route geometry replaced");
    }

    /// Whether a route visual is currently displayed
    #[must_use]
    pub const fn has_route_visual(&self) -> bool {
        self.route_visual
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{RecordingSurface, SurfaceCall};

    fn session_with_surface() -> (MapSession, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::new());
        let session = MapSession::new(surface.clone(), MapConfig::default());
        (session, surface)
    }

    fn line(points: &[(f64, f64)]) -> Vec<GeoPoint> {
        points
            .iter()
            .map(|&(lon, lat)| GeoPoint::new_unchecked(lon, lat))
            .collect()
    }

    #[test]
    fn test_initialize_creates_map_once() {
        let (mut session, surface) = session_with_surface();
        session.initialize(GeoPoint::tashkent());
        session.initialize(GeoPoint::tashkent());

        let creates = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::CreateMap { .. }))
            .count();
        assert_eq!(creates, 1);
        assert!(session.is_initialized());
        assert!(surface.calls().contains(&SurfaceCall::AddNavigationControl));
    }

    #[test]
    fn test_first_route_adds_without_removing() {
        let (mut session, surface) = session_with_surface();
        session.initialize(GeoPoint::tashkent());

        session.set_route_geometry(&line(&[(69.30, 41.30), (69.28, 41.29)]));

        assert!(session.has_route_visual());
        assert_eq!(surface.live_sources(ROUTE_VISUAL_ID), 1);
        assert_eq!(surface.live_layers(ROUTE_VISUAL_ID), 1);
        assert!(
            !surface
                .calls()
                .iter()
                .any(|c| matches!(c, SurfaceCall::RemoveLayer(_) | SurfaceCall::RemoveSource(_)))
        );
    }

    #[test]
    fn test_second_route_replaces_atomically() {
        let (mut session, surface) = session_with_surface();
        session.initialize(GeoPoint::tashkent());

        session.set_route_geometry(&line(&[(69.30, 41.30), (69.28, 41.29)]));
        session.set_route_geometry(&line(&[(69.30, 41.30), (69.25, 41.28)]));

        assert_eq!(surface.live_sources(ROUTE_VISUAL_ID), 1);
        assert_eq!(surface.live_layers(ROUTE_VISUAL_ID), 1);
    }

    #[test]
    fn test_replacement_removes_layer_before_source() {
        let (mut session, surface) = session_with_surface();
        session.initialize(GeoPoint::tashkent());

        session.set_route_geometry(&line(&[(69.30, 41.30)]));
        session.set_route_geometry(&line(&[(69.28, 41.29)]));

        let calls = surface.calls();
        let layer_removed = calls
            .iter()
            .position(|c| matches!(c, SurfaceCall::RemoveLayer(_)))
            .expect("layer removed");
        let source_removed = calls
            .iter()
            .position(|c| matches!(c, SurfaceCall::RemoveSource(_)))
            .expect("source removed");
        assert!(layer_removed < source_removed);
    }

    #[test]
    fn test_map_config_defaults() {
        let config = MapConfig::default();
        assert!(config.style_url.contains("alidade_smooth"));
        assert!((config.zoom - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.route_color, "#007cbf");
        assert!((config.route_width - 4.0).abs() < f64::EPSILON);
    }
}
