//! Map surface port
//!
//! Primitives the host's rendering engine must provide: map creation,
//! centering, colored point markers, and named line source/layer pairs.
//! All calls happen on the single event-loop thread; implementations may
//! assume no concurrent access.

use std::fmt;

use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

/// Opaque handle to a marker hosted by the surface
///
/// Handles are issued by [`MapSurfacePort::add_marker`] and stay valid for
/// the surface's lifetime; moving a marker never invalidates its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// Wrap a raw surface identifier
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw surface identifier
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// Port for the host map rendering surface
#[cfg_attr(test, automock)]
pub trait MapSurfacePort: Send + Sync {
    /// Create the map centered at `center` with the given zoom and style
    fn create_map(&self, center: GeoPoint, zoom: f64, style_url: &str);

    /// Add the navigation (zoom/rotate) control
    fn add_navigation_control(&self);

    /// Re-center the map
    fn set_center(&self, center: GeoPoint);

    /// Create a colored point marker and return its handle
    fn add_marker(&self, color: &str, at: GeoPoint) -> MarkerHandle;

    /// Move an existing marker
    fn move_marker(&self, marker: MarkerHandle, to: GeoPoint);

    /// Add a named line geometry source
    fn add_line_source(&self, id: &str, points: &[GeoPoint]);

    /// Add a line-style layer drawing from a named source
    fn add_line_layer(&self, id: &str, source_id: &str, color: &str, width: f64);

    /// Remove a layer by id
    fn remove_layer(&self, id: &str);

    /// Remove a source by id
    fn remove_source(&self, id: &str);
}
