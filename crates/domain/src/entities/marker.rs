//! Map marker entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoPoint, MarkerRole};

/// A visual pin bound to a coordinate and a role
///
/// The start marker is created exactly once per session and only moved
/// thereafter; the end marker is created lazily on the first destination
/// selection. Moving never recreates the marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Which endpoint this marker represents
    pub role: MarkerRole,
    /// Current position
    pub location: GeoPoint,
    /// Surface color (derived from the role)
    pub color: String,
}

impl Marker {
    /// Create a marker for a role at a position
    #[must_use]
    pub fn new(role: MarkerRole, location: GeoPoint) -> Self {
        Self {
            role,
            location,
            color: role.color().to_string(),
        }
    }

    /// Move the marker to a new position, preserving identity
    pub fn move_to(&mut self, location: GeoPoint) {
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_color_follows_role() {
        let start = Marker::new(MarkerRole::Start, GeoPoint::tashkent());
        assert_eq!(start.color, "blue");

        let end = Marker::new(MarkerRole::End, GeoPoint::tashkent());
        assert_eq!(end.color, "red");
    }

    #[test]
    fn test_move_preserves_role_and_color() {
        let mut marker = Marker::new(MarkerRole::End, GeoPoint::tashkent());
        let target = GeoPoint::new(69.28, 41.29).expect("valid");
        marker.move_to(target);
        assert_eq!(marker.location, target);
        assert_eq!(marker.role, MarkerRole::End);
        assert_eq!(marker.color, "red");
    }
}
