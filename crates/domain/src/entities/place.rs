//! Place search result entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// A candidate place returned by a free-text search
///
/// Ephemeral: exists only inside a suggestion list until the user selects
/// it or the list is replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display label (e.g. the full address line)
    pub label: String,
    /// Resolved coordinates
    pub location: GeoPoint,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(label: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            label: label.into(),
            location,
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_display() {
        let place = Place::new("Tashkent, Uzbekistan", GeoPoint::tashkent());
        assert_eq!(place.to_string(), "Tashkent, Uzbekistan");
    }
}
