//! Place search result models

use std::fmt;

use domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};

/// A ranked place candidate returned by the search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Display label as reported by the backend
    pub label: String,
    /// Resolved coordinates
    pub location: GeoPoint,
}

impl PlaceCandidate {
    /// Create a new candidate
    #[must_use]
    pub fn new(label: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            label: label.into(),
            location,
        }
    }
}

impl fmt::Display for PlaceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
