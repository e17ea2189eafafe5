//! Route entities
//!
//! Typed representation of a computed driving route: its drawable geometry,
//! the flattened turn-by-turn steps, and the total distance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// A single maneuver in traversal order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionStep {
    /// Instruction text (may be empty when the backend omits it)
    pub instruction: String,
    /// Distance covered by this step in meters
    pub distance_meters: f64,
    /// Maneuver classification (e.g. "turn", "roundabout")
    pub maneuver_kind: String,
}

impl DirectionStep {
    /// Create a new step
    #[must_use]
    pub fn new(
        instruction: impl Into<String>,
        distance_meters: f64,
        maneuver_kind: impl Into<String>,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            distance_meters,
            maneuver_kind: maneuver_kind.into(),
        }
    }
}

impl fmt::Display for DirectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.instruction,
            format_km(self.distance_meters)
        )
    }
}

/// A computed route ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Ordered path geometry for rendering
    pub geometry: Vec<GeoPoint>,
    /// Turn-by-turn steps in traversal order
    pub steps: Vec<DirectionStep>,
    /// Sum of all leg distances in meters
    pub total_distance_meters: f64,
}

impl RoutePlan {
    /// Create a new route plan
    #[must_use]
    pub fn new(
        geometry: Vec<GeoPoint>,
        steps: Vec<DirectionStep>,
        total_distance_meters: f64,
    ) -> Self {
        Self {
            geometry,
            steps,
            total_distance_meters,
        }
    }

    /// Total distance formatted for display
    #[must_use]
    pub fn format_total(&self) -> String {
        format_km(self.total_distance_meters)
    }
}

/// Format a distance in meters as kilometers with two decimals
#[must_use]
pub fn format_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
