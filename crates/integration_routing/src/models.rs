//! Routing data models
//!
//! Typed representation of an OSRM driving route: ordered path geometry,
//! legs, and per-leg maneuver steps.

use domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};

/// A driving route from origin to destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered path geometry
    pub geometry: Vec<GeoPoint>,
    /// Route legs in traversal order
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// Sum of all leg distances in meters
    #[must_use]
    pub fn total_distance_meters(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_meters).sum()
    }

    /// All steps of all legs, flattened in traversal order
    #[must_use]
    pub fn flattened_steps(&self) -> Vec<&RouteStep> {
        self.legs.iter().flat_map(|leg| leg.steps.iter()).collect()
    }
}

/// A single leg (waypoint-to-waypoint segment) of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in meters
    pub distance_meters: f64,
    /// Maneuver steps in traversal order
    pub steps: Vec<RouteStep>,
}

/// A single maneuver step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Instruction text (empty when the backend omits it)
    pub instruction: String,
    /// Step distance in meters
    pub distance_meters: f64,
    /// Maneuver classification (e.g. "turn", "roundabout")
    pub maneuver_kind: String,
}
