//! OSRM routing client
//!
//! Requests a driving route with GeoJSON geometry and step-level output
//! from the `route/v1/driving` endpoint and extracts the first returned
//! alternative.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::OsrmConfig;
use crate::error::RoutingError;
use crate::models::{Route, RouteLeg, RouteStep};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Fetch a driving route between two points
    async fn driving_route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RoutingError>;
}

/// OSRM-based routing client
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Wayfinder/0.2 (https://github.com/wayfinder-uz/wayfinder)")
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw OSRM JSON response, extracting the first alternative
    fn parse_route_response(
        body: &str,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Route, RoutingError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if raw.code.as_deref().is_some_and(|code| code != "Ok") {
            return Err(RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            });
        }

        let Some(route) = raw.routes.into_iter().next() else {
            return Err(RoutingError::NoRouteFound {
                from: start.to_string(),
                to: end.to_string(),
            });
        };

        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| {
                GeoPoint::new(lon, lat).map_err(|e| RoutingError::ParseError(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let legs = route.legs.into_iter().map(RawLeg::into_leg).collect();

        Ok(Route { geometry, legs })
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip(self), fields(from = %start, to = %end))]
    async fn driving_route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, RoutingError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.config.base_url,
            start.longitude(),
            start.latitude(),
            end.longitude(),
            end.latitude()
        );

        let params = [
            ("geometries", "geojson"),
            ("steps", "true"),
            ("overview", "full"),
        ];

        debug!(?url, "Fetching driving route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let route = Self::parse_route_response(&body, start, end)?;

        if route.legs.is_empty() {
            warn!("Route has no legs");
        }

        debug!(
            legs = route.legs.len(),
            total_m = route.total_distance_meters(),
            "Route fetched"
        );
        Ok(route)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    geometry: RawGeometry,
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    distance: f64,
    #[serde(default)]
    steps: Vec<RawStep>,
}

impl RawLeg {
    fn into_leg(self) -> RouteLeg {
        RouteLeg {
            distance_meters: self.distance,
            steps: self.steps.into_iter().map(RawStep::into_step).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawStep {
    distance: f64,
    maneuver: RawManeuver,
}

impl RawStep {
    fn into_step(self) -> RouteStep {
        RouteStep {
            instruction: self.maneuver.instruction.unwrap_or_default(),
            distance_meters: self.distance,
            maneuver_kind: self.maneuver.kind.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawManeuver {
    instruction: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}
