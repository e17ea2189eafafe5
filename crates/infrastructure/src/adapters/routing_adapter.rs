//! Routing adapter - Implements RoutingPort using integration_routing

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::entities::{DirectionStep, RoutePlan};
use domain::value_objects::GeoPoint;
use integration_routing::{OsrmConfig, OsrmRoutingClient, Route, RoutingClient};
use tracing::instrument;

/// Adapter for driving routes over an OSRM backend
#[derive(Debug)]
pub struct RoutingAdapter {
    client: OsrmRoutingClient,
}

impl RoutingAdapter {
    /// Create an adapter over an existing client
    #[must_use]
    pub const fn new(client: OsrmRoutingClient) -> Self {
        Self { client }
    }

    /// Create an adapter straight from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmRoutingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Flatten an integration route into a displayable plan
    ///
    /// Leg steps are flattened in traversal order; the total is the sum of
    /// leg distances as reported by the backend.
    fn convert(route: Route) -> RoutePlan {
        let total = route.total_distance_meters();
        let steps = route
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| {
                DirectionStep::new(
                    step.instruction.clone(),
                    step.distance_meters,
                    step.maneuver_kind.clone(),
                )
            })
            .collect();

        RoutePlan::new(route.geometry, steps, total)
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self), fields(from = %start, to = %end))]
    async fn fetch_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<RoutePlan, ApplicationError> {
        let route = self
            .client
            .driving_route(start, end)
            .await
            .map_err(|e| ApplicationError::RouteFailed(e.to_string()))?;

        Ok(Self::convert(route))
    }
}
