//! Route fetch port
//!
//! Defines the interface for computing a driving route between two
//! coordinates. The infrastructure layer implements it over an external
//! routing backend; the engine never computes routes itself.

use async_trait::async_trait;
use domain::entities::RoutePlan;
use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Fetch a driving route with full geometry and per-step directions
    async fn fetch_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<RoutePlan, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }
}
