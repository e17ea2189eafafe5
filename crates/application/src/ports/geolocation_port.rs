//! Device geolocation port
//!
//! Defines the interface for the one-shot position lookup performed at
//! session start. Host shells implement it over whatever positioning
//! source they have (browser API, GPS daemon, a fixed configuration).

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving the device's current position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Resolve the current position
    ///
    /// Called exactly once per session. Failures are expected (permission
    /// denied, unsupported platform, timeout) and degrade to a fallback
    /// coordinate upstream.
    async fn current_position(&self) -> Result<GeoPoint, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeolocationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeolocationPort>();
    }
}
