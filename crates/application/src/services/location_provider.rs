//! Location provider service
//!
//! Resolves the session's initial coordinate from the geolocation port,
//! degrading to a fixed fallback on any failure. Runs once per session;
//! never raises to the caller.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::GeoPoint;
use tracing::{debug, instrument, warn};

use crate::ports::GeolocationPort;

/// One-shot position resolver with a fallback coordinate
pub struct LocationProvider {
    geolocation: Arc<dyn GeolocationPort>,
    fallback: GeoPoint,
}

impl fmt::Debug for LocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationProvider")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl LocationProvider {
    /// Create a provider with an explicit fallback coordinate
    pub fn new(geolocation: Arc<dyn GeolocationPort>, fallback: GeoPoint) -> Self {
        Self {
            geolocation,
            fallback,
        }
    }

    /// Create a provider falling back to Tashkent city center
    pub fn with_default_fallback(geolocation: Arc<dyn GeolocationPort>) -> Self {
        Self::new(geolocation, GeoPoint::tashkent())
    }

    /// Resolve the user's position, degrading to the fallback on failure
    #[instrument(skip(self))]
    pub async fn resolve(&self) -> GeoPoint {
        match self.geolocation.current_position().await {
            Ok(position) => {
                debug!(%position, "Device position resolved");
                position
            },
            Err(error) => {
                warn!(%error, fallback = %self.fallback, "Geolocation unavailable, using fallback");
                self.fallback
            },
        }
    }
}
