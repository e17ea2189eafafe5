//! Geolocation adapter - fixed-position stand-in for a device source
//!
//! Headless hosts have no browser geolocation API; they either configure a
//! fixed position or run without one and let the session degrade to its
//! fallback coordinate.

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoPoint;

use crate::config::DevicePositionConfig;

/// Geolocation source returning a fixed configured position
#[derive(Debug, Clone, Copy)]
pub struct StaticGeolocationAdapter {
    position: Option<GeoPoint>,
}

impl StaticGeolocationAdapter {
    /// Create a source reporting a fixed position
    #[must_use]
    pub const fn new(position: GeoPoint) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Create a source with no position; every lookup fails
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { position: None }
    }

    /// Build from the optional configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the coordinates are out of range.
    pub fn from_config(
        config: Option<&DevicePositionConfig>,
    ) -> Result<Self, ApplicationError> {
        match config {
            Some(position) => {
                let point = GeoPoint::new(position.longitude, position.latitude)
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
                Ok(Self::new(point))
            },
            None => Ok(Self::unavailable()),
        }
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocationAdapter {
    async fn current_position(&self) -> Result<GeoPoint, ApplicationError> {
        self.position.ok_or_else(|| {
            ApplicationError::LocationUnavailable("no position source configured".to_string())
        })
    }
}
