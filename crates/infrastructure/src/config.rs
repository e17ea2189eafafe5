//! Application configuration

use application::services::{InteractionConfig, MapConfig};
use integration_geocoding::NominatimConfig;
use integration_routing::OsrmConfig;
use serde::{Deserialize, Serialize};

/// Fixed device position for headless hosts (lon, lat)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DevicePositionConfig {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Map surface configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Interaction controller configuration
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Geocoding backend configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Routing backend configuration
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Fixed device position, for hosts without a geolocation source
    ///
    /// When absent the session starts from the fallback coordinate.
    #[serde(default)]
    pub device_position: Option<DevicePositionConfig>,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads an optional `config.*` file in the working directory, then
    /// applies `WAYFINDER_`-prefixed environment variable overrides
    /// (e.g. `WAYFINDER_ROUTING_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("WAYFINDER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the backend configurations
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.routing
            .validate()
            .map_err(|e| format!("routing: {e}"))?;
        Ok(())
    }
}
