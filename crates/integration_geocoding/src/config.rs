//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim place search service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of ranked candidates per query
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,

    /// Country code scope (e.g. "uz" for Uzbekistan)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_max_results() -> u8 {
    5
}

const fn default_cache_ttl_minutes() -> u32 {
    10
}

fn default_country_filter() -> String {
    "uz".to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            country_filter: default_country_filter(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        if self.max_results > 10 {
            return Err("max_results must be 10 or less".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.cache_ttl_minutes, 10);
        assert_eq!(config.country_filter, "uz");
    }

    #[test]
    fn test_testing_config() {
        let config = NominatimConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.caching_enabled());
    }

    #[test]
    fn test_validation_success() {
        assert!(NominatimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = NominatimConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = NominatimConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_result_bounds() {
        let zero = NominatimConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let too_many = NominatimConfig {
            max_results: 11,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = NominatimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NominatimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.country_filter, config.country_filter);
    }
}
