//! Nominatim search client
//!
//! Issues free-text place queries against the Nominatim `/search` endpoint
//! with address details enabled and a country-code scope, and parses the
//! ranked candidate list.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::PlaceCandidate;

/// Trait for place search clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Search for up to `limit` ranked candidates matching a free-text query
    async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceCandidate>, GeocodingError>;
}

/// Nominatim-based search client with short-TTL result caching
#[derive(Debug)]
pub struct NominatimSearchClient {
    client: Client,
    config: NominatimConfig,
    cache: Cache<String, Vec<PlaceCandidate>>,
}

impl NominatimSearchClient {
    /// Create a new Nominatim search client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Wayfinder/0.2 (https://github.com/wayfinder-uz/wayfinder)")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache_ttl = if config.caching_enabled() {
            Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60)
        } else {
            Duration::from_millis(1)
        };

        let cache = Cache::builder()
            .max_capacity(500)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    /// Parse the raw Nominatim JSON response into candidates
    fn parse_results(body: &str) -> Result<Vec<PlaceCandidate>, GeocodingError> {
        let raw: Vec<RawSearchResult> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        raw.into_iter().map(RawSearchResult::into_candidate).collect()
    }
}

#[async_trait]
impl GeocodingClient for NominatimSearchClient {
    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceCandidate>, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Query must not be empty".to_string(),
            ));
        }

        let cache_key = format!("{}#{limit}", query.to_lowercase());
        if let Some(hit) = self.cache.get(&cache_key).await {
            debug!(%query, "Place search cache hit");
            return Ok(hit);
        }

        let url = format!("{}/search", self.config.base_url);
        let params = [
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", limit.to_string()),
            ("countrycodes", self.config.country_filter.clone()),
        ];

        debug!(%query, limit, "Searching places");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let candidates = Self::parse_results(&body)?;

        debug!(count = candidates.len(), "Places found");
        self.cache.insert(cache_key, candidates.clone()).await;

        Ok(candidates)
    }
}

/// Raw Nominatim API response entry
///
/// Coordinates arrive as stringified floats.
#[derive(Debug, Deserialize)]
struct RawSearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl RawSearchResult {
    fn into_candidate(self) -> Result<PlaceCandidate, GeocodingError> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;

        let location =
            GeoPoint::new(lon, lat).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(PlaceCandidate::new(self.display_name, location))
    }
}
