//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::entities::Place;
use integration_geocoding::{
    GeocodingClient, NominatimConfig, NominatimSearchClient, PlaceCandidate,
};
use tracing::instrument;

/// Adapter for place search over a Nominatim backend
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimSearchClient,
}

impl GeocodingAdapter {
    /// Create an adapter over an existing client
    #[must_use]
    pub const fn new(client: NominatimSearchClient) -> Self {
        Self { client }
    }

    /// Create an adapter straight from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimSearchClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn convert(candidate: PlaceCandidate) -> Place {
        Place::new(candidate.label, candidate.location)
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn search_places(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<Place>, ApplicationError> {
        let candidates = self
            .client
            .search(query, limit)
            .await
            .map_err(|e| ApplicationError::SearchFailed(e.to_string()))?;

        Ok(candidates.into_iter().map(Self::convert).collect())
    }
}
