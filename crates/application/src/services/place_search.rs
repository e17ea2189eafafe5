//! Place search service
//!
//! Wraps the geocoding port with the short-query gate: queries below the
//! minimum length never reach the backend. Callers rely on this to keep
//! keystroke-driven searches from flooding the geocoder.

use std::fmt;
use std::sync::Arc;

use domain::entities::Place;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Minimum query length before a backend call is made
pub const MIN_QUERY_LEN: usize = 3;

/// Free-text place search with a length gate
pub struct PlaceSearch {
    geocoding: Arc<dyn GeocodingPort>,
    max_results: u8,
}

impl fmt::Debug for PlaceSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceSearch")
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl PlaceSearch {
    /// Create a search service returning up to `max_results` candidates
    pub fn new(geocoding: Arc<dyn GeocodingPort>, max_results: u8) -> Self {
        Self {
            geocoding,
            max_results,
        }
    }

    /// Search for places matching the query
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters resolve to an
    /// empty list without touching the backend.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, ApplicationError> {
        if query.chars().count() < MIN_QUERY_LEN {
            debug!(len = query.chars().count(), "Query below minimum length");
            return Ok(Vec::new());
        }

        self.geocoding.search_places(query, self.max_results).await
    }
}
