//! Place search port
//!
//! Defines the interface for turning a free-text query into ranked place
//! candidates. The infrastructure layer implements it over a geocoding
//! backend scoped to the session's country filter.

use async_trait::async_trait;
use domain::entities::Place;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for free-text place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for up to `limit` ranked places matching the query
    async fn search_places(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<Place>, ApplicationError>;
}
