//! Place search integration for Wayfinder
//!
//! Turns free-text queries into ranked place candidates using a
//! [Nominatim](https://nominatim.openstreetmap.org) compatible API
//! (OpenStreetMap), scoped to a configurable country filter.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`GeocodingClient`] defines
//! the search interface, implemented by [`NominatimSearchClient`]. Results
//! are optionally cached (short TTL) to absorb repeated keystroke queries
//! without changing steady-state behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{NominatimConfig, NominatimSearchClient};
//!
//! let config = NominatimConfig::default();
//! let client = NominatimSearchClient::new(&config)?;
//!
//! let candidates = client.search("Tashkent railway station", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimSearchClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::PlaceCandidate;
