//! Driving route integration for Wayfinder
//!
//! Fetches driving routes with full path geometry and per-step maneuver
//! data from an [OSRM](https://project-osrm.org) compatible
//! `route/v1/driving` API.
//!
//! # Architecture
//!
//! [`RoutingClient`] defines the route fetch interface, implemented by
//! [`OsrmRoutingClient`]. Responses are parsed into typed [`Route`] /
//! [`RouteLeg`] / [`RouteStep`] models that preserve leg and step order.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::value_objects::GeoPoint;
//! use integration_routing::{OsrmConfig, OsrmRoutingClient};
//!
//! let config = OsrmConfig::default();
//! let client = OsrmRoutingClient::new(&config)?;
//!
//! let route = client
//!     .driving_route(
//!         GeoPoint::new(69.30, 41.30)?, // origin
//!         GeoPoint::new(69.28, 41.29)?, // destination
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OsrmRoutingClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::RoutingError;
pub use models::{Route, RouteLeg, RouteStep};
