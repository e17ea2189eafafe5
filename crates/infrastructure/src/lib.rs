//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer over the
//! geocoding and routing integration clients, and provides configuration
//! loading and tracing setup for host shells.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{GeocodingAdapter, RoutingAdapter, StaticGeolocationAdapter};
pub use config::{AppConfig, DevicePositionConfig};
pub use telemetry::init_tracing;
