//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the interaction engine reaches
//! external systems: the device geolocation source, the geocoding and
//! routing backends, and the host's map rendering surface. Adapters in
//! the infrastructure layer (or the host shell, for the map surface)
//! implement these ports.

mod geocoding_port;
mod geolocation_port;
mod map_surface_port;
mod routing_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geolocation_port::GeolocationPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use map_surface_port::{MapSurfacePort, MarkerHandle};
#[cfg(test)]
pub use map_surface_port::MockMapSurfacePort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
