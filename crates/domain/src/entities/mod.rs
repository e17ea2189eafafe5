//! Domain entities - Objects with identity and lifecycle

mod marker;
mod place;
mod route;

pub use marker::Marker;
pub use place::Place;
pub use route::{DirectionStep, RoutePlan};
