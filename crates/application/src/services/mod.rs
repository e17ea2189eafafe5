//! Application services - the interaction engine

mod interaction;
mod location_provider;
mod map_session;
mod marker_registry;
mod place_search;

pub use interaction::{
    FailureNotice, FailurePolicy, InteractionConfig, InteractionController, RoutePhase,
    RouteRequest, SearchPhase, SearchRequest, SessionPhase,
};
pub use location_provider::LocationProvider;
pub use map_session::{MapConfig, MapSession, ROUTE_VISUAL_ID};
pub use marker_registry::MarkerRegistry;
pub use place_search::{MIN_QUERY_LEN, PlaceSearch};
