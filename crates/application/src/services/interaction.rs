//! Interaction controller
//!
//! The session orchestrator: wires the location provider, place search,
//! marker registry, and routing port together and holds the state machine
//! described by the session lifecycle:
//!
//! `Uninitialized → Locating → Ready`, then per-role search sub-states and
//! the destination route sub-state running independently.
//!
//! Search and route requests carry a per-role monotonic sequence number.
//! Completions are applied only if their sequence number is the latest
//! issued for that role; anything older is discarded. This makes unordered
//! async completions harmless without request cancellation: whichever
//! response belongs to the newest request wins, regardless of arrival
//! order.

use std::fmt;
use std::sync::Arc;

use domain::entities::{DirectionStep, Place, RoutePlan};
use domain::value_objects::{GeoPoint, MarkerRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::RoutingPort;
use crate::services::{LocationProvider, MapSession, MarkerRegistry, PlaceSearch};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not yet started
    Uninitialized,
    /// Waiting for the initial coordinate
    Locating,
    /// Map is up; searches and routing are available
    Ready,
}

/// Per-role search sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No active suggestion list
    #[default]
    Idle,
    /// A suggestion list is being filled or shown
    Suggesting,
}

/// Destination route sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutePhase {
    /// No route requested, or the last request failed
    #[default]
    Idle,
    /// A route request is in flight
    Fetching,
    /// A route is displayed
    Ready,
}

/// How search/route failures are reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log only; the original behavior
    Silent,
    /// Log and record a transient notice the host can display
    #[default]
    Surface,
}

/// A transient failure the host may display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureNotice {
    /// A place search for the given role failed
    SearchFailed(MarkerRole),
    /// The route fetch failed
    RouteFailed,
}

/// Controller configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Failure reporting policy
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// A sequence-numbered search request to run against the search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Which search box issued the request
    pub role: MarkerRole,
    /// Sequence number to pass back to [`InteractionController::complete_search`]
    pub seq: u64,
    /// The query text at issue time
    pub query: String,
}

/// A sequence-numbered route request to run against the routing port
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Sequence number to pass back to [`InteractionController::complete_route`]
    pub seq: u64,
    /// Trip origin (the current user coordinate)
    pub start: GeoPoint,
    /// Trip destination (the selected place)
    pub end: GeoPoint,
}

/// One search box's state
#[derive(Debug, Default)]
struct SearchBox {
    query: String,
    suggestions: Vec<Place>,
    visible: bool,
    phase: SearchPhase,
    seq: u64,
}

impl SearchBox {
    /// Clear query and suggestions and invalidate in-flight requests
    fn reset(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.phase = SearchPhase::Idle;
        self.seq += 1;
    }
}

/// The session orchestrator
pub struct InteractionController {
    location_provider: LocationProvider,
    place_search: PlaceSearch,
    routing: Arc<dyn RoutingPort>,
    session: MapSession,
    markers: MarkerRegistry,
    config: InteractionConfig,

    phase: SessionPhase,
    user_location: Option<GeoPoint>,
    start_box: SearchBox,
    end_box: SearchBox,
    route_phase: RoutePhase,
    route_seq: u64,
    directions: Option<Vec<DirectionStep>>,
    total_distance_meters: Option<f64>,
    notice: Option<FailureNotice>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("phase", &self.phase)
            .field("route_phase", &self.route_phase)
            .field("user_location", &self.user_location)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl InteractionController {
    /// Create a controller over its collaborators; nothing runs until
    /// [`initialize`](Self::initialize)
    pub fn new(
        location_provider: LocationProvider,
        place_search: PlaceSearch,
        routing: Arc<dyn RoutingPort>,
        session: MapSession,
        config: InteractionConfig,
    ) -> Self {
        Self {
            location_provider,
            place_search,
            routing,
            session,
            markers: MarkerRegistry::new(),
            config,
            phase: SessionPhase::Uninitialized,
            user_location: None,
            start_box: SearchBox::default(),
            end_box: SearchBox::default(),
            route_phase: RoutePhase::default(),
            route_seq: 0,
            directions: None,
            total_distance_meters: None,
            notice: None,
        }
    }

    /// Resolve the user's position, create the map there, and place the
    /// start marker
    ///
    /// Runs once; a second call is a logged no-op.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) {
        if self.phase != SessionPhase::Uninitialized {
            warn!(phase = ?self.phase, "Session already initialized");
            return;
        }
        self.phase = SessionPhase::Locating;

        let origin = self.location_provider.resolve().await;
        self.session.initialize(origin);
        self.markers.place_start(&self.session, origin);
        self.user_location = Some(origin);
        self.phase = SessionPhase::Ready;
        info!(%origin, "Session ready");
    }

    /// Toggle one input panel's visibility
    ///
    /// Purely a UI concern: never resets search or route state.
    pub fn toggle_panel(&mut self, role: MarkerRole) {
        let search_box = self.box_mut(role);
        search_box.visible = !search_box.visible;
    }

    /// Record a keystroke and, if the query is long enough, issue a search
    ///
    /// Queries under three characters clear the suggestion list, return the
    /// box to idle, and invalidate any in-flight request. Input to a hidden
    /// panel is ignored.
    pub fn update_query(&mut self, role: MarkerRole, text: &str) -> Option<SearchRequest> {
        if self.phase != SessionPhase::Ready {
            warn!(phase = ?self.phase, "Ignoring input before session is ready");
            return None;
        }

        let search_box = self.box_mut(role);
        if !search_box.visible {
            debug!(%role, "Ignoring input to hidden panel");
            return None;
        }

        search_box.query = text.to_string();
        search_box.seq += 1;

        if text.chars().count() < crate::services::MIN_QUERY_LEN {
            search_box.suggestions.clear();
            search_box.phase = SearchPhase::Idle;
            return None;
        }

        search_box.phase = SearchPhase::Suggesting;
        Some(SearchRequest {
            role,
            seq: search_box.seq,
            query: text.to_string(),
        })
    }

    /// Apply a search outcome if it is still the latest for its role
    ///
    /// Stale completions (an older sequence number) are dropped. Failures
    /// leave the previous suggestion list untouched.
    pub fn complete_search(
        &mut self,
        role: MarkerRole,
        seq: u64,
        outcome: Result<Vec<Place>, ApplicationError>,
    ) {
        let search_box = self.box_mut(role);
        if seq != search_box.seq {
            debug!(%role, seq, latest = search_box.seq, "Discarding stale search result");
            return;
        }

        match outcome {
            Ok(places) => {
                debug!(%role, count = places.len(), "Suggestions updated");
                search_box.suggestions = places;
            },
            Err(error) => {
                warn!(%role, %error, "Place search failed");
                self.raise(FailureNotice::SearchFailed(role));
            },
        }
    }

    /// Issue and complete a search in one step
    #[instrument(skip(self))]
    pub async fn search(&mut self, role: MarkerRole, text: &str) {
        let Some(request) = self.update_query(role, text) else {
            return;
        };
        let outcome = self.place_search.search(&request.query).await;
        self.complete_search(role, request.seq, outcome);
    }

    /// Select a start suggestion: move the start marker, re-center, update
    /// the user coordinate, and clear the start box
    ///
    /// Selecting outside the current list is a logged no-op, which keeps
    /// repeated selections idempotent on the cleared state.
    pub fn select_start_suggestion(&mut self, index: usize) {
        let Some(place) = self.start_box.suggestions.get(index).cloned() else {
            warn!(index, "Ignoring start selection outside suggestion list");
            return;
        };

        self.markers.place_start(&self.session, place.location);
        self.user_location = Some(place.location);
        self.start_box.reset();
        info!(label = %place.label, at = %place.location, "Start selected");
    }

    /// Select an end suggestion: place/move the end marker, clear the end
    /// box, and issue a route request from the current user coordinate
    pub fn select_end_suggestion(&mut self, index: usize) -> Option<RouteRequest> {
        let Some(place) = self.end_box.suggestions.get(index).cloned() else {
            warn!(index, "Ignoring end selection outside suggestion list");
            return None;
        };
        let Some(start) = self.user_location else {
            warn!("End selected before a start coordinate exists");
            return None;
        };

        self.markers.place_end(&self.session, place.location);
        self.end_box.reset();
        self.route_phase = RoutePhase::Fetching;
        self.route_seq += 1;
        info!(label = %place.label, at = %place.location, "Destination selected");

        Some(RouteRequest {
            seq: self.route_seq,
            start,
            end: place.location,
        })
    }

    /// Apply a route outcome if it is still the latest issued
    ///
    /// On success the route visual is replaced and directions stored; on
    /// failure the previously displayed route and directions stay as they
    /// are and the destination flow returns to idle.
    pub fn complete_route(&mut self, seq: u64, outcome: Result<RoutePlan, ApplicationError>) {
        if seq != self.route_seq {
            debug!(seq, latest = self.route_seq, "Discarding stale route result");
            return;
        }

        match outcome {
            Ok(plan) => {
                self.session.set_route_geometry(&plan.geometry);
                info!(
                    total = %plan.format_total(),
                    steps = plan.steps.len(),
                    "Route ready"
                );
                self.total_distance_meters = Some(plan.total_distance_meters);
                self.directions = Some(plan.steps);
                self.route_phase = RoutePhase::Ready;
            },
            Err(error) => {
                warn!(%error, "Route fetch failed");
                self.raise(FailureNotice::RouteFailed);
                self.route_phase = RoutePhase::Idle;
            },
        }
    }

    /// Select a destination and run the route fetch in one step
    #[instrument(skip(self))]
    pub async fn route_to_selection(&mut self, index: usize) {
        let Some(request) = self.select_end_suggestion(index) else {
            return;
        };
        let outcome = self.routing.fetch_route(request.start, request.end).await;
        self.complete_route(request.seq, outcome);
    }

    /// Take the pending failure notice, if any, clearing it
    pub fn take_notice(&mut self) -> Option<FailureNotice> {
        self.notice.take()
    }

    fn raise(&mut self, notice: FailureNotice) {
        if self.config.failure_policy == FailurePolicy::Surface {
            self.notice = Some(notice);
        }
    }

    fn box_ref(&self, role: MarkerRole) -> &SearchBox {
        match role {
            MarkerRole::Start => &self.start_box,
            MarkerRole::End => &self.end_box,
        }
    }

    fn box_mut(&mut self, role: MarkerRole) -> &mut SearchBox {
        match role {
            MarkerRole::Start => &mut self.start_box,
            MarkerRole::End => &mut self.end_box,
        }
    }

    // --- Read accessors for the host ---

    /// Current session phase
    #[must_use]
    pub const fn session_phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current search phase for a role
    #[must_use]
    pub fn search_phase(&self, role: MarkerRole) -> SearchPhase {
        self.box_ref(role).phase
    }

    /// Current destination route phase
    #[must_use]
    pub const fn route_phase(&self) -> RoutePhase {
        self.route_phase
    }

    /// Current query text for a role
    #[must_use]
    pub fn query(&self, role: MarkerRole) -> &str {
        &self.box_ref(role).query
    }

    /// Current suggestion list for a role
    #[must_use]
    pub fn suggestions(&self, role: MarkerRole) -> &[Place] {
        &self.box_ref(role).suggestions
    }

    /// Whether a role's input panel is visible
    #[must_use]
    pub fn panel_visible(&self, role: MarkerRole) -> bool {
        self.box_ref(role).visible
    }

    /// The resolved user coordinate, once located
    #[must_use]
    pub const fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    /// Turn-by-turn directions of the displayed route
    #[must_use]
    pub fn directions(&self) -> Option<&[DirectionStep]> {
        self.directions.as_deref()
    }

    /// Total distance of the displayed route in meters
    #[must_use]
    pub const fn total_distance_meters(&self) -> Option<f64> {
        self.total_distance_meters
    }

    /// The marker registry (read access)
    #[must_use]
    pub const fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    /// The map session (read access)
    #[must_use]
    pub const fn map(&self) -> &MapSession {
        &self.session
    }
}
