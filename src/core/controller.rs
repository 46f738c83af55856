//! # Request Controller
//!
//! Owner of "the current search" and of everything a settlement may touch.
//!
//! Every submission mints a monotonically increasing [`RequestToken`].
//! When a transport round trip settles, its token is compared against the
//! latest one minted: only a match is allowed to mutate the result store,
//! the map overlay, the UI state or the notification. Everything else is
//! discarded on arrival, which makes the effective order
//! **last-submitted-wins** regardless of how settlements are interleaved.
//!
//! The controller itself never performs I/O. [`RequestController::submit`]
//! hands back a [`PendingSearch`]; the host runs the transport call (the
//! single suspension point) and feeds the outcome to
//! [`RequestController::settle`]. [`RequestController::search`] bundles
//! the three steps for sequential drivers.

use std::sync::Arc;
use std::time::Instant;

use crate::ports::{MapWidget, SearchError, SearchTransport};

use super::config::SearchConfig;
use super::notify::{Notification, NotificationKind, NotificationQueue};
use super::overlay::MapOverlay;
use super::query::AddressQuery;
use super::record::{SearchHit, SearchReply};
use super::state::UiState;
use super::store::ResultStore;

/// Opaque monotonic identifier for one submission
///
/// Minted by the controller, compared at settlement, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// A submission waiting on its transport round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    /// Token to present back at settlement
    pub token: RequestToken,
    /// The validated query to send
    pub query: AddressQuery,
}

/// How one settlement was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The reply replaced the snapshot with this many hits
    Success(usize),
    /// The reply was valid but held zero hits
    NoMatches,
    /// The transport failed; previous results stay visible
    Failed,
    /// The token was no longer current; nothing was touched
    Stale,
}

/// Synchronization core for one search session
pub struct RequestController<W: MapWidget> {
    next_token: u64,
    current: Option<RequestToken>,
    state: UiState,
    store: ResultStore,
    overlay: MapOverlay<W>,
    notifications: NotificationQueue,
    searched_address: Option<String>,
}

impl<W: MapWidget> RequestController<W> {
    /// Create a controller over the given map widget
    pub fn new(config: SearchConfig, widget: W) -> Self {
        Self {
            next_token: 0,
            current: None,
            state: UiState::Idle,
            store: ResultStore::new(),
            overlay: MapOverlay::new(widget),
            notifications: NotificationQueue::new(config.notification_ttl),
            searched_address: None,
        }
    }

    /// Submit a raw address for searching
    ///
    /// Empty or whitespace-only input is rejected before any token is
    /// minted: an informational notification is raised, the UI state is
    /// left unchanged and `None` is returned.
    ///
    /// Valid input invalidates any in-flight search, enters `Loading` and
    /// returns the [`PendingSearch`] the host must run through a
    /// [`SearchTransport`].
    pub fn submit(&mut self, raw: &str, now: Instant) -> Option<PendingSearch> {
        let query = match AddressQuery::parse(raw) {
            Some(query) => query,
            None => {
                self.notifications
                    .show("Enter an address to search", NotificationKind::Info, now);
                return None;
            }
        };

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.current = Some(token);
        self.state = UiState::Loading;
        Some(PendingSearch { token, query })
    }

    /// Settle one transport outcome
    ///
    /// A token that is no longer current is discarded silently: no store,
    /// overlay, state or notification change. A matching success replaces
    /// the snapshot, syncs the overlay and enters `Success` or `Empty`.
    /// A matching failure keeps the previous results visible and enters
    /// `Error`. Either way at most one notification is raised.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchReply, SearchError>,
        now: Instant,
    ) -> Settlement {
        if self.current != Some(token) {
            return Settlement::Stale;
        }
        self.current = None;

        match outcome {
            Ok(reply) => {
                self.searched_address = reply.searched_address;
                let count = reply.objects.len();
                self.store.replace(reply.objects);
                let snapshot = self.store.current();
                self.overlay.sync(&snapshot);

                if count == 0 {
                    self.state = UiState::Empty;
                    self.notifications.show(
                        "No matching addresses found",
                        NotificationKind::Info,
                        now,
                    );
                    Settlement::NoMatches
                } else {
                    self.state = UiState::Success;
                    let noun = if count == 1 { "match" } else { "matches" };
                    self.notifications.show(
                        format!("Found {} {}", count, noun),
                        NotificationKind::Success,
                        now,
                    );
                    Settlement::Success(count)
                }
            }
            Err(error) => {
                // last known good results stay on screen
                self.state = UiState::Error;
                self.notifications
                    .show(error.to_string(), NotificationKind::Error, now);
                Settlement::Failed
            }
        }
    }

    /// Submit, run the transport, settle; for sequential drivers
    ///
    /// Returns `None` when the input was rejected before the transport.
    pub fn search(
        &mut self,
        raw: &str,
        transport: &dyn SearchTransport,
        now: Instant,
    ) -> Option<Settlement> {
        let pending = self.submit(raw, now)?;
        let outcome = transport.search(pending.query.as_str());
        Some(self.settle(pending.token, outcome, now))
    }

    /// Drive notification expiry; returns whether one was dismissed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.tick(now)
    }

    /// The active UI state
    pub fn state(&self) -> UiState {
        self.state
    }

    /// The current result snapshot
    pub fn results(&self) -> Arc<[SearchHit]> {
        self.store.current()
    }

    /// The live notification, if any
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// The address the service echoed for the applied results
    pub fn searched_address(&self) -> Option<&str> {
        self.searched_address.as_deref()
    }

    /// Whether a submission is awaiting settlement
    pub fn has_pending(&self) -> bool {
        self.current.is_some()
    }

    /// The map overlay, for viewport and marker inspection
    pub fn overlay(&self) -> &MapOverlay<W> {
        &self.overlay
    }
}
