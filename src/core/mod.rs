//! # Core
//!
//! Pure orchestration, no I/O.
//!
//! This module contains the synchronization core:
//! - `AddressQuery` - validated user input
//! - `Score` / `SearchHit` / `SearchReply` - canonical result model
//! - `UiState` - the render state machine
//! - `ResultStore` - atomic result snapshot
//! - `MapOverlay` - marker reconciliation over a map widget
//! - `NotificationQueue` - the single transient message
//! - `RequestController` - token discipline, last-submitted-wins
//!
//! ## Design Principles
//!
//! - Suspension happens outside this module: `submit` hands back a
//!   `PendingSearch`, the host performs the transport call, `settle`
//!   applies the outcome. Everything in between is synchronous.
//! - Each shared resource (snapshot, marker set, notification) has
//!   exactly one owner; all mutation goes through the owner's methods.
//! - Time is an argument, never an ambient read, so every timing rule is
//!   deterministic under test.

mod controller;
mod notify;
mod overlay;
mod query;
mod record;
mod state;
mod store;
pub mod config;

// Re-exports
pub use config::SearchConfig;
pub use controller::{PendingSearch, RequestController, RequestToken, Settlement};
pub use notify::{DismissHandle, Notification, NotificationKind, NotificationQueue};
pub use overlay::MapOverlay;
pub use query::AddressQuery;
pub use record::{Score, SearchHit, SearchReply};
pub use state::UiState;
pub use store::ResultStore;
