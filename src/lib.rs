//! # Geoseek
//!
//! Synchronization core for an interactive address search: free text in,
//! a ranked result list, a map marker overlay and a single transient
//! notification out, kept consistent across overlapping asynchronous
//! lookups.
//!
//! ## Overview
//!
//! Every submission mints a monotonic token. When a lookup settles, its
//! token is compared against the latest one minted; only a match may
//! touch the result snapshot, the markers, the UI state or the
//! notification. Stale settlements are discarded on arrival, so the
//! visible state always reflects the **last submitted** search, never
//! merely the last one to complete.
//!
//! External collaborators (the HTTP search service, the map widget, the
//! display surface) sit behind narrow port traits; the core performs no
//! I/O of its own.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::time::Instant;
//!
//! use geoseek::adapters::headless::HeadlessMap;
//! use geoseek::adapters::http::HttpSearchClient;
//! use geoseek::core::{RequestController, SearchConfig};
//!
//! let config = SearchConfig::new();
//! let client = HttpSearchClient::new("http://localhost:8000", &config);
//! let mut controller = RequestController::new(config, HeadlessMap::new());
//!
//! controller.search("Тверская 7", &client, Instant::now());
//! for hit in controller.results().iter() {
//!     println!("{} ({})", hit.formatted_address(), hit.score);
//! }
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use crate::core::{
    RequestController, RequestToken, Score, SearchConfig, SearchHit, SearchReply, Settlement,
    UiState,
};
pub use crate::ports::{MapWidget, MarkerHandle, SearchError, SearchTransport, Surface};
