//! # Result Store
//!
//! The single authoritative snapshot of the latest resolved result set.
//!
//! `replace` swaps the whole snapshot in one assignment; readers hold an
//! `Arc` to the sequence they observed and can never see a partially
//! updated one. Whether an empty snapshot means "nothing found" or
//! "no search yet" is tracked by [`UiState`](super::state::UiState),
//! not here.

use std::sync::Arc;

use super::record::SearchHit;

/// Owner of the canonical result snapshot
#[derive(Debug, Clone)]
pub struct ResultStore {
    snapshot: Arc<[SearchHit]>,
}

impl ResultStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new().into(),
        }
    }

    /// Atomically replace the snapshot
    ///
    /// An empty sequence is a valid replacement.
    pub fn replace(&mut self, objects: Vec<SearchHit>) {
        self.snapshot = objects.into();
    }

    /// The current snapshot, in service rank order
    pub fn current(&self) -> Arc<[SearchHit]> {
        Arc::clone(&self.snapshot)
    }

    /// Number of hits in the current snapshot
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the current snapshot holds no hits
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
