//! # Display Surface Port
//!
//! Rendering of the result list and the transient notification.
//!
//! The `Empty` state gets a distinct "not found" render, not an error
//! render; the `Error` state renders whatever previous results are still
//! in the snapshot.

use crate::core::{Notification, SearchHit, UiState};

/// Trait for the display surface collaborator
pub trait Surface: Send + Sync {
    /// Render the result list for the current state and snapshot
    fn render_results(&mut self, state: UiState, hits: &[SearchHit]);

    /// Show the single transient notification
    fn show_notification(&mut self, notification: &Notification);

    /// Remove the notification from view
    fn dismiss_notification(&mut self);
}
