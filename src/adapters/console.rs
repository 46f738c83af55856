//! # Console Surface
//!
//! Terminal rendering of the result list and notifications.
//!
//! Stands in for the web page's output section: one line per hit with
//! rank, score badge and formatted address, a coordinates line below, and
//! a distinct placeholder card for the not-found case.

use crate::core::{Notification, NotificationKind, SearchHit, UiState};
use crate::ports::Surface;

/// Display surface that prints to stdout/stderr
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    /// Create a console surface
    pub fn new() -> Self {
        Self
    }
}

impl Surface for ConsoleSurface {
    fn render_results(&mut self, state: UiState, hits: &[SearchHit]) {
        match state {
            UiState::Idle => {}
            UiState::Loading => println!("Searching..."),
            UiState::Empty => {
                println!("  [ 0%] Address not found");
            }
            UiState::Success | UiState::Error => {
                if state == UiState::Error && !hits.is_empty() {
                    println!("  (showing previous results)");
                }
                for (index, hit) in hits.iter().enumerate() {
                    println!(
                        "  {}. [{:>3}] {}",
                        index + 1,
                        format!("{}", hit.score),
                        hit.formatted_address()
                    );
                    println!("       at {}, {}", hit.lat, hit.lon);
                }
            }
        }
    }

    fn show_notification(&mut self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Info => println!("[info] {}", notification.message),
            NotificationKind::Success => println!("[ok] {}", notification.message),
            NotificationKind::Error => eprintln!("[error] {}", notification.message),
        }
    }

    fn dismiss_notification(&mut self) {
        // a terminal has nothing to take down; lines simply scroll away
    }
}
