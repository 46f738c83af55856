//! # Notifications
//!
//! The single transient feedback message and its auto-dismiss timer.
//!
//! At most one notification is ever live. Showing a new one replaces the
//! old one immediately and invalidates its pending dismiss: every `show`
//! bumps a generation counter, and a [`DismissHandle`] only acts when its
//! generation still matches. A timer callback firing for a superseded
//! notification is therefore a no-op rather than a wrong dismissal.
//!
//! Time is passed in by the host (`now: Instant`); the queue itself never
//! reads the clock, which keeps expiry fully deterministic in tests.

use std::time::{Duration, Instant};

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral guidance ("enter an address")
    Info,
    /// A search settled with results
    Success,
    /// A search failed
    Error,
}

/// One transient feedback message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Message text shown to the user
    pub message: String,
    /// Visual category
    pub kind: NotificationKind,
    /// When the notification was shown
    pub created_at: Instant,
}

/// Handle for one scheduled auto-dismiss
///
/// Firing a handle whose notification has been superseded does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissHandle {
    generation: u64,
}

struct LiveNotification {
    notification: Notification,
    deadline: Instant,
    generation: u64,
}

/// Owner of the single live notification and its dismissal
pub struct NotificationQueue {
    ttl: Duration,
    generation: u64,
    live: Option<LiveNotification>,
}

impl NotificationQueue {
    /// Create a queue with the given auto-dismiss duration
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            generation: 0,
            live: None,
        }
    }

    /// Show a notification, replacing any live one
    ///
    /// The previous notification's pending dismiss is invalidated.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> DismissHandle {
        self.generation += 1;
        let generation = self.generation;
        self.live = Some(LiveNotification {
            notification: Notification {
                message: message.into(),
                kind,
                created_at: now,
            },
            deadline: now + self.ttl,
            generation,
        });
        DismissHandle { generation }
    }

    /// Dismiss the live notification if its deadline has passed
    ///
    /// Returns `true` when a notification was dismissed by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.live {
            Some(live) if now >= live.deadline => {
                self.live = None;
                true
            }
            _ => false,
        }
    }

    /// Fire a scheduled dismiss explicitly
    ///
    /// Only acts when the handle still refers to the live notification;
    /// returns whether a dismissal happened.
    pub fn fire(&mut self, handle: DismissHandle) -> bool {
        match &self.live {
            Some(live) if live.generation == handle.generation => {
                self.live = None;
                true
            }
            _ => false,
        }
    }

    /// The live notification, if any
    pub fn current(&self) -> Option<&Notification> {
        self.live.as_ref().map(|live| &live.notification)
    }

    /// The configured auto-dismiss duration
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> NotificationQueue {
        NotificationQueue::new(Duration::from_secs(3))
    }

    #[test]
    fn test_show_and_current() {
        let mut queue = queue();
        let now = Instant::now();
        assert!(queue.current().is_none());

        queue.show("Found 3 matches", NotificationKind::Success, now);
        let live = queue.current().unwrap();
        assert_eq!(live.message, "Found 3 matches");
        assert_eq!(live.kind, NotificationKind::Success);
        assert_eq!(live.created_at, now);
    }

    #[test]
    fn test_auto_dismiss_after_ttl() {
        let mut queue = queue();
        let now = Instant::now();
        queue.show("hello", NotificationKind::Info, now);

        assert!(!queue.tick(now + Duration::from_secs(2)));
        assert!(queue.current().is_some());

        assert!(queue.tick(now + Duration::from_secs(3)));
        assert!(queue.current().is_none());

        // nothing left to dismiss
        assert!(!queue.tick(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_supersession_single_dismissal() {
        let mut queue = queue();
        let now = Instant::now();

        queue.show("first", NotificationKind::Info, now);
        queue.show("second", NotificationKind::Error, now + Duration::from_secs(1));

        // exactly one live notification, the newer one
        assert_eq!(queue.current().unwrap().message, "second");

        // first's deadline passes without dismissing the second
        assert!(!queue.tick(now + Duration::from_secs(3)));
        assert_eq!(queue.current().unwrap().message, "second");

        // exactly one eventual dismissal, at the second's deadline
        assert!(queue.tick(now + Duration::from_secs(4)));
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_stale_handle_is_noop() {
        let mut queue = queue();
        let now = Instant::now();

        let first = queue.show("first", NotificationKind::Info, now);
        queue.show("second", NotificationKind::Info, now);

        assert!(!queue.fire(first));
        assert_eq!(queue.current().unwrap().message, "second");
    }

    #[test]
    fn test_current_handle_fires_once() {
        let mut queue = queue();
        let now = Instant::now();

        let handle = queue.show("only", NotificationKind::Info, now);
        assert!(queue.fire(handle));
        assert!(queue.current().is_none());
        assert!(!queue.fire(handle));
    }
}
