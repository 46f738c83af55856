//! # Configuration
//!
//! Tuning knobs for the synchronization core and its transport.
//!
//! Everything timing-related is configurable, not hardcoded: how long a
//! notification stays up, and the upper bound on one transport round trip
//! (the service itself carries no timeout, so the client must).

use std::time::Duration;

/// Configuration for a search session
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How long a notification stays up before auto-dismissing
    pub notification_ttl: Duration,

    /// Upper bound on one transport round trip
    ///
    /// Expiry behaves exactly like a failed settlement for the same token.
    pub transport_timeout: Duration,
}

impl SearchConfig {
    /// Create a configuration with the observed defaults
    ///
    /// 3 s notification lifetime, 10 s transport timeout.
    pub fn new() -> Self {
        Self {
            notification_ttl: Duration::from_secs(3),
            transport_timeout: Duration::from_secs(10),
        }
    }

    /// Set the notification auto-dismiss duration
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Set the transport timeout
    pub fn with_transport_timeout(mut self, timeout: Duration) -> Self {
        self.transport_timeout = timeout;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::new();
        assert_eq!(config.notification_ttl, Duration::from_secs(3));
        assert_eq!(config.transport_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new()
            .with_notification_ttl(Duration::from_secs(5))
            .with_transport_timeout(Duration::from_secs(30));

        assert_eq!(config.notification_ttl, Duration::from_secs(5));
        assert_eq!(config.transport_timeout, Duration::from_secs(30));
    }
}
