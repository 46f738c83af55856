//! # Search Transport Port
//!
//! One network round trip for one trimmed address.
//!
//! Implemented by the HTTP adapter; tests script it directly. The core
//! calls this exactly once per accepted submission and treats every
//! failure as terminal: nothing propagates past the controller.

use crate::core::SearchReply;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, SearchError>;

/// Errors a search round trip can settle with
///
/// A stale response is deliberately absent: staleness is decided by the
/// controller's token comparison, not by the transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Network-level failure before any HTTP status was produced
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status
    #[error("Search service returned status {0}")]
    Status(u16),

    /// The round trip exceeded the configured timeout
    #[error("Timeout after {0}ms")]
    Timeout(u64),

    /// The payload arrived but could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Trait for performing one search round trip
///
/// The address has already been trimmed and validated; implementations
/// only encode, send, receive and decode.
pub trait SearchTransport: Send + Sync {
    /// Resolve an address against the search service
    fn search(&self, address: &str) -> TransportResult<SearchReply>;
}
