//! # Ports
//!
//! Trait definitions for external collaborators. Contracts only, no
//! implementations.
//!
//! - Ports define WHAT the core needs from the outside world
//! - Adapters define HOW it is provided
//!
//! The core depends on these narrow surfaces and nothing else: the
//! transport's wire mechanics, the map widget's rendering engine and the
//! display surface's markup all live behind them.

mod map;
mod surface;
mod transport;

// Re-export traits
pub use map::MapWidget;
pub use surface::Surface;
pub use transport::SearchTransport;

// Re-export types
pub use map::MarkerHandle;
pub use transport::{SearchError, TransportResult};
