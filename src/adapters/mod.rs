//! # Adapters
//!
//! Implementations of the ports.
//!
//! - `http` - `SearchTransport` over the service's HTTP API
//! - `headless` - in-memory `MapWidget` for tests and headless drivers
//! - `console` - terminal `Surface`

pub mod console;
pub mod headless;
pub mod http;
