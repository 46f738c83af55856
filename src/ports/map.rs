//! # Map Widget Port
//!
//! Minimal surface of the interactive map collaborator.
//!
//! The core only ever places markers, removes them by handle and frames
//! the viewport; tile rendering and every other widget concern stays on
//! the other side of this trait.

/// Opaque handle to one placed marker, assigned by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Trait for the map widget collaborator
pub trait MapWidget: Send + Sync {
    /// Place one marker and return its handle
    fn add_marker(&mut self, lat: f64, lon: f64, label: &str) -> MarkerHandle;

    /// Remove a previously placed marker
    ///
    /// Removing an already-removed handle must be harmless.
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Adjust the viewport to the minimal region containing `points`
    fn fit_to_bounds(&mut self, points: &[(f64, f64)]);
}
