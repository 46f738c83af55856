//! # Headless Map
//!
//! In-memory `MapWidget` with no rendering.
//!
//! Records exactly the calls a real widget would receive: placed markers
//! with their labels, and the bounds of the last viewport frame. Backs
//! the test suite and the demo driver.

use crate::ports::{MapWidget, MarkerHandle};

/// One placed marker as the widget saw it
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    /// Handle assigned at placement
    pub handle: MarkerHandle,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Label text attached to the marker
    pub label: String,
}

/// Map widget that stores markers instead of drawing them
#[derive(Debug, Default)]
pub struct HeadlessMap {
    next_handle: u64,
    markers: Vec<PlacedMarker>,
    viewport: Option<Vec<(f64, f64)>>,
    fit_calls: usize,
}

impl HeadlessMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers currently on the map, in placement order
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// Bounds of the last viewport frame, if any happened
    pub fn viewport(&self) -> Option<&[(f64, f64)]> {
        self.viewport.as_deref()
    }

    /// How many times the viewport was framed
    pub fn fit_calls(&self) -> usize {
        self.fit_calls
    }
}

impl MapWidget for HeadlessMap {
    fn add_marker(&mut self, lat: f64, lon: f64, label: &str) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.push(PlacedMarker {
            handle,
            lat,
            lon,
            label: label.to_string(),
        });
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.retain(|marker| marker.handle != handle);
    }

    fn fit_to_bounds(&mut self, points: &[(f64, f64)]) {
        self.fit_calls += 1;
        self.viewport = Some(points.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut map = HeadlessMap::new();
        let a = map.add_marker(55.76, 37.60, "a");
        let b = map.add_marker(55.76, 37.60, "b");
        assert_ne!(a, b);
        assert_eq!(map.markers().len(), 2);
    }

    #[test]
    fn test_remove_by_handle() {
        let mut map = HeadlessMap::new();
        let a = map.add_marker(55.76, 37.60, "a");
        map.add_marker(55.77, 37.61, "b");

        map.remove_marker(a);
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].label, "b");

        // removing again is harmless
        map.remove_marker(a);
        assert_eq!(map.markers().len(), 1);
    }

    #[test]
    fn test_fit_records_bounds() {
        let mut map = HeadlessMap::new();
        assert!(map.viewport().is_none());

        map.fit_to_bounds(&[(55.76, 37.60), (55.77, 37.61)]);
        assert_eq!(map.fit_calls(), 1);
        assert_eq!(map.viewport(), Some(&[(55.76, 37.60), (55.77, 37.61)][..]));
    }
}
