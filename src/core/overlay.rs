//! # Map Overlay
//!
//! Reconciles the map's marker set with a result snapshot.
//!
//! The overlay owns its marker handles explicitly; nothing else adds or
//! removes markers on the widget. A sync is clear, then populate in rank
//! order, then frame, executed as one synchronous critical section: there
//! is no suspension point between the steps, so two syncs can never
//! interleave over the single marker set.

use crate::ports::{MapWidget, MarkerHandle};

use super::record::SearchHit;

/// Owner of the live marker set on one map widget
pub struct MapOverlay<W: MapWidget> {
    widget: W,
    markers: Vec<MarkerHandle>,
}

impl<W: MapWidget> MapOverlay<W> {
    /// Wrap a map widget; starts with zero markers
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            markers: Vec::new(),
        }
    }

    /// Reconcile the marker set with a snapshot
    ///
    /// After this returns the markers are in 1:1 order-preserving
    /// correspondence with `hits`. With at least one hit the viewport is
    /// framed to the minimal bounds of all markers; with zero hits the
    /// viewport is left where it was.
    pub fn sync(&mut self, hits: &[SearchHit]) {
        self.clear();
        if hits.is_empty() {
            return;
        }

        let mut bounds = Vec::with_capacity(hits.len());
        for (index, hit) in hits.iter().enumerate() {
            let label = marker_label(index + 1, hit);
            let handle = self.widget.add_marker(hit.lat, hit.lon, &label);
            self.markers.push(handle);
            bounds.push((hit.lat, hit.lon));
        }

        self.widget.fit_to_bounds(&bounds);
    }

    /// Remove every held marker
    ///
    /// Safe to call on an already-empty set.
    pub fn clear(&mut self) {
        for handle in self.markers.drain(..) {
            self.widget.remove_marker(handle);
        }
    }

    /// Number of markers currently placed
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// The wrapped widget
    pub fn widget(&self) -> &W {
        &self.widget
    }
}

/// Marker label: rank, formatted address, rounded percentage
fn marker_label(rank: usize, hit: &SearchHit) -> String {
    format!("{}. {} ({})", rank, hit.formatted_address(), hit.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::headless::HeadlessMap;
    use crate::core::record::Score;

    fn hit(number: &str, lat: f64, lon: f64) -> SearchHit {
        SearchHit {
            locality: "Москва".to_string(),
            street: "Тверская улица".to_string(),
            number: number.to_string(),
            lat,
            lon,
            score: Score::normalize(0.92).unwrap(),
        }
    }

    #[test]
    fn test_marker_hit_bijection() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        let hits = vec![
            hit("7", 55.7602, 37.6085),
            hit("9", 55.7610, 37.6090),
            hit("12", 55.7620, 37.6100),
        ];

        overlay.sync(&hits);

        let markers = overlay.widget().markers();
        assert_eq!(markers.len(), hits.len());
        for (marker, hit) in markers.iter().zip(&hits) {
            assert_eq!((marker.lat, marker.lon), (hit.lat, hit.lon));
        }
    }

    #[test]
    fn test_resync_replaces_markers() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        overlay.sync(&[hit("7", 55.76, 37.60), hit("9", 55.77, 37.61)]);
        overlay.sync(&[hit("12", 55.78, 37.62)]);

        let markers = overlay.widget().markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].lat, 55.78);
        assert_eq!(overlay.marker_count(), 1);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        let hits = vec![hit("7", 55.76, 37.60)];

        overlay.sync(&hits);
        overlay.sync(&hits);

        assert_eq!(overlay.marker_count(), 1);
        assert_eq!(
            overlay.widget().viewport(),
            Some(&[(55.76, 37.60)][..])
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        overlay.sync(&[hit("7", 55.76, 37.60)]);

        overlay.clear();
        assert_eq!(overlay.marker_count(), 0);
        overlay.clear();
        assert_eq!(overlay.marker_count(), 0);
        assert!(overlay.widget().markers().is_empty());
    }

    #[test]
    fn test_empty_sync_leaves_viewport() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        overlay.sync(&[hit("7", 55.76, 37.60)]);
        assert_eq!(overlay.widget().fit_calls(), 1);

        overlay.sync(&[]);

        assert_eq!(overlay.marker_count(), 0);
        // no marker, no frame adjustment
        assert_eq!(overlay.widget().fit_calls(), 1);
        assert_eq!(overlay.widget().viewport(), Some(&[(55.76, 37.60)][..]));
    }

    #[test]
    fn test_marker_label_content() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        overlay.sync(&[hit("7", 55.7602, 37.6085)]);

        let markers = overlay.widget().markers();
        assert_eq!(markers[0].label, "1. Москва, Тверская улица, 7 (92%)");
    }

    #[test]
    fn test_framed_to_all_markers() {
        let mut overlay = MapOverlay::new(HeadlessMap::new());
        overlay.sync(&[hit("7", 55.76, 37.60), hit("9", 55.77, 37.61)]);

        assert_eq!(
            overlay.widget().viewport(),
            Some(&[(55.76, 37.60), (55.77, 37.61)][..])
        );
    }
}
