//! # Result Records
//!
//! Canonical data model for resolved search results.
//!
//! The search service has shipped two score conventions over time: a 0-1
//! fraction and an integer percentage. The canonical internal
//! representation is the **fraction**; [`Score::normalize`] converts at
//! the wire boundary and nothing past that boundary ever mixes the two.

/// Normalized match confidence, stored as a 0-1 fraction
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Normalize a raw service score into the canonical fraction
    ///
    /// Raw values above 1 are read as integer percentages and divided by
    /// 100; the result is clamped to [0, 1]. Non-finite input yields
    /// `None`.
    pub fn normalize(raw: f64) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }
        let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
        Some(Self(fraction.clamp(0.0, 1.0)))
    }

    /// The 0-1 fraction
    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// The score as a rounded integer percentage (0-100)
    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// One resolved address, in service rank order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// City or settlement name
    pub locality: String,
    /// Street name, possibly with its type ("Тверская улица")
    pub street: String,
    /// House number, free-form ("7", "12к3")
    pub number: String,
    /// Latitude, finite (checked at the wire boundary)
    pub lat: f64,
    /// Longitude, finite (checked at the wire boundary)
    pub lon: f64,
    /// Normalized match confidence
    pub score: Score,
}

impl SearchHit {
    /// Human-readable address: non-blank parts joined by ", "
    pub fn formatted_address(&self) -> String {
        [&self.locality, &self.street, &self.number]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The hit's coordinates as a `(lat, lon)` pair
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// One settled search response
///
/// An empty `objects` sequence is a valid outcome, distinct from failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReply {
    /// The address string the service echoed back, when it did
    pub searched_address: Option<String>,
    /// Resolved hits in service rank order; the core never re-sorts
    pub objects: Vec<SearchHit>,
}
