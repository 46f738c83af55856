//! # Address Query
//!
//! Validated user input for one search submission.
//!
//! The only way to obtain an `AddressQuery` is [`AddressQuery::parse`],
//! which trims the raw text and rejects empty input. Anything the
//! transport sees has already passed this gate.

/// A non-empty, trimmed free-text address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery(String);

impl AddressQuery {
    /// Parse raw user input into a query
    ///
    /// Returns `None` when the input is empty or whitespace-only.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The trimmed address text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
