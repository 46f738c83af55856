//! # HTTP Search Transport
//!
//! `SearchTransport` over the address search service's HTTP API:
//! `GET {base}/api/search?address=<url-encoded text>`.
//!
//! All wire normalization happens here and nowhere else: score
//! convention (fraction vs integer percentage), field-name variants
//! (`searched_address` vs `searchedAddress`) and coordinate sanity
//! checks. Past this boundary the core only sees canonical values.
//!
//! # Example
//! ```rust,ignore
//! let config = SearchConfig::new();
//! let client = HttpSearchClient::new("http://localhost:8000", &config);
//! let reply = client.search("Тверская 7")?;
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::core::{Score, SearchConfig, SearchHit, SearchReply};
use crate::ports::{SearchError, SearchTransport, TransportResult};

/// HTTP client for the address search service
pub struct HttpSearchClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_ms: u64,
}

#[derive(Deserialize)]
struct WireReply {
    #[serde(default, alias = "searchedAddress")]
    searched_address: Option<String>,
    objects: Vec<WireHit>,
}

#[derive(Deserialize)]
struct WireHit {
    #[serde(default)]
    locality: String,
    #[serde(default)]
    street: String,
    #[serde(default)]
    number: String,
    lat: f64,
    lon: f64,
    score: f64,
}

impl HttpSearchClient {
    /// Create a client for the given service base URL
    ///
    /// The round-trip timeout comes from the configuration; when it fires
    /// the call settles as [`SearchError::Timeout`], indistinguishable to
    /// the controller from any other matching-token failure.
    pub fn new(base_url: &str, config: &SearchConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.transport_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_ms: config.transport_timeout.as_millis() as u64,
        }
    }

    /// Check whether the search service answers at all
    ///
    /// Any HTTP response counts as reachable; the status is irrelevant.
    pub fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/search", self.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .is_ok()
    }

    /// The service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SearchTransport for HttpSearchClient {
    fn search(&self, address: &str) -> TransportResult<SearchReply> {
        let response = self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("address", address)])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(self.timeout_ms)
                } else if e.is_connect() {
                    SearchError::Connection(format!(
                        "Cannot reach search service at {}",
                        self.base_url
                    ))
                } else {
                    SearchError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SearchError::Connection(e.to_string()))?;
        decode_reply(&body)
    }
}

/// Decode and normalize one response payload
pub fn decode_reply(body: &str) -> TransportResult<SearchReply> {
    let wire: WireReply =
        serde_json::from_str(body).map_err(|e| SearchError::Malformed(e.to_string()))?;

    let mut objects = Vec::with_capacity(wire.objects.len());
    for hit in wire.objects {
        if !hit.lat.is_finite() || !hit.lon.is_finite() {
            return Err(SearchError::Malformed(format!(
                "non-finite coordinates ({}, {})",
                hit.lat, hit.lon
            )));
        }
        let score = Score::normalize(hit.score).ok_or_else(|| {
            SearchError::Malformed(format!("non-finite score {}", hit.score))
        })?;
        objects.push(SearchHit {
            locality: hit.locality,
            street: hit.street,
            number: hit.number,
            lat: hit.lat,
            lon: hit.lon,
            score,
        });
    }

    Ok(SearchReply {
        searched_address: wire.searched_address,
        objects,
    })
}
