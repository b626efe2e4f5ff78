//! Remote file listing client.
//!
//! Fetches the flat file listing (JSON array of `{id, name, url}` records)
//! that the studio site's content is resolved from. One GET per call, no
//! retries and no caching; callers treat a failed fetch as an empty listing
//! so pages degrade to their default content.

mod parse;

pub use parse::{parse_listing, FileRecord};

use anyhow::{Context, Result};

use crate::http;

/// Client for the remote file listing endpoint.
#[derive(Debug, Clone)]
pub struct ListingClient {
    endpoint: String,
}

impl ListingClient {
    /// Creates a client. The endpoint must be an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        http::ensure_http_url(endpoint)?;
        Ok(Self {
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches and parses the listing.
    pub fn fetch(&self) -> Result<Vec<FileRecord>> {
        let response = http::get(&self.endpoint)
            .with_context(|| format!("GET {}", self.endpoint))?
            .ensure_success()
            .with_context(|| format!("listing fetch from {}", self.endpoint))?;
        parse_listing(&response.body)
    }
}
