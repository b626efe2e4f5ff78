//! Shared blocking HTTP transport over libcurl.
//!
//! All outbound requests go through here: GET for the listing fetch, POST with
//! a JSON body for the form relay and the generative endpoints. One request
//! per call, no retries.

use anyhow::Context;
use std::fmt;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 15;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A completed HTTP exchange: status code and raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a non-2xx exchange into `TransferError::Http`.
    pub fn ensure_success(self) -> Result<HttpResponse, TransferError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransferError::Http(self.status))
        }
    }
}

/// Error from a single HTTP exchange (curl failure or non-2xx status).
/// Kept as an enum so callers can classify before converting to anyhow.
#[derive(Debug)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// The exchange completed but the status was not 2xx.
    Http(u32),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Curl(e) => write!(f, "{}", e),
            TransferError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::Curl(e) => Some(e),
            TransferError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for TransferError {
    fn from(e: curl::Error) -> Self {
        TransferError::Curl(e)
    }
}

/// Validates that `endpoint` is an absolute http(s) URL.
pub fn ensure_http_url(endpoint: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(endpoint)
        .with_context(|| format!("invalid endpoint URL: {}", endpoint))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("endpoint must be http(s), got {}: {}", other, endpoint),
    }
}

/// Performs a GET and collects the body. Follows redirects.
pub fn get(url: &str) -> Result<HttpResponse, TransferError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))?;
    easy.timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(HttpResponse { status, body })
}

/// POSTs `body` as `application/json` and collects the response body.
///
/// `extra_headers` are appended as `Name: value` lines (e.g. authorization).
pub fn post_json(
    url: &str,
    extra_headers: &[(String, String)],
    body: &[u8],
) -> Result<HttpResponse, TransferError> {
    let mut response_body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.post(true)?;
    easy.post_fields_copy(body)?;
    easy.connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))?;
    easy.timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))?;

    let mut list = curl::easy::List::new();
    list.append("Content-Type: application/json")?;
    for (name, value) in extra_headers {
        list.append(&format!("{}: {}", name.trim(), value.trim()))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            response_body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(HttpResponse {
        status,
        body: response_body,
    })
}
