//! Generative endpoint error taxonomy.
//!
//! Classified so callers can present "missing credential" distinctly from a
//! generic failure; neither case triggers an automatic retry.

use thiserror::Error;

use crate::http::TransferError;

#[derive(Debug, Error)]
pub enum GenAiError {
    /// No credential available: neither the env var nor the config file
    /// carries an API key. Reported before any request is made.
    #[error("generative API credential not set (export SCS_GENAI_API_KEY or set [genai] api_key)")]
    MissingCredential,

    /// The endpoint answered with a non-2xx status.
    #[error("generative endpoint returned HTTP {0}")]
    Http(u32),

    /// The request itself failed (timeout, connection, DNS).
    #[error("transport: {0}")]
    Transport(#[source] curl::Error),

    /// The endpoint answered 2xx but the body was not usable.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<TransferError> for GenAiError {
    fn from(e: TransferError) -> Self {
        match e {
            TransferError::Curl(e) => GenAiError::Transport(e),
            TransferError::Http(code) => GenAiError::Http(code),
        }
    }
}
