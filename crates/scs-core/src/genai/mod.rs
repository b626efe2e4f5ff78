//! Generative content client for the admin tool.
//!
//! Two independent request types against the studio's generative endpoint:
//! short text (JSON response) and image (raw bytes response). Availability
//! gates an administrative feature only; nothing here sits on the end-user
//! path, and there is no automatic retry.

mod error;

pub use error::GenAiError;

use serde::Deserialize;

use crate::config::GenAiConfig;
use crate::http;

/// Env var holding the API credential; overrides the config file entry.
pub const API_KEY_ENV: &str = "SCS_GENAI_API_KEY";

/// Credential availability, checkable without performing any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Ready,
    MissingCredential,
}

/// Client for the generative text/image endpoints.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    text_url: String,
    image_url: String,
    api_key: Option<String>,
}

/// Env var wins over the config file; empty strings count as unset.
fn resolve_api_key(env_value: Option<String>, file_value: Option<&str>) -> Option<String> {
    env_value
        .filter(|k| !k.is_empty())
        .or_else(|| file_value.filter(|k| !k.is_empty()).map(String::from))
}

#[derive(Debug, Deserialize)]
struct TextResponse {
    #[serde(default)]
    text: String,
}

impl GenAiClient {
    pub fn new(text_url: &str, image_url: &str, api_key: Option<String>) -> Self {
        Self {
            text_url: text_url.to_string(),
            image_url: image_url.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Builds a client from config, with `SCS_GENAI_API_KEY` taking
    /// precedence over the config file credential.
    pub fn from_config(cfg: &GenAiConfig) -> Self {
        let api_key = resolve_api_key(std::env::var(API_KEY_ENV).ok(), cfg.api_key.as_deref());
        Self {
            text_url: cfg.text_url.clone(),
            image_url: cfg.image_url.clone(),
            api_key,
        }
    }

    pub fn status(&self) -> CredentialStatus {
        if self.api_key.is_some() {
            CredentialStatus::Ready
        } else {
            CredentialStatus::MissingCredential
        }
    }

    fn auth_header(&self) -> Result<(String, String), GenAiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingCredential)?;
        Ok(("Authorization".to_string(), format!("Bearer {}", key)))
    }

    fn post_prompt(&self, url: &str, prompt: &str) -> Result<http::HttpResponse, GenAiError> {
        let header = self.auth_header()?;
        let body = serde_json::to_vec(&serde_json::json!({ "prompt": prompt }))
            .map_err(|e| GenAiError::Malformed(format!("encode request: {}", e)))?;
        let response = http::post_json(url, &[header], &body)?.ensure_success()?;
        Ok(response)
    }

    /// Generates short text for a free-text prompt.
    pub fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        let response = self.post_prompt(&self.text_url, prompt)?;
        let parsed: TextResponse = serde_json::from_slice(&response.body)
            .map_err(|e| GenAiError::Malformed(format!("text response: {}", e)))?;
        if parsed.text.is_empty() {
            return Err(GenAiError::Malformed(
                "text response carried no \"text\" field".to_string(),
            ));
        }
        tracing::debug!("generated {} chars of text", parsed.text.len());
        Ok(parsed.text)
    }

    /// Generates an image for a free-text prompt; the response body is the
    /// raw image bytes.
    pub fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, GenAiError> {
        let response = self.post_prompt(&self.image_url, prompt)?;
        if response.body.is_empty() {
            return Err(GenAiError::Malformed("empty image body".to_string()));
        }
        tracing::debug!("generated image of {} bytes", response.body.len());
        Ok(response.body)
    }
}
