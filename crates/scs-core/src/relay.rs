//! Form relay client for the site's newsletter and contact forms.
//!
//! One POST per submission with a free-form JSON object body. Success is the
//! HTTP status alone; the response body is ignored. Failures surface to the
//! caller, who shows an inline notice so the user can retry manually.

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::http;

/// Contact form fields as collected by the site.
#[derive(Debug, Clone, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Free-form key/value payload for the relay endpoint.
#[derive(Debug, Clone)]
pub struct FormPayload {
    fields: Map<String, Value>,
}

impl FormPayload {
    /// Newsletter-subscribe payload.
    pub fn newsletter(email: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("form".to_string(), Value::String("newsletter".to_string()));
        fields.insert("email".to_string(), Value::String(email.to_string()));
        Self { fields }
    }

    /// Contact-request payload.
    pub fn contact(request: &ContactRequest) -> Self {
        let mut fields = Map::new();
        fields.insert("form".to_string(), Value::String("contact".to_string()));
        fields.insert("name".to_string(), Value::String(request.name.clone()));
        fields.insert("email".to_string(), Value::String(request.email.clone()));
        if let Some(phone) = &request.phone {
            fields.insert("phone".to_string(), Value::String(phone.clone()));
        }
        fields.insert(
            "message".to_string(),
            Value::String(request.message.clone()),
        );
        Self { fields }
    }

    /// Adds or replaces an arbitrary field.
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Client for the form relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    endpoint: String,
}

impl RelayClient {
    /// Creates a client. The endpoint must be an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        http::ensure_http_url(endpoint)?;
        Ok(Self {
            endpoint: endpoint.to_string(),
        })
    }

    /// Submits a payload. Success is solely a 2xx status; no structured
    /// response body is consumed.
    pub fn submit(&self, payload: &FormPayload) -> Result<()> {
        let body = serde_json::to_vec(&payload.to_json()).context("encode form payload")?;
        http::post_json(&self.endpoint, &[], &body)
            .with_context(|| format!("POST {}", self.endpoint))?
            .ensure_success()
            .context("form relay rejected the submission")?;
        tracing::info!("form relay accepted submission to {}", self.endpoint);
        Ok(())
    }
}
