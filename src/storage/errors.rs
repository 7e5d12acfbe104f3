//! Errors reported by the flow table.
//!
//! PostgREST answers a failed request with an object of the form
//! `{"message", "code", "details", "hint"}`. [`StoreError`] mirrors that shape so
//! the diagnostics survive all the way into the rendered tool response.

use serde::{Deserialize, Serialize};

/// Error half of a table operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    /// Human-readable description
    pub message: String,
    /// Provider error code (e.g. a Postgres SQLSTATE such as `23505`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Additional detail supplied by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Provider suggestion for fixing the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StoreError {
    /// Create an error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    /// Attach a provider error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach provider details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The request never produced a response (connection refused, bad URL, ...).
    pub fn transport(error: reqwest::Error) -> Self {
        let store_error = StoreError::new(error.to_string()).with_code("TRANSPORT");
        match error.url() {
            Some(url) => store_error.with_details(format!("url: {}", url)),
            None => store_error,
        }
    }

    /// Decode a non-2xx response body, falling back to the raw text.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<StoreError>(body) {
            Ok(error) => error,
            Err(_) => {
                let text = String::from_utf8_lossy(body);
                let message = if text.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    text.into_owned()
                };
                StoreError::new(message).with_details(format!("HTTP status {}", status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_decodes_postgrest_error() {
        let body = br#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.agent_flows\" does not exist"}"#;
        let error = StoreError::from_response(404, body);

        assert_eq!(error.code.as_deref(), Some("42P01"));
        assert!(error.message.contains("agent_flows"));
        assert!(error.details.is_none());
    }

    #[test]
    fn test_from_response_falls_back_to_text() {
        let error = StoreError::from_response(502, b"Bad Gateway");
        assert_eq!(error.message, "Bad Gateway");
        assert_eq!(error.details.as_deref(), Some("HTTP status 502"));

        let empty = StoreError::from_response(500, b"");
        assert_eq!(empty.message, "HTTP 500");
    }

    #[test]
    fn test_serialization_skips_missing_fields() {
        let value = serde_json::to_value(StoreError::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({"message": "boom"}));
    }
}
