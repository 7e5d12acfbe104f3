//! Errors from the Langflow flows API.

use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum LangflowError {
    /// The request could not be sent or the response could not be read
    #[error("Langflow API unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Langflow API returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The API answered with an empty or null body
    #[error("No response received from API")]
    EmptyResponse,

    /// The response body was not JSON
    #[error("Invalid response from Langflow API: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LangflowError {
    pub fn code(&self) -> &'static str {
        match self {
            LangflowError::Unreachable(_) => "BACKEND_UNREACHABLE",
            LangflowError::Status { .. } => "BACKEND_STATUS",
            LangflowError::EmptyResponse => "EMPTY_RESPONSE",
            LangflowError::Decode(_) => "BACKEND_DECODE",
        }
    }

    /// HTTP status and body for rendering, when the API produced them.
    pub fn details(&self) -> Option<Value> {
        match self {
            LangflowError::Unreachable(e) => e.url().map(|url| json!({ "url": url.as_str() })),
            LangflowError::Status { status, body } => {
                let body = serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.clone()));
                Some(json!({ "status": status, "body": body }))
            }
            LangflowError::EmptyResponse | LangflowError::Decode(_) => None,
        }
    }
}
