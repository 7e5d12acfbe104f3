//! Error types for flow tool operations.
//!
//! Errors are split by how far they travel:
//!
//! - [`FlowError`] covers domain and backend failures. These never escape a tool
//!   boundary; the dispatcher renders them into the normal response envelope.
//! - [`ValidationError`] describes every way a tool's arguments violated its schema.
//! - [`DispatchError`] is the protocol-level failure returned to the caller when a
//!   request names no arguments or an unknown tool.
//! - [`RegistrationError`] only occurs while the tool registry is being built.

use crate::langflow::LangflowError;
use crate::storage::StoreError;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// Convenience alias for domain operation results.
pub type FlowResult<T> = Result<T, FlowError>;

/// Domain-level error for flow operations.
///
/// Each variant carries a stable machine-readable code (see [`FlowError::code`])
/// and, where the backend supplied them, provider-specific diagnostics that are
/// included when the error is rendered for an MCP client.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The identifier is not a positive integer
    #[error("Invalid flow ID")]
    InvalidId { id: i64 },

    /// No record matched the identifier
    #[error("Flow not found")]
    NotFound { id: i64 },

    /// The store rejected a lookup
    #[error("Database error")]
    Database(#[source] StoreError),

    /// The store rejected an insert
    #[error("Failed to create flow")]
    InsertFailed(#[source] StoreError),

    /// The insert succeeded but returned no rows
    #[error("No flow created")]
    CreateFailed,

    /// The store rejected an update
    #[error("Failed to update flow")]
    UpdateFailed(#[source] StoreError),

    /// The store rejected a listing
    #[error("Failed to fetch flows")]
    FetchFailed(#[source] StoreError),

    /// The store rejected a delete
    #[error("Failed to delete flow")]
    DeleteFailed(#[source] StoreError),

    /// Arguments could not be converted into the operation's input type
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The Langflow API call failed
    #[error("{0}")]
    Backend(#[from] LangflowError),

    /// A result could not be rendered as JSON
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlowError {
    /// Stable error code used in rendered error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::InvalidId { .. } => "INVALID_ID",
            FlowError::NotFound { .. } => "NOT_FOUND",
            FlowError::Database(_) => "DB_ERROR",
            FlowError::InsertFailed(_) => "INSERT_ERROR",
            FlowError::CreateFailed => "CREATE_ERROR",
            FlowError::UpdateFailed(_) => "UPDATE_ERROR",
            FlowError::FetchFailed(_) => "FETCH_ERROR",
            FlowError::DeleteFailed(_) => "DELETE_ERROR",
            FlowError::Validation(_) => "VALIDATION_ERROR",
            FlowError::Backend(e) => e.code(),
            FlowError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Provider-specific diagnostic fields, if any.
    pub fn details(&self) -> Option<Value> {
        match self {
            FlowError::InvalidId { id } | FlowError::NotFound { id } => Some(json!({ "id": id })),
            FlowError::Database(e)
            | FlowError::InsertFailed(e)
            | FlowError::UpdateFailed(e)
            | FlowError::FetchFailed(e)
            | FlowError::DeleteFailed(e) => serde_json::to_value(e).ok(),
            FlowError::CreateFailed => None,
            FlowError::Validation(e) => Some(json!({ "issues": e.violations })),
            FlowError::Backend(e) => e.details(),
            FlowError::Serialization(_) => None,
        }
    }

    /// Render the error as the JSON object shown to MCP clients.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "name": "FlowError",
            "code": self.code(),
            "message": self.to_string(),
        });
        if let Some(details) = self.details() {
            body["details"] = details;
        }
        body
    }
}

/// A single schema violation: where it happened and what rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dotted path to the offending field; empty for the arguments object itself
    pub path: String,
    /// Human-readable description of the failed rule
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every violation found while validating a set of tool arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Shorthand for a failure with exactly one violation.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![Violation::new(path, message)])
    }

    /// Whether any violation is reported against `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Render as the JSON object shown to MCP clients.
    pub fn to_json(&self) -> Value {
        json!({
            "name": "ValidationError",
            "code": "VALIDATION_ERROR",
            "issues": self.violations,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .violations
            .iter()
            .map(|v| {
                if v.path.is_empty() {
                    v.message.clone()
                } else {
                    format!("{}: {}", v.path, v.message)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&formatted)
    }
}

impl std::error::Error for ValidationError {}

/// Protocol-level failures that propagate to the MCP caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The invocation carried no arguments payload
    #[error("Arguments are required")]
    MissingArguments,

    /// The invocation named a tool that is not registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The `tools/call` parameters could not be parsed
    #[error("Invalid input: {0}")]
    InvalidRequest(String),
}

/// Errors raised while building the tool registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    #[error("Invalid schema for tool '{tool}': {message}")]
    Schema { tool: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_error_codes_and_messages() {
        let err = FlowError::NotFound { id: 7 };
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Flow not found");

        let rendered = err.to_json();
        assert_eq!(rendered["name"], "FlowError");
        assert_eq!(rendered["code"], "NOT_FOUND");
        assert_eq!(rendered["details"]["id"], 7);
    }

    #[test]
    fn test_store_error_details_are_rendered() {
        let err = FlowError::InsertFailed(StoreError {
            message: "duplicate key value violates unique constraint".to_string(),
            code: Some("23505".to_string()),
            details: None,
            hint: None,
        });

        let rendered = err.to_json();
        assert_eq!(rendered["code"], "INSERT_ERROR");
        assert_eq!(rendered["message"], "Failed to create flow");
        assert_eq!(rendered["details"]["code"], "23505");
    }

    #[test]
    fn test_create_failed_has_no_details() {
        let rendered = FlowError::CreateFailed.to_json();
        assert!(rendered.get("details").is_none());
    }

    #[test]
    fn test_validation_error_display_lists_every_violation() {
        let err = ValidationError::new(vec![
            Violation::new("flow_name", "\"flow_name\" is a required property"),
            Violation::new("id", "0 is less than or equal to the minimum of 0"),
        ]);

        let text = err.to_string();
        assert!(text.contains("flow_name: "));
        assert!(text.contains("id: "));
        assert!(err.has_path("id"));
        assert!(!err.has_path("flows"));
    }

    #[test]
    fn test_dispatch_error_messages() {
        assert_eq!(
            DispatchError::MissingArguments.to_string(),
            "Arguments are required"
        );
        assert_eq!(
            DispatchError::UnknownTool("drop_table".to_string()).to_string(),
            "Unknown tool: drop_table"
        );
    }
}
