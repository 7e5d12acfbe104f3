//! Argument schemas and validation for flow tools.
//!
//! Every tool advertises a JSON Schema (draft 7) for its arguments. The same
//! document is compiled once at startup and used to check incoming arguments
//! before any handler runs, so what clients see in `tools/list` is exactly what
//! the server enforces.
//!
//! # Key Types
//!
//! - [`ArgumentSchema`] - compiled schema plus the policy for undeclared keys
//! - [`ValidatedArguments`] - arguments that passed validation
//! - [`UnknownFields`] - whether undeclared keys are dropped or rejected
//!
//! # Examples
//!
//! ```rust
//! use langflow_mcp::schema::{ArgumentSchema, UnknownFields};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = ArgumentSchema::compile(
//!     json!({
//!         "type": "object",
//!         "properties": {"id": {"type": "integer", "exclusiveMinimum": 0}},
//!         "required": ["id"]
//!     }),
//!     UnknownFields::Strip,
//! )?;
//!
//! let validated = schema.validate(Some(&json!({"id": 4, "extra": true})))?;
//! assert_eq!(validated.as_value(), json!({"id": 4}));
//!
//! let rejected = schema.validate(Some(&json!({"id": 0}))).unwrap_err();
//! assert!(rejected.has_path("id"));
//! # Ok(())
//! # }
//! ```

pub mod payload;
pub mod validation;

pub use payload::{check_flow_payload, flow_payload_schema};
pub use validation::ValidatedArguments;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::fmt;

/// Treatment of argument keys that the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    /// Drop undeclared keys before the handler sees the arguments
    #[default]
    Strip,
    /// Report undeclared keys as violations
    Reject,
}

/// A tool's argument schema, compiled and ready to validate.
pub struct ArgumentSchema {
    document: Value,
    compiled: JSONSchema,
    unknown_fields: UnknownFields,
}

impl ArgumentSchema {
    /// Compile `document` as a draft 7 schema.
    ///
    /// With [`UnknownFields::Reject`] the document is amended with
    /// `"additionalProperties": false` so the advertised schema states the rule.
    pub fn compile(mut document: Value, unknown_fields: UnknownFields) -> Result<Self, String> {
        if unknown_fields == UnknownFields::Reject {
            if let Some(object) = document.as_object_mut() {
                object.insert("additionalProperties".to_string(), Value::Bool(false));
            }
        }

        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            document,
            compiled,
            unknown_fields,
        })
    }

    /// The schema document as advertised to clients.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// Whether the schema lists `key` under `properties`.
    pub fn declares(&self, key: &str) -> bool {
        self.document
            .get("properties")
            .and_then(Value::as_object)
            .is_some_and(|properties| properties.contains_key(key))
    }
}

impl fmt::Debug for ArgumentSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSchema")
            .field("document", &self.document)
            .field("unknown_fields", &self.unknown_fields)
            .finish()
    }
}
