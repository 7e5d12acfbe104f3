//! Schema for the stored flow document.
//!
//! The `flows` column is expected to hold a non-empty JSON string. Rows written
//! by other clients can drift from that, so reads re-check it and report drift
//! without failing the read.

use crate::error::ValidationError;
use jsonschema::{Draft, JSONSchema};
use serde_json::{Value, json};
use std::sync::LazyLock;

static FLOW_PAYLOAD: LazyLock<Result<JSONSchema, String>> = LazyLock::new(|| {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&flow_payload_schema())
        .map_err(|e| e.to_string())
});

/// `flows`: flow data as a JSON string.
pub fn flow_payload_schema() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": "Flow data as JSON string"
    })
}

/// Check a stored `flows` value against [`flow_payload_schema`].
pub fn check_flow_payload(flows: &Value) -> Result<(), ValidationError> {
    let schema = FLOW_PAYLOAD
        .as_ref()
        .map_err(|message| ValidationError::single("flows", message.clone()))?;

    if let Err(errors) = schema.validate(flows) {
        let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
        return Err(ValidationError::single("flows", messages.join("; ")));
    }
    Ok(())
}
