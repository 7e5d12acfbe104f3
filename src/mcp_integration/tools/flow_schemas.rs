//! Tool definitions for stored flow management.
//!
//! Identifiers must be positive integers and names and payloads must be
//! non-empty strings. Keys not listed in a schema are dropped before the
//! handler runs.

use crate::mcp_integration::registry::{ToolDefinition, ToolLabels};
use crate::schema::flow_payload_schema;
use serde_json::{Value, json};

pub const ADD_FLOW: &str = "add_flow";
pub const UPDATE_FLOW: &str = "update_flow";
pub const GET_FLOW: &str = "get_flow";
pub const GET_ALL_FLOWS: &str = "get_all_flows";
pub const DELETE_FLOW: &str = "delete_flow";

pub const ADD_FLOW_LABELS: ToolLabels = ToolLabels::new("Flow added:", "Error adding flow:");
pub const UPDATE_FLOW_LABELS: ToolLabels = ToolLabels::new("Flow updated:", "Error updating flow:");
// Read and delete tools report failures under their success label.
pub const GET_FLOW_LABELS: ToolLabels = ToolLabels::new("Flow data:", "Flow data:");
pub const GET_ALL_FLOWS_LABELS: ToolLabels = ToolLabels::new("Flows data:", "Flows data:");
pub const DELETE_FLOW_LABELS: ToolLabels = ToolLabels::new("Deleted flow:", "Deleted flow:");

const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

fn flow_name_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": description
    })
}

fn flow_id_schema(description: &str) -> Value {
    json!({
        "type": "integer",
        "exclusiveMinimum": 0,
        "description": description
    })
}

/// Schema definition for flow creation tool
pub fn add_flow_tool() -> ToolDefinition {
    ToolDefinition::new(
        ADD_FLOW,
        "Adds a new node or edge to the Langflow workflow",
        json!({
            "$schema": DRAFT_07,
            "type": "object",
            "properties": {
                "flow_name": flow_name_schema("Name of the flow"),
                "flows": flow_payload_schema()
            },
            "required": ["flow_name", "flows"]
        }),
    )
}

/// Schema definition for flow update tool
pub fn update_flow_tool() -> ToolDefinition {
    ToolDefinition::new(
        UPDATE_FLOW,
        "Updates a node or edge in the Langflow workflow",
        json!({
            "$schema": DRAFT_07,
            "type": "object",
            "properties": {
                "id": flow_id_schema("Flow ID to update"),
                "flow_name": flow_name_schema("New name for the flow"),
                "flows": flow_payload_schema()
            },
            "required": ["id", "flow_name", "flows"]
        }),
    )
}

fn flow_lookup_schema() -> Value {
    json!({
        "$schema": DRAFT_07,
        "type": "object",
        "properties": {
            "id": flow_id_schema("Flow ID to retrieve")
        },
        "required": ["id"]
    })
}

/// Schema definition for single flow retrieval tool
pub fn get_flow_tool() -> ToolDefinition {
    ToolDefinition::new(
        GET_FLOW,
        "Gets the current Langflow workflow data",
        flow_lookup_schema(),
    )
}

/// Schema definition for flow listing tool
pub fn get_all_flows_tool() -> ToolDefinition {
    ToolDefinition::new(
        GET_ALL_FLOWS,
        "Gets all the workflows",
        json!({
            "$schema": DRAFT_07,
            "type": "object",
            "properties": {},
            "description": "Get all flows (no parameters needed)"
        }),
    )
}

/// Schema definition for flow deletion tool
pub fn delete_flow_tool() -> ToolDefinition {
    ToolDefinition::new(
        DELETE_FLOW,
        "Deletes a node or edge from the Langflow workflow",
        flow_lookup_schema(),
    )
}
