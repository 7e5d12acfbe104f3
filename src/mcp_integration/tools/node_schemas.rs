//! Tool definitions for the live Langflow flow.

use crate::mcp_integration::registry::{ToolDefinition, ToolLabels};
use serde_json::json;

pub const GET_FLOW_DATA: &str = "get_flow_data";
pub const UPDATE_NODE: &str = "updateNode";

pub const GET_FLOW_DATA_LABELS: ToolLabels =
    ToolLabels::new("Flow data:", "Error fetching flow data:");
pub const UPDATE_NODE_LABELS: ToolLabels = ToolLabels::new("Node updated:", "Error updating node:");

pub fn get_flow_data_tool() -> ToolDefinition {
    ToolDefinition::new(
        GET_FLOW_DATA,
        "Gets the nodes and edges of the configured Langflow flow",
        json!({
            "type": "object",
            "properties": {}
        }),
    )
}

/// `json` accepts any value and is forwarded unchanged as the PATCH body.
/// Without it the PATCH is sent with no body.
pub fn update_node_tool() -> ToolDefinition {
    ToolDefinition::new(
        UPDATE_NODE,
        "Updates nodes and edges of the configured Langflow flow",
        json!({
            "type": "object",
            "properties": {
                "json": {
                    "description": "Flow update document sent to the Langflow API as-is"
                }
            }
        }),
    )
}
