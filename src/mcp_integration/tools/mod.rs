//! MCP tool definitions
//!
//! Each function returns the [`ToolDefinition`](super::registry::ToolDefinition)
//! advertised by `tools/list`: the tool name, a description for the model and
//! the JSON Schema its arguments are checked against. The matching
//! [`ToolLabels`](super::registry::ToolLabels) constants give the text placed
//! in front of every response.
//!
//! Tools are grouped by the collaborator they reach:
//! - [`flow_schemas`] - stored flows in the flow table
//! - [`node_schemas`] - the live flow on the Langflow instance

pub mod flow_schemas;
pub mod node_schemas;

pub use flow_schemas::*;
pub use node_schemas::*;
