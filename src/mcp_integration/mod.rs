//! MCP (Model Context Protocol) integration for Langflow flow management
//!
//! This module exposes the operations of [`FlowService`](crate::flow_service::FlowService)
//! as discoverable MCP tools. Clients list the tools, read their argument
//! schemas and invoke them over JSON-RPC; every invocation is validated against
//! the advertised schema before it reaches the service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   MCP Client    │───▶│  Tool Dispatcher │───▶│  Flow Service   │
//! │   (AI agent)    │    │  (This Module)   │    │  (Operations)   │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!          │                        │                       │
//!          ▼                        ▼                       ▼
//!    Tool Discovery          Schema Validation        Flow Table
//!    JSON-RPC on stdio       Response Labels          Langflow API
//! ```
//!
//! ## Module Structure
//!
//! - `core` - Server type and response envelope (FlowMcpServer, ToolResponse)
//! - `registry` - Operation registry, tool handlers and tool profiles
//! - `protocol` - Tool discovery and dispatch
//! - `stdio` - JSON-RPC 2.0 framing and the stdio loop
//! - `tools/` - Tool definitions and response labels
//!   - `flow_schemas` - Stored flow tools
//!   - `node_schemas` - Live Langflow flow tools
//! - `handlers/` - Tool execution handlers
//!   - `flow_crud` - Create, update and delete
//!   - `flow_queries` - Single and list reads
//!   - `langflow_nodes` - Langflow flow read and update
//!
//! ## Usage Example
//!
//! ```rust
//! use langflow_mcp::flow_service::FlowService;
//! use langflow_mcp::langflow::LangflowClient;
//! use langflow_mcp::mcp_integration::{FlowMcpServer, ToolProfile};
//! use langflow_mcp::storage::InMemoryFlowStore;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let service = Arc::new(FlowService::new(
//!         InMemoryFlowStore::new(),
//!         LangflowClient::new("http://localhost:7860", "flow-id", None),
//!     ));
//!     let mcp_server = FlowMcpServer::for_profile(service, ToolProfile::Workflows)?;
//!
//!     let response = mcp_server
//!         .call_tool("add_flow", Some(json!({"flow_name": "triage", "flows": "{}"})))
//!         .await?;
//!     assert!(response.text().unwrap().starts_with("Flow added:\n"));
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod stdio;
pub mod tools;


pub use self::core::{ContentBlock, FlowMcpServer, McpServerInfo, ToolResponse};
pub use protocol::ToolInvocation;
pub use registry::{
    OperationRegistry, ToolDefinition, ToolHandler, ToolLabels, ToolProfile, ToolSpec, handler_fn,
};
pub use stdio::{JsonRpcError, JsonRpcId, JsonRpcRequest, JsonRpcResponse};
