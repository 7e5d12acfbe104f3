//! Core MCP integration infrastructure
//!
//! This module contains the server type and the response envelope shared by
//! the protocol and transport layers.

use super::handlers::build_registry;
use super::registry::{OperationRegistry, ToolProfile};
use crate::error::RegistrationError;
use crate::flow_service::FlowService;
use crate::langflow::LangflowApi;
use crate::storage::FlowStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Information about the MCP server reported during `initialize`
///
/// # Examples
///
/// ```rust
/// use langflow_mcp::mcp_integration::McpServerInfo;
///
/// let server_info = McpServerInfo {
///     name: "Team Flows".to_string(),
///     version: "1.2.0".to_string(),
///     description: "Flow tools for the support team".to_string(),
/// };
/// assert_eq!(server_info.name, "Team Flows");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpServerInfo {
    /// Name reported to clients
    pub name: String,
    /// Version reported to clients
    pub version: String,
    /// Description of the server's purpose
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "langflow-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Langflow workflow management tools".to_string(),
        }
    }
}

/// One piece of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// The result of a tool invocation as sent to the client.
///
/// Every response built by the dispatcher holds exactly one text block whose
/// first line is the tool's success or failure label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentBlock>,
}

impl ToolResponse {
    /// Label on the first line, pretty-printed JSON after it.
    pub fn labeled(label: &str, body: &str) -> Self {
        Self {
            content: vec![ContentBlock::Text {
                text: format!("{}\n{}", label, body),
            }],
        }
    }

    /// Text of the first block.
    pub fn text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ContentBlock::Text { text } => text.as_str(),
        })
    }
}

/// MCP server exposing flow tools
///
/// Wraps an [`OperationRegistry`] and dispatches tool invocations to it. The
/// server is cheap to clone and every clone shares the same registry, so it can
/// be handed to concurrent tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use langflow_mcp::config::Config;
/// use langflow_mcp::flow_service::FlowService;
/// use langflow_mcp::mcp_integration::{FlowMcpServer, ToolProfile};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let config = Config::from_env();
///     let service = Arc::new(FlowService::from_config(&config));
///     let mcp_server = FlowMcpServer::for_profile(service, ToolProfile::All)?;
///
///     println!("Available tools: {}", mcp_server.get_tools().len());
///     mcp_server.run_stdio().await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FlowMcpServer {
    pub(crate) registry: Arc<OperationRegistry>,
    pub(crate) server_info: McpServerInfo,
}

impl FlowMcpServer {
    pub fn new(registry: OperationRegistry) -> Self {
        Self::with_info(registry, McpServerInfo::default())
    }

    pub fn with_info(registry: OperationRegistry, server_info: McpServerInfo) -> Self {
        Self {
            registry: Arc::new(registry),
            server_info,
        }
    }

    /// Register the tools of `profile` against `service`.
    pub fn for_profile<S, L>(
        service: Arc<FlowService<S, L>>,
        profile: ToolProfile,
    ) -> Result<Self, RegistrationError>
    where
        S: FlowStore + 'static,
        L: LangflowApi + 'static,
    {
        Ok(Self::new(build_registry(service, profile)?))
    }

    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}
