//! MCP protocol layer for tool discovery and dispatch
//!
//! Dispatch is the only place where tool outcomes are shaped into responses:
//!
//! 1. An invocation without arguments, or naming an unregistered tool, is a
//!    [`DispatchError`] returned to the caller.
//! 2. Arguments that fail the tool's schema produce a normal response carrying
//!    the failure label and the validation issues. The handler is not called.
//! 3. Otherwise the handler runs, and its result or error is rendered under the
//!    success or failure label.

use super::core::{FlowMcpServer, ToolResponse};
use super::registry::ToolDefinition;
use crate::error::DispatchError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Parameters of a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl FlowMcpServer {
    /// Tool definitions in registration order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry.list_tools()
    }

    /// Tool definitions as the JSON objects sent in `tools/list`.
    pub fn get_tools(&self) -> Vec<Value> {
        self.registry
            .list_tools()
            .iter()
            .filter_map(|definition| serde_json::to_value(definition).ok())
            .collect()
    }

    /// Execute a tool by name with arguments
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResponse, DispatchError> {
        let request_id = Uuid::new_v4().to_string();
        info!("MCP tool call '{}' (request: '{}')", name, request_id);

        let arguments = match arguments {
            None | Some(Value::Null) => {
                warn!("Tool '{}' called without arguments (request: '{}')", name, request_id);
                return Err(DispatchError::MissingArguments);
            }
            Some(arguments) => arguments,
        };

        let Some(tool) = self.registry.get(name) else {
            warn!("Unknown tool '{}' (request: '{}')", name, request_id);
            return Err(DispatchError::UnknownTool(name.to_string()));
        };
        debug!("Tool '{}' arguments: {} (request: '{}')", name, arguments, request_id);

        let validated = match tool.schema.validate(Some(&arguments)) {
            Ok(validated) => validated,
            Err(validation) => {
                warn!(
                    "Tool '{}' arguments rejected: {} (request: '{}')",
                    name, validation, request_id
                );
                return Ok(ToolResponse::labeled(
                    tool.labels.failure,
                    &pretty(&validation.to_json()),
                ));
            }
        };

        match tool.handler.call(validated).await {
            Ok(result) => {
                info!("Tool '{}' completed (request: '{}')", name, request_id);
                Ok(ToolResponse::labeled(tool.labels.success, &pretty(&result)))
            }
            Err(e) => {
                warn!(
                    "Tool '{}' failed: {} [{}] (request: '{}')",
                    name,
                    e,
                    e.code(),
                    request_id
                );
                Ok(ToolResponse::labeled(tool.labels.failure, &pretty(&e.to_json())))
            }
        }
    }

    /// Execute a parsed `tools/call` request.
    pub async fn dispatch(&self, invocation: ToolInvocation) -> Result<ToolResponse, DispatchError> {
        self.call_tool(&invocation.name, invocation.arguments).await
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
