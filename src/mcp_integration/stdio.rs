//! JSON-RPC 2.0 framing and the stdio transport.
//!
//! Messages are newline-delimited JSON objects. Requests carry an `id` and get
//! exactly one response line; notifications carry no `id` and get none.
//! Requests are handled one at a time in arrival order. Logging goes through
//! the `log` facade and never touches stdout.

use super::core::FlowMcpServer;
use super::protocol::ToolInvocation;
use crate::error::DispatchError;
use log::{debug, error, info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub const JSONRPC_VERSION: &str = "2.0";
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
/// Server-defined code for a `tools/call` naming an unregistered tool.
pub const TOOL_NOT_FOUND: i32 = -32000;

/// JSON-RPC 2.0 ID (string, number or null)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    String(String),
    Number(i64),
    Null,
}

/// JSON-RPC 2.0 request or notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Absent for notifications. An explicit `null` is a request with a null id.
    #[serde(
        default,
        deserialize_with = "present_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<JsonRpcId>,
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<JsonRpcId>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonRpcId::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error")
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, "Method not found").with_data(json!({ "method": method }))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl From<DispatchError> for JsonRpcError {
    fn from(error: DispatchError) -> Self {
        match &error {
            DispatchError::UnknownTool(name) => {
                Self::new(TOOL_NOT_FOUND, error.to_string()).with_data(json!({ "tool": name }))
            }
            DispatchError::MissingArguments | DispatchError::InvalidRequest(_) => {
                Self::invalid_params(error.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: JsonRpcId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: JsonRpcId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: JsonRpcId, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl FlowMcpServer {
    /// Handle one JSON-RPC message and produce the response, if any.
    pub async fn handle_mcp_request(&self, message: &str) -> Option<JsonRpcResponse> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Discarding unparseable message: {}", e);
                return Some(JsonRpcResponse::error(
                    JsonRpcId::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(raw.clone()) {
            Ok(request) => request,
            Err(e) => {
                let id = raw
                    .get("id")
                    .and_then(|id| serde_json::from_value(id.clone()).ok())
                    .unwrap_or(JsonRpcId::Null);
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(e.to_string()),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!("Notification '{}'", request.method);
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.get_tools() })),
            "tools/call" => self.handle_tools_call(request.params).await,
            other => {
                warn!("Method not found: {}", other);
                Err(JsonRpcError::method_not_found(other))
            }
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            },
            "instructions": self.server_info.description
        })
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let invocation: ToolInvocation = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::from(DispatchError::InvalidRequest(e.to_string())))?;

        let response = self.dispatch(invocation).await?;
        serde_json::to_value(response).map_err(|e| JsonRpcError::new(-32603, e.to_string()))
    }

    /// Serve newline-delimited JSON-RPC from `reader` to `writer` until EOF.
    ///
    /// A line that is not UTF-8 is answered with a parse error and skipped.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_mcp_request(line.trim()).await,
                Err(e) => {
                    warn!("Discarding message that is not UTF-8: {}", e);
                    Some(JsonRpcResponse::error(
                        JsonRpcId::Null,
                        JsonRpcError::parse_error(),
                    ))
                }
            };

            if let Some(response) = response {
                let mut encoded = serde_json::to_vec(&response)?;
                encoded.push(b'\n');
                writer.write_all(&encoded).await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    /// Run the MCP server using stdio communication
    ///
    /// Returns when stdin is closed.
    pub async fn run_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Langflow MCP server ready for stdio communication");
        info!("Available tools: {:?}", self.registry.names());

        let result = self
            .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await;
        if let Err(e) = &result {
            error!("stdio transport failed: {}", e);
        }
        result?;

        info!("stdin closed, shutting down");
        Ok(())
    }
}
