//! Model Context Protocol server for Langflow workflow management.
//!
//! Exposes stored flows (a PostgREST/Supabase table) and the live flow of a
//! Langflow instance as MCP tools with validated, schema-described arguments.
//!
//! # Core Components
//!
//! - [`FlowMcpServer`] - Tool discovery, dispatch and the stdio transport
//! - [`FlowService`] - Domain operations on flows
//! - [`FlowStore`] - Trait for flow table backends
//! - [`LangflowApi`] - Trait for the Langflow flows API
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langflow_mcp::{Config, FlowMcpServer, FlowService};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = Config::from_env();
//! let service = Arc::new(FlowService::from_config(&config));
//! let server = FlowMcpServer::for_profile(service, config.profile)?;
//! server.run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod flow_service;
pub mod langflow;
pub mod mcp_integration;
pub mod schema;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{DispatchError, FlowError, FlowResult, ValidationError, Violation};
pub use flow::{AgentFlowInput, AgentFlowUpdate, FlowRecord, NewFlow, NodeChain};
pub use flow_service::FlowService;
pub use langflow::{LangflowApi, LangflowClient, LangflowError};
pub use mcp_integration::{FlowMcpServer, McpServerInfo, ToolProfile, ToolResponse};
pub use schema::{ArgumentSchema, UnknownFields, ValidatedArguments};
pub use storage::{FlowQuery, FlowStore, InMemoryFlowStore, PostgrestFlowStore, StoreError};
