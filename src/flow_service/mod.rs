//! Domain operations behind the flow tools.
//!
//! [`FlowService`] translates typed tool inputs into calls on its two
//! collaborators, the flow table ([`FlowStore`](crate::storage::FlowStore)) and
//! the Langflow API ([`LangflowApi`](crate::langflow::LangflowApi)), and maps
//! their failures into [`FlowError`](crate::error::FlowError) values with stable
//! codes. The service is transport-agnostic; the MCP layer in
//! [`mcp_integration`](crate::mcp_integration) decides how results are shown.
//!
//! # Operations
//!
//! | Operation | Collaborator | Result |
//! |---|---|---|
//! | `add_flow` | store insert | created record |
//! | `get_flow` | store select by id | record |
//! | `get_all_flows` | store select, newest first | records |
//! | `update_flow` | store select then update | record, or `None` if absent |
//! | `delete_flow` | store delete | `true` |
//! | `get_flow_data` | Langflow GET | flow document |
//! | `update_node` | Langflow PATCH | API answer |
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use langflow_mcp::flow::AgentFlowInput;
//! use langflow_mcp::flow_service::FlowService;
//! use langflow_mcp::langflow::LangflowClient;
//! use langflow_mcp::storage::InMemoryFlowStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = FlowService::new(
//!     InMemoryFlowStore::new(),
//!     LangflowClient::new("http://localhost:7860", "flow-id", None),
//! );
//!
//! let created = service
//!     .add_flow(AgentFlowInput {
//!         flow_name: "triage".to_string(),
//!         flows: "{\"nodes\":[]}".to_string(),
//!     })
//!     .await?;
//! assert_eq!(service.get_flow(created.id).await?.flow_name, "triage");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod crud;
pub mod nodes;
pub mod query;


pub use self::core::FlowService;
