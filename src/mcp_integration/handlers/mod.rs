//! MCP integration handlers
//!
//! Handlers are organized by the collaborator they reach. Each is a plain
//! async function from validated arguments to a JSON result; the registration
//! functions below bind them to a shared [`FlowService`] and add them to an
//! [`OperationRegistry`] together with their definitions and labels.

pub mod flow_crud;
pub mod flow_queries;
pub mod langflow_nodes;

pub use flow_crud::*;
pub use flow_queries::*;
pub use langflow_nodes::*;

use super::registry::{OperationRegistry, ToolProfile, ToolSpec, handler_fn};
use super::tools::{flow_schemas, node_schemas};
use crate::error::RegistrationError;
use crate::flow_service::FlowService;
use crate::langflow::LangflowApi;
use crate::storage::FlowStore;
use std::sync::Arc;

/// Bind a handler function to a shared service.
macro_rules! service_handler {
    ($service:expr, $handler:path) => {{
        let service = Arc::clone($service);
        handler_fn(move |arguments| {
            let service = Arc::clone(&service);
            async move { $handler(&service, arguments).await }
        })
    }};
}

/// Register `add_flow`, `update_flow`, `get_flow`, `get_all_flows` and `delete_flow`.
pub fn register_workflow_tools<S, L>(
    registry: OperationRegistry,
    service: &Arc<FlowService<S, L>>,
) -> Result<OperationRegistry, RegistrationError>
where
    S: FlowStore + 'static,
    L: LangflowApi + 'static,
{
    registry
        .register(ToolSpec::new(
            flow_schemas::add_flow_tool(),
            flow_schemas::ADD_FLOW_LABELS,
            service_handler!(service, handle_add_flow),
        ))?
        .register(ToolSpec::new(
            flow_schemas::update_flow_tool(),
            flow_schemas::UPDATE_FLOW_LABELS,
            service_handler!(service, handle_update_flow),
        ))?
        .register(ToolSpec::new(
            flow_schemas::get_flow_tool(),
            flow_schemas::GET_FLOW_LABELS,
            service_handler!(service, handle_get_flow),
        ))?
        .register(ToolSpec::new(
            flow_schemas::get_all_flows_tool(),
            flow_schemas::GET_ALL_FLOWS_LABELS,
            service_handler!(service, handle_get_all_flows),
        ))?
        .register(ToolSpec::new(
            flow_schemas::delete_flow_tool(),
            flow_schemas::DELETE_FLOW_LABELS,
            service_handler!(service, handle_delete_flow),
        ))
}

/// Register `get_flow_data` and `updateNode`.
pub fn register_langflow_tools<S, L>(
    registry: OperationRegistry,
    service: &Arc<FlowService<S, L>>,
) -> Result<OperationRegistry, RegistrationError>
where
    S: FlowStore + 'static,
    L: LangflowApi + 'static,
{
    registry
        .register(ToolSpec::new(
            node_schemas::get_flow_data_tool(),
            node_schemas::GET_FLOW_DATA_LABELS,
            service_handler!(service, handle_get_flow_data),
        ))?
        .register(ToolSpec::new(
            node_schemas::update_node_tool(),
            node_schemas::UPDATE_NODE_LABELS,
            service_handler!(service, handle_update_node),
        ))
}

/// Build the registry for a tool profile.
pub fn build_registry<S, L>(
    service: Arc<FlowService<S, L>>,
    profile: ToolProfile,
) -> Result<OperationRegistry, RegistrationError>
where
    S: FlowStore + 'static,
    L: LangflowApi + 'static,
{
    let mut registry = OperationRegistry::new();
    if profile.includes_workflows() {
        registry = register_workflow_tools(registry, &service)?;
    }
    if profile.includes_langflow() {
        registry = register_langflow_tools(registry, &service)?;
    }
    Ok(registry)
}
