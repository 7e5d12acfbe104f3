//! Flow create, update and delete handlers for MCP integration
//!
//! Each handler converts validated arguments into the typed input of one
//! [`FlowService`] operation and returns the operation's result as JSON for the
//! dispatcher to render.

use crate::error::FlowError;
use crate::flow::{AgentFlowInput, AgentFlowUpdate, GetFlowParams};
use crate::flow_service::FlowService;
use crate::langflow::LangflowApi;
use crate::schema::ValidatedArguments;
use crate::storage::FlowStore;
use serde_json::Value;

/// Handle flow creation through MCP
///
/// Returns the stored record, including the identifier and creation time
/// assigned by the store.
pub async fn handle_add_flow<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let input: AgentFlowInput = arguments.parse()?;
    let record = service.add_flow(input).await?;
    Ok(serde_json::to_value(record)?)
}

/// Handle flow update through MCP
///
/// An identifier with no stored flow yields `null` rather than an error.
pub async fn handle_update_flow<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let update: AgentFlowUpdate = arguments.parse()?;
    let record = service.update_flow(update).await?;
    Ok(serde_json::to_value(record)?)
}

/// Handle flow deletion through MCP
pub async fn handle_delete_flow<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let params: GetFlowParams = arguments.parse()?;
    let deleted = service.delete_flow(params.id).await?;
    Ok(Value::Bool(deleted))
}
