//! Flow read handlers for MCP integration

use crate::error::FlowError;
use crate::flow::{GetAllFlowsParams, GetFlowParams};
use crate::flow_service::FlowService;
use crate::langflow::LangflowApi;
use crate::schema::ValidatedArguments;
use crate::storage::FlowStore;
use serde_json::Value;

pub async fn handle_get_flow<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let params: GetFlowParams = arguments.parse()?;
    let record = service.get_flow(params.id).await?;
    Ok(serde_json::to_value(record)?)
}

/// Handle flow listing through MCP
///
/// Always renders an array, empty when the table has no rows.
pub async fn handle_get_all_flows<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let GetAllFlowsParams {} = arguments.parse()?;
    let records = service.get_all_flows().await?;
    Ok(serde_json::to_value(records)?)
}
