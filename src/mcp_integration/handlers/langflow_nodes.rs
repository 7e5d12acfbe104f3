//! Handlers for the live Langflow flow.

use crate::error::FlowError;
use crate::flow::NodeChain;
use crate::flow_service::FlowService;
use crate::langflow::LangflowApi;
use crate::schema::ValidatedArguments;
use crate::storage::FlowStore;
use serde_json::Value;

pub async fn handle_get_flow_data<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    _arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    service.get_flow_data().await
}

pub async fn handle_update_node<S: FlowStore, L: LangflowApi>(
    service: &FlowService<S, L>,
    arguments: ValidatedArguments,
) -> Result<Value, FlowError> {
    let chain: NodeChain = arguments.parse()?;
    service.update_node(chain).await
}
