//! Operations on the live Langflow flow.

use super::FlowService;
use crate::error::FlowResult;
use crate::flow::NodeChain;
use crate::langflow::LangflowApi;
use crate::storage::FlowStore;
use log::{error, info};
use serde_json::Value;

impl<S: FlowStore, L: LangflowApi> FlowService<S, L> {
    /// Current document of the configured Langflow flow.
    pub async fn get_flow_data(&self) -> FlowResult<Value> {
        let flow = self.langflow.get_flow().await.inspect_err(|e| {
            error!("Fetching Langflow flow data failed: {}", e);
        })?;
        Ok(flow)
    }

    /// Forward an opaque node/edge document to the configured Langflow flow.
    pub async fn update_node(&self, chain: NodeChain) -> FlowResult<Value> {
        let answer = self.langflow.patch_flow(chain.json).await.inspect_err(|e| {
            error!("Updating Langflow flow failed: {}", e);
        })?;
        info!("Langflow flow updated");
        Ok(answer)
    }
}
