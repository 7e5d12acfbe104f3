//! The flow service and its collaborators.

use crate::config::Config;
use crate::langflow::{LangflowApi, LangflowClient};
use crate::storage::{FlowStore, PostgrestFlowStore};

/// Domain operations on stored flows and on the configured Langflow flow.
///
/// The service holds no per-request state. Build one at startup and share it
/// behind an `Arc` with every tool handler.
#[derive(Debug, Clone)]
pub struct FlowService<S: FlowStore, L: LangflowApi> {
    pub(super) store: S,
    pub(super) langflow: L,
}

impl<S: FlowStore, L: LangflowApi> FlowService<S, L> {
    pub fn new(store: S, langflow: L) -> Self {
        Self { store, langflow }
    }

    /// The flow table collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The Langflow API collaborator.
    pub fn langflow(&self) -> &L {
        &self.langflow
    }
}

impl FlowService<PostgrestFlowStore, LangflowClient> {
    /// Wire the HTTP collaborators from configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = PostgrestFlowStore::new(
            config.supabase_url.clone(),
            config.supabase_key.clone(),
            config.flows_table.clone(),
        );
        let langflow = LangflowClient::new(
            config.langflow_url.clone(),
            config.flow_id.clone(),
            config.api_key.clone(),
        );
        Self::new(store, langflow)
    }
}
