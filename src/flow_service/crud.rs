//! Create, update and delete of stored flows.

use super::FlowService;
use crate::error::{FlowError, FlowResult};
use crate::flow::{AgentFlowInput, AgentFlowUpdate, FlowRecord, NewFlow};
use crate::langflow::LangflowApi;
use crate::storage::FlowStore;
use log::{debug, info};

impl<S: FlowStore, L: LangflowApi> FlowService<S, L> {
    /// Insert a new flow and return the stored record.
    pub async fn add_flow(&self, input: AgentFlowInput) -> FlowResult<FlowRecord> {
        debug!("Adding flow '{}'", input.flow_name);

        let rows = self
            .store
            .insert(NewFlow::from(input))
            .await
            .map_err(FlowError::InsertFailed)?;

        let record = rows.into_iter().next().ok_or(FlowError::CreateFailed)?;
        info!("Flow {} created", record.id);
        Ok(record)
    }

    /// Overwrite name and payload of an existing flow.
    ///
    /// Returns `Ok(None)` when no flow has the identifier. If the store applies
    /// the update but reports no rows, the record read before the update is
    /// returned.
    pub async fn update_flow(&self, update: AgentFlowUpdate) -> FlowResult<Option<FlowRecord>> {
        let existing = match self.get_flow(update.id).await {
            Ok(record) => record,
            Err(FlowError::NotFound { id }) => {
                debug!("Flow {} not found, nothing to update", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let rows = self
            .store
            .update(update.id, update.changes())
            .await
            .map_err(FlowError::UpdateFailed)?;

        info!("Flow {} updated", update.id);
        Ok(Some(rows.into_iter().next().unwrap_or(existing)))
    }

    /// Remove a flow. Deleting an identifier with no row still succeeds.
    pub async fn delete_flow(&self, id: i64) -> FlowResult<bool> {
        if id <= 0 {
            return Err(FlowError::InvalidId { id });
        }

        self.store
            .delete(id)
            .await
            .map_err(FlowError::DeleteFailed)?;

        info!("Flow {} deleted", id);
        Ok(true)
    }
}
