//! Reads of stored flows.

use super::FlowService;
use crate::error::{FlowError, FlowResult};
use crate::flow::FlowRecord;
use crate::langflow::LangflowApi;
use crate::schema::check_flow_payload;
use crate::storage::{FlowQuery, FlowStore};
use log::{debug, warn};

impl<S: FlowStore, L: LangflowApi> FlowService<S, L> {
    /// Fetch one flow by identifier.
    ///
    /// A stored payload that no longer matches the flow-payload schema is
    /// logged and returned unchanged.
    pub async fn get_flow(&self, id: i64) -> FlowResult<FlowRecord> {
        if id <= 0 {
            return Err(FlowError::InvalidId { id });
        }

        let rows = self
            .store
            .select(FlowQuery::by_id(id))
            .await
            .map_err(FlowError::Database)?;

        let record = rows
            .into_iter()
            .next()
            .ok_or(FlowError::NotFound { id })?;

        if let Err(drift) = check_flow_payload(&record.flows) {
            warn!("Retrieved flow {} has invalid schema: {}", id, drift);
        }

        Ok(record)
    }

    /// Every stored flow, newest first.
    pub async fn get_all_flows(&self) -> FlowResult<Vec<FlowRecord>> {
        let rows = self
            .store
            .select(FlowQuery::all().order_by_created_at(true))
            .await
            .map_err(FlowError::FetchFailed)?;

        debug!("Fetched {} flows", rows.len());
        Ok(rows)
    }
}
