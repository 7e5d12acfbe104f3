//! Storage abstraction for the flow table.
//!
//! The [`FlowStore`] trait is the database collaborator used by the flow
//! service. It models table-level operations on a single table of workflow
//! records: select, insert, update and delete. Every operation returns either
//! the rows the store produced or a [`StoreError`]; callers must look at the
//! error arm before trusting any data, and a store that answers with no data at
//! all is reported as an empty row set.
//!
//! Two implementations are provided:
//!
//! - [`InMemoryFlowStore`] for tests and local development
//! - [`PostgrestFlowStore`] for a Supabase/PostgREST table over HTTP
//!
//! # Example Usage
//!
//! ```rust
//! use langflow_mcp::flow::NewFlow;
//! use langflow_mcp::storage::{FlowQuery, FlowStore, InMemoryFlowStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryFlowStore::new();
//!
//! let inserted = store.insert(NewFlow::new("demo", "{}")).await?;
//! let id = inserted[0].id;
//!
//! let rows = store.select(FlowQuery::by_id(id)).await?;
//! assert_eq!(rows.len(), 1);
//!
//! store.delete(id).await?;
//! assert!(store.select(FlowQuery::by_id(id)).await?.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;
pub mod postgrest;

pub use errors::StoreError;
pub use in_memory::InMemoryFlowStore;
pub use postgrest::PostgrestFlowStore;

use crate::flow::{FlowRecord, NewFlow};
use std::future::Future;

/// Sort order for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    CreatedAtAscending,
    CreatedAtDescending,
}

/// Row filter and ordering for [`FlowStore::select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowQuery {
    /// Only rows with this identifier
    pub id: Option<i64>,
    /// Ordering of the result; store order when absent
    pub order: Option<SortOrder>,
}

impl FlowQuery {
    /// Every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Rows whose identifier equals `id`.
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            order: None,
        }
    }

    /// Order by creation timestamp.
    pub fn order_by_created_at(mut self, descending: bool) -> Self {
        self.order = Some(if descending {
            SortOrder::CreatedAtDescending
        } else {
            SortOrder::CreatedAtAscending
        });
        self
    }
}

/// Table-level operations on the workflow records table.
///
/// Implementations perform exactly one round trip per call and hold no
/// per-request state, so a single instance can serve concurrent tool calls.
pub trait FlowStore: Send + Sync {
    /// Fetch the rows matching `query`.
    fn select(
        &self,
        query: FlowQuery,
    ) -> impl Future<Output = Result<Vec<FlowRecord>, StoreError>> + Send;

    /// Insert a row and return what the store created.
    ///
    /// An empty result means the store reported zero rows affected.
    fn insert(
        &self,
        row: NewFlow,
    ) -> impl Future<Output = Result<Vec<FlowRecord>, StoreError>> + Send;

    /// Overwrite the columns of the row `id` and return the changed rows.
    fn update(
        &self,
        id: i64,
        row: NewFlow,
    ) -> impl Future<Output = Result<Vec<FlowRecord>, StoreError>> + Send;

    /// Remove the row `id`. Removing a missing row is not an error.
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), StoreError>> + Send;
}
