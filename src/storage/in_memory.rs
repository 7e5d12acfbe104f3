//! In-memory flow table.
//!
//! Thread-safe implementation of [`FlowStore`] backed by a `Vec` behind a tokio
//! `RwLock`. Identifiers are assigned sequentially starting at 1 and creation
//! timestamps come from the system clock, which is what a fresh Postgres table
//! with an identity column and a `now()` default would do.
//!
//! Intended for tests, demos and running the server without a database.

use crate::flow::{FlowRecord, NewFlow};
use crate::storage::{FlowQuery, FlowStore, SortOrder, StoreError};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct TableState {
    rows: Vec<FlowRecord>,
    last_id: i64,
}

/// Thread-safe in-memory implementation of the flow table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowStore {
    state: Arc<RwLock<TableState>>,
}

impl InMemoryFlowStore {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load fixed rows, keeping their identifiers and timestamps.
    ///
    /// Later inserts continue numbering after the highest seeded id.
    pub async fn seed(&self, records: impl IntoIterator<Item = FlowRecord>) {
        let mut state = self.state.write().await;
        for record in records {
            state.last_id = state.last_id.max(record.id);
            state.rows.push(record);
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Whether the table is empty.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl FlowStore for InMemoryFlowStore {
    async fn select(&self, query: FlowQuery) -> Result<Vec<FlowRecord>, StoreError> {
        let state = self.state.read().await;

        let mut rows: Vec<FlowRecord> = state
            .rows
            .iter()
            .filter(|row| query.id.is_none_or(|id| row.id == id))
            .cloned()
            .collect();

        match query.order {
            Some(SortOrder::CreatedAtAscending) => {
                rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
            Some(SortOrder::CreatedAtDescending) => {
                rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            None => {}
        }

        Ok(rows)
    }

    async fn insert(&self, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let record = FlowRecord {
            id: state.last_id,
            flow_name: row.flow_name,
            flows: row.flows,
            created_at: Utc::now(),
        };
        state.rows.push(record.clone());

        Ok(vec![record])
    }

    async fn update(&self, id: i64, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        let mut state = self.state.write().await;

        match state.rows.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.flow_name = row.flow_name;
                record.flows = row.flows;
                Ok(vec![record.clone()])
            }
            None => Ok(Vec::new()),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.rows.retain(|record| record.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn record(id: i64, name: &str, minutes: i64) -> FlowRecord {
        FlowRecord {
            id,
            flow_name: name.to_string(),
            flows: json!("{}"),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryFlowStore::new();

        let first = store.insert(NewFlow::new("a", "{}")).await.unwrap();
        let second = store.insert(NewFlow::new("b", "{}")).await.unwrap();

        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_select_orders_by_created_at_descending() {
        let store = InMemoryFlowStore::new();
        store
            .seed(vec![
                record(1, "oldest", 0),
                record(2, "newest", 20),
                record(3, "middle", 10),
            ])
            .await;

        let rows = store
            .select(FlowQuery::all().order_by_created_at(true))
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.flow_name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "oldest"]);

        let rows = store
            .select(FlowQuery::all().order_by_created_at(false))
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.flow_name.as_str()).collect();
        assert_eq!(names, vec!["oldest", "middle", "newest"]);
    }

    #[tokio::test]
    async fn test_seed_moves_id_sequence_forward() {
        let store = InMemoryFlowStore::new();
        store.seed(vec![record(41, "seeded", 0)]).await;

        let inserted = store.insert(NewFlow::new("next", "{}")).await.unwrap();
        assert_eq!(inserted[0].id, 42);
    }

    #[tokio::test]
    async fn test_update_missing_row_changes_nothing() {
        let store = InMemoryFlowStore::new();
        let rows = store.update(99, NewFlow::new("x", "{}")).await.unwrap();
        assert!(rows.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_row() {
        let store = InMemoryFlowStore::new();
        store.seed(vec![record(1, "keep", 0), record(2, "drop", 1)]).await;

        store.delete(2).await.unwrap();
        store.delete(2).await.unwrap();

        let rows = store.select(FlowQuery::all()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].flow_name, "keep");
    }

    proptest::proptest! {
        #[test]
        fn test_listing_holds_every_row_newest_first(
            offsets in proptest::collection::vec(0i64..10_000, 0..20)
        ) {
            tokio_test::block_on(async {
                let store = InMemoryFlowStore::new();
                store
                    .seed(
                        offsets
                            .iter()
                            .enumerate()
                            .map(|(i, minutes)| record(i as i64 + 1, "seeded", *minutes)),
                    )
                    .await;

                let rows = store
                    .select(FlowQuery::all().order_by_created_at(true))
                    .await
                    .unwrap();

                assert_eq!(rows.len(), offsets.len());
                assert!(rows.windows(2).all(|w| w[0].created_at >= w[1].created_at));
            });
        }
    }
}
