//! Shared fakes and helpers for the integration tests.

#![allow(dead_code)]

use langflow_mcp::flow::{FlowRecord, NewFlow};
use langflow_mcp::langflow::{LangflowApi, LangflowError};
use langflow_mcp::mcp_integration::{FlowMcpServer, ToolProfile, ToolResponse};
use langflow_mcp::storage::{FlowQuery, FlowStore, InMemoryFlowStore, StoreError};
use langflow_mcp::FlowService;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory flow table that counts every call it receives.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryFlowStore,
    calls: AtomicUsize,
    failure: Option<StoreError>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that rejects every operation with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn table(&self) -> &InMemoryFlowStore {
        &self.inner
    }

    fn record_call(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl FlowStore for CountingStore {
    async fn select(&self, query: FlowQuery) -> Result<Vec<FlowRecord>, StoreError> {
        self.record_call()?;
        self.inner.select(query).await
    }

    async fn insert(&self, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        self.record_call()?;
        self.inner.insert(row).await
    }

    async fn update(&self, id: i64, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        self.record_call()?;
        self.inner.update(id, row).await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.record_call()?;
        self.inner.delete(id).await
    }
}

/// Langflow API stand-in that keeps the last patched document as the flow.
pub struct RecordingLangflow {
    flow: Mutex<Option<Value>>,
    patches: AtomicUsize,
}

impl RecordingLangflow {
    pub fn with_flow(flow: Value) -> Self {
        Self {
            flow: Mutex::new(Some(flow)),
            patches: AtomicUsize::new(0),
        }
    }

    /// An API that answers every request with an empty body.
    pub fn silent() -> Self {
        Self {
            flow: Mutex::new(None),
            patches: AtomicUsize::new(0),
        }
    }

    pub fn patches(&self) -> usize {
        self.patches.load(Ordering::SeqCst)
    }
}

impl Default for RecordingLangflow {
    fn default() -> Self {
        Self::with_flow(json!({"id": "flow-1", "name": "Agent", "data": {"nodes": [], "edges": []}}))
    }
}

impl LangflowApi for RecordingLangflow {
    async fn get_flow(&self) -> Result<Value, LangflowError> {
        let flow = self.flow.lock().unwrap().clone();
        flow.ok_or(LangflowError::EmptyResponse)
    }

    async fn patch_flow(&self, body: Option<Value>) -> Result<Value, LangflowError> {
        self.patches.fetch_add(1, Ordering::SeqCst);
        let mut flow = self.flow.lock().unwrap();
        match flow.as_mut() {
            Some(current) => {
                current["data"] = body.unwrap_or_default();
                Ok(current.clone())
            }
            None => Err(LangflowError::EmptyResponse),
        }
    }
}

pub type TestService = FlowService<CountingStore, RecordingLangflow>;

pub fn create_test_service() -> Arc<TestService> {
    Arc::new(FlowService::new(CountingStore::new(), RecordingLangflow::default()))
}

pub fn create_test_server(service: &Arc<TestService>, profile: ToolProfile) -> FlowMcpServer {
    FlowMcpServer::for_profile(Arc::clone(service), profile).expect("Failed to register tools")
}

/// Split a response into its label line and parsed JSON body.
pub fn split_response(response: &ToolResponse) -> (String, Value) {
    let text = response.text().expect("response has a text block");
    let (label, body) = text.split_once('\n').expect("label line");
    (
        label.to_string(),
        serde_json::from_str(body).expect("JSON body after the label"),
    )
}
