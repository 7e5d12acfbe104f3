//! Flow records and the typed inputs of the flow tools.
//!
//! A [`FlowRecord`] is owned by the backing store. This crate never caches or
//! edits one in place; it forwards validated requests and relays whatever the
//! store returns.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A stored workflow as returned by the flow table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Store-assigned identifier, stable once assigned
    pub id: i64,
    /// Display name of the flow
    pub flow_name: String,
    /// Opaque flow document
    pub flows: Value,
    /// Creation timestamp set by the store
    pub created_at: DateTime<Utc>,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFlow {
    pub flow_name: String,
    pub flows: Value,
}

impl NewFlow {
    pub fn new(flow_name: impl Into<String>, flows: impl Into<Value>) -> Self {
        Self {
            flow_name: flow_name.into(),
            flows: flows.into(),
        }
    }
}

/// Arguments of `add_flow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFlowInput {
    pub flow_name: String,
    pub flows: String,
}

impl From<AgentFlowInput> for NewFlow {
    fn from(input: AgentFlowInput) -> Self {
        NewFlow::new(input.flow_name, input.flows)
    }
}

/// Arguments of `update_flow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFlowUpdate {
    #[serde(deserialize_with = "flow_id")]
    pub id: i64,
    pub flow_name: String,
    pub flows: String,
}

impl AgentFlowUpdate {
    /// The column values this update writes.
    pub fn changes(&self) -> NewFlow {
        NewFlow::new(self.flow_name.clone(), self.flows.clone())
    }
}

/// Arguments of `get_flow` and `delete_flow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFlowParams {
    #[serde(deserialize_with = "flow_id")]
    pub id: i64,
}

/// Arguments of `get_all_flows` (none).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAllFlowsParams {}

/// Arguments of `updateNode`: an opaque document forwarded as-is.
///
/// An absent or null `json` sends the update without a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeChain {
    #[serde(default)]
    pub json: Option<Value>,
}

/// Read a flow id, accepting integral floats such as `1.0`.
///
/// Matches JSON Schema, where `1.0` is an integer.
fn flow_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(id) = number.as_i64() {
        return Ok(id);
    }
    match number.as_f64() {
        Some(id) if id.fract() == 0.0 && id >= i64::MIN as f64 && id < i64::MAX as f64 => {
            Ok(id as i64)
        }
        _ => Err(D::Error::custom(format!(
            "invalid flow id {}, expected an integer",
            number
        ))),
    }
}
