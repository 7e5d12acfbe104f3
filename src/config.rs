//! Process configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `LANGFLOW_URL` | empty |
//! | `FLOW_ID` | empty |
//! | `API_KEY` | unset |
//! | `SUPABASE_URL` | empty |
//! | `SUPABASE_KEY` | empty |
//! | `SUPABASE_TABLE` | `agent_flows` |
//! | `MCP_TOOL_PROFILE` | `workflows` |
//!
//! Missing values are not rejected at startup. A missing base URL produces a
//! malformed request later, which the affected tool reports as error text.

use crate::mcp_integration::ToolProfile;
use log::warn;

pub const DEFAULT_FLOWS_TABLE: &str = "agent_flows";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub langflow_url: String,
    pub flow_id: String,
    pub api_key: Option<String>,
    pub supabase_url: String,
    pub supabase_key: String,
    pub flows_table: String,
    pub profile: ToolProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let profile = match lookup("MCP_TOOL_PROFILE") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}; falling back to '{}'", e, ToolProfile::default());
                ToolProfile::default()
            }),
            None => ToolProfile::default(),
        };

        Self {
            langflow_url: lookup("LANGFLOW_URL").unwrap_or_default(),
            flow_id: lookup("FLOW_ID").unwrap_or_default(),
            api_key: lookup("API_KEY").filter(|key| !key.is_empty()),
            supabase_url: lookup("SUPABASE_URL").unwrap_or_default(),
            supabase_key: lookup("SUPABASE_KEY").unwrap_or_default(),
            flows_table: lookup("SUPABASE_TABLE")
                .filter(|table| !table.is_empty())
                .unwrap_or_else(|| DEFAULT_FLOWS_TABLE.to_string()),
            profile,
        }
    }

    pub fn with_profile(mut self, profile: ToolProfile) -> Self {
        self.profile = profile;
        self
    }
}
