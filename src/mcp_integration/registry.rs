//! Operation registry for MCP tools.
//!
//! The registry maps each tool name to everything the dispatcher needs: the
//! advertised definition, the compiled argument schema, the response labels and
//! the handler. It is assembled once at startup and then only read, so a single
//! instance can be shared by concurrent invocations behind an `Arc`.

use crate::error::{FlowError, RegistrationError};
use crate::schema::{ArgumentSchema, UnknownFields, ValidatedArguments};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Text placed on the first line of a tool response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolLabels {
    /// Prefix for a handler result
    pub success: &'static str,
    /// Prefix for a validation or handler failure
    pub failure: &'static str,
}

impl ToolLabels {
    pub const fn new(success: &'static str, failure: &'static str) -> Self {
        Self { success, failure }
    }
}

/// Executes one tool with arguments that already passed its schema.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: ValidatedArguments) -> Result<Value, FlowError>;
}

/// Adapter that lets an async closure act as a [`ToolHandler`].
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> ToolHandler for FnHandler<F>
where
    F: Fn(ValidatedArguments) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, FlowError>> + Send,
{
    async fn call(&self, arguments: ValidatedArguments) -> Result<Value, FlowError> {
        (self.0)(arguments).await
    }
}

/// Wrap an async closure as a shareable handler.
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn ToolHandler>
where
    F: Fn(ValidatedArguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, FlowError>> + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Everything needed to register one tool.
pub struct ToolSpec {
    pub definition: ToolDefinition,
    pub labels: ToolLabels,
    pub unknown_fields: UnknownFields,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolSpec {
    pub fn new(definition: ToolDefinition, labels: ToolLabels, handler: Arc<dyn ToolHandler>) -> Self {
        Self {
            definition,
            labels,
            unknown_fields: UnknownFields::Strip,
            handler,
        }
    }

    pub fn with_unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }
}

/// A tool after registration, with its schema compiled.
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub labels: ToolLabels,
    pub schema: ArgumentSchema,
    pub handler: Arc<dyn ToolHandler>,
}

impl fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("name", &self.definition.name)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// Ordered set of tools keyed by name.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, compiling its argument schema.
    ///
    /// Fails if the name is taken or the schema does not compile.
    pub fn register(mut self, spec: ToolSpec) -> Result<Self, RegistrationError> {
        let ToolSpec {
            mut definition,
            labels,
            unknown_fields,
            handler,
        } = spec;

        if self.index.contains_key(&definition.name) {
            return Err(RegistrationError::DuplicateName(definition.name));
        }

        let schema = ArgumentSchema::compile(definition.input_schema.clone(), unknown_fields)
            .map_err(|message| RegistrationError::Schema {
                tool: definition.name.clone(),
                message,
            })?;
        definition.input_schema = schema.document().clone();

        self.index.insert(definition.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            definition,
            labels,
            schema,
            handler,
        });
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Definitions in registration order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition.clone()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools
            .iter()
            .map(|tool| tool.definition.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Which tool set a server exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ToolProfile {
    /// Stored flow management: add, update, get, list and delete
    #[default]
    Workflows,
    /// The live Langflow flow: read flow data and update nodes
    Langflow,
    /// Both tool sets
    All,
}

impl ToolProfile {
    pub fn includes_workflows(self) -> bool {
        matches!(self, ToolProfile::Workflows | ToolProfile::All)
    }

    pub fn includes_langflow(self) -> bool {
        matches!(self, ToolProfile::Langflow | ToolProfile::All)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToolProfile::Workflows => "workflows",
            ToolProfile::Langflow => "langflow",
            ToolProfile::All => "all",
        }
    }
}

impl fmt::Display for ToolProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workflows" => Ok(ToolProfile::Workflows),
            "langflow" => Ok(ToolProfile::Langflow),
            "all" => Ok(ToolProfile::All),
            other => Err(format!("Unknown tool profile '{}'", other)),
        }
    }
}
