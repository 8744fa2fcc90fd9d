//! Tool invocation for lore.
//!
//! Tools are external capabilities the assistant may request mid-run. Each
//! one implements [`Tool`]; the [`ToolRegistry`] declares them at assistant
//! creation time and dispatches incoming tool calls by name. The only
//! built-in is [`corpus_query::CorpusQueryTool`].

pub mod corpus_query;

use serde_json::Value;
use std::sync::Arc;

use crate::assistant::ToolDefinition;
use crate::error::ToolError;

/// Every tool implements this trait.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the assistant uses to call this tool.
    fn name(&self) -> &str;

    /// Human-readable description sent with the tool declaration.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn schema(&self) -> Value;

    /// Execute the tool with parsed JSON input, returning the serialized
    /// output to submit back to the run.
    async fn execute(&self, input: Value) -> Result<String, ToolError>;
}

/// Holds all registered tools and dispatches calls by name.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Called during startup.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(Arc::from(tool));
    }

    /// Produce declarations for the assistant service, sent once at
    /// assistant creation.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition::function(t.name(), t.description(), t.schema()))
            .collect()
    }

    /// Look up a tool by name and execute it with serialized arguments.
    ///
    /// The name is checked before the arguments are touched, so an unknown
    /// tool never parses input or reaches the network. Arguments must be a
    /// JSON object; each tool validates its own required fields.
    pub async fn invoke(&self, name: &str, args_json: &str) -> Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let input: Value = serde_json::from_str(args_json)
            .map_err(|e| ToolError::MalformedArguments(e.to_string()))?;
        if !input.is_object() {
            return Err(ToolError::MalformedArguments(format!(
                "expected a JSON object, got: {input}"
            )));
        }
        tool.execute(input).await
    }

    /// How many tools are registered.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
