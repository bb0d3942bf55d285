//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ToolOutput;

/// Tool definition as advertised to the runtime (`tools/list`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Trait for tools that an LLM runtime can call
///
/// Tools are functions that LLM agents can call to interact with the world.
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// The tool output, or an error describing why no output was produced
    async fn execute(&self, params: Value) -> Result<ToolOutput>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;

    /// Execute the tool without failing
    ///
    /// Errors are converted into an error-flagged [`ToolOutput`] so nothing
    /// propagates past the tool boundary.
    async fn invoke(&self, params: Value) -> ToolOutput {
        match self.execute(params).await {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(tool = self.name(), error = %err, "Tool call failed");
                ToolOutput::error(format!("Error: {err}"))
            }
        }
    }

    /// Build the definition advertised to the runtime
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: Some(self.description().to_string()),
            input_schema: self.input_schema(),
        }
    }
}
