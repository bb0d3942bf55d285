//! Error types for the MCP server

use thiserror::Error;

/// Errors that end the MCP server loop
#[derive(Error, Debug)]
pub enum MCPError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convert MCPError to agent_core::Error
impl From<MCPError> for agent_core::Error {
    fn from(err: MCPError) -> Self {
        agent_core::Error::ProcessingFailed(err.to_string())
    }
}
