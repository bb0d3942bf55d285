//! Model Context Protocol (MCP) server for the market data tools
//!
//! Exposes every tool of an [`agent_tools::ToolRegistry`] to an MCP client
//! over newline-delimited JSON-RPC 2.0 on stdio. Supported methods are
//! `initialize`, `notifications/initialized`, `ping`, `tools/list` and
//! `tools/call`.
//!
//! # Example
//!
//! ```no_run
//! use agent_mcp::McpServer;
//! use agent_tools::ToolRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(ToolRegistry::new());
//! // register tools here
//!
//! McpServer::new(registry)
//!     .with_server_info("market-data-tools", env!("CARGO_PKG_VERSION"))
//!     .serve_stdio()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod protocol;
pub mod server;

// Re-export commonly used types
pub use error::MCPError;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo};
pub use server::McpServer;

/// Result type for MCP operations
pub type Result<T> = std::result::Result<T, MCPError>;
