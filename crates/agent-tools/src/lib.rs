//! Tool management and invocation framework
//!
//! This crate provides the pieces needed to expose tools (functions) to an
//! LLM tool-calling runtime: the [`Tool`] trait, the [`ToolOutput`] result
//! shape returned across the boundary, a [`ToolRegistry`], and helpers for
//! building JSON input schemas.

pub mod output;
pub mod registry;
pub mod schema;
pub mod tool;

pub use output::{Content, ToolOutput};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition};
