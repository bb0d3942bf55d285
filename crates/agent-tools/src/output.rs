//! Tool call results
//!
//! [`ToolOutput`] mirrors the MCP `CallToolResult` shape: a structured payload
//! for the widget, an auxiliary `_meta` object the model never sees, a list of
//! text blocks for the model, and an error flag.

use agent_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content block returned to a text-only consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    /// Create a text block
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    /// Text carried by this block
    pub fn as_text(&self) -> &str {
        match self {
            Content::Text { text } => text,
        }
    }
}

/// Result of a tool invocation as handed back to the runtime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    /// Data passed only to the widget, never shown to the model
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Structured payload used to hydrate the widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,

    /// Free-form text blocks the model receives verbatim
    #[serde(default)]
    pub content: Vec<Content>,

    /// Whether the call failed
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    /// Create a successful output carrying a structured payload
    pub fn structured<T: Serialize>(payload: &T) -> Result<Self> {
        Ok(Self {
            structured_content: Some(serde_json::to_value(payload)?),
            ..Self::default()
        })
    }

    /// Create an error-flagged output with a human readable message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(message)],
            is_error: true,
            ..Self::default()
        }
    }

    /// Attach the `_meta` object
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Append a text block
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(Content::text(text));
        self
    }

    /// All text blocks joined by newlines
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(Content::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
