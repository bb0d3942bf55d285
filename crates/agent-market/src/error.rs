//! Error types for market data operations

use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Single-symbol lookup returned nothing or failed
    #[error("{asset} symbol \"{symbol}\" not found")]
    NotFound {
        asset: &'static str,
        symbol: String,
    },

    /// Every symbol in a comparison request failed
    #[error("No valid {asset} found for comparison")]
    AllFailed {
        asset: &'static str,
    },

    /// News search upstream call failed
    #[error("Failed to fetch news for \"{query}\": {reason}")]
    FetchFailed {
        query: String,
        reason: String,
    },

    /// Handler input rejected before any upstream call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream provider answered with an error
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Convert MarketError to agent_core::Error
impl From<MarketError> for agent_core::Error {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::InvalidInput(msg) => agent_core::Error::InvalidParameters(msg),
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}
