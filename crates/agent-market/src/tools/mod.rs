//! Tool handlers exposed to the LLM runtime

pub mod compare;
pub mod indices;
pub mod news;
pub mod price;

pub use compare::CompareTool;
pub use indices::MarketIndicesTool;
pub use news::NewsTool;
pub use price::PriceTool;

use crate::api::MarketDataProvider;
use crate::config::MarketConfig;
use agent_tools::{Tool, ToolRegistry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Build every market tool on top of one provider
pub fn market_tools(provider: Arc<dyn MarketDataProvider>, config: &MarketConfig) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(PriceTool::stock(Arc::clone(&provider))),
        Arc::new(PriceTool::crypto(Arc::clone(&provider))),
        Arc::new(NewsTool::stock(Arc::clone(&provider), config.default_news_limit)),
        Arc::new(NewsTool::crypto(Arc::clone(&provider), config.default_news_limit)),
        Arc::new(MarketIndicesTool::new(Arc::clone(&provider))),
        Arc::new(CompareTool::stocks(Arc::clone(&provider))),
        Arc::new(CompareTool::crypto(provider)),
    ]
}

/// Register every market tool in `registry`
pub fn register_market_tools(
    registry: &ToolRegistry,
    provider: Arc<dyn MarketDataProvider>,
    config: &MarketConfig,
) {
    for tool in market_tools(provider, config) {
        registry.register(tool);
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> agent_core::Result<T> {
    serde_json::from_value(params)
        .map_err(|e| agent_core::Error::InvalidParameters(e.to_string()))
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
