//! Major market indices overview

use agent_core::Result as AgentResult;
use agent_tools::{Tool, ToolOutput, schema};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::aggregate::market_indices;
use crate::api::MarketDataProvider;
use crate::summary::indices_summary;

/// Tool reporting the S&P 500, NASDAQ, Dow Jones and Russell 2000
pub struct MarketIndicesTool {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketIndicesTool {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for MarketIndicesTool {
    /// Never fails; indices that could not be fetched are left out.
    async fn execute(&self, _params: Value) -> AgentResult<ToolOutput> {
        let result = market_indices(self.provider.as_ref()).await;
        let symbols: Vec<&str> = result.indices.iter().map(|i| i.symbol.as_str()).collect();
        let meta = json!({ "symbols": symbols });

        Ok(ToolOutput::structured(&result)?
            .with_meta(meta)
            .with_text(indices_summary(&result)))
    }

    fn name(&self) -> &str {
        "get_market_indices"
    }

    fn description(&self) -> &str {
        "Use this tool to get an overview of the major US market indices \
         (S&P 500, NASDAQ, Dow Jones, Russell 2000) with current levels and daily changes."
    }

    fn input_schema(&self) -> Value {
        schema::empty_object()
    }
}
