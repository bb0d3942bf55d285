//! Single-symbol price lookups (stocks and cryptocurrencies)

use agent_core::Result as AgentResult;
use agent_tools::{Tool, ToolOutput, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::MarketDataProvider;
use crate::error::MarketError;
use crate::normalize::{AssetClass, fetch_quote};
use crate::summary::price_summary;
use crate::tools::{now_millis, parse_params};

/// Tool returning a real-time quote for one symbol
pub struct PriceTool {
    provider: Arc<dyn MarketDataProvider>,
    class: AssetClass,
}

#[derive(Debug, Deserialize)]
struct PriceParams {
    symbol: String,
}

impl PriceTool {
    /// `get_stock_price`
    pub fn stock(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            class: AssetClass::Equity,
        }
    }

    /// `get_crypto_price`
    pub fn crypto(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            class: AssetClass::Crypto,
        }
    }
}

#[async_trait]
impl Tool for PriceTool {
    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let params: PriceParams = parse_params(params)?;
        let symbol = params.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(MarketError::InvalidInput("symbol must not be empty".to_string()).into());
        }

        let mut quote = fetch_quote(self.provider.as_ref(), &symbol, self.class).await?;
        let timestamp = now_millis();
        quote.timestamp = Some(timestamp);

        let widget_notice = match self.class {
            AssetClass::Equity => {
                "Widget shown with detailed stock information including price chart and key metrics."
            }
            AssetClass::Crypto => {
                "Widget shown with detailed cryptocurrency information including price range and supply metrics."
            }
        };

        Ok(ToolOutput::structured(&quote)?
            .with_meta(json!({ "symbol": quote.symbol, "timestamp": timestamp }))
            .with_text(price_summary(&quote))
            .with_text(widget_notice))
    }

    fn name(&self) -> &str {
        match self.class {
            AssetClass::Equity => "get_stock_price",
            AssetClass::Crypto => "get_crypto_price",
        }
    }

    fn description(&self) -> &str {
        match self.class {
            AssetClass::Equity => {
                "Use this tool to get real-time stock price information for any stock symbol. \
                 Provides current price, changes, volume, market cap, and more."
            }
            AssetClass::Crypto => {
                "Use this tool to get real-time cryptocurrency price information. \
                 Provides current USD price, changes, volume, market cap, and circulating supply."
            }
        }
    }

    fn input_schema(&self) -> Value {
        let description = match self.class {
            AssetClass::Equity => "Stock ticker symbol (e.g., AAPL, GOOGL, TSLA, MSFT)",
            AssetClass::Crypto => "Cryptocurrency symbol (e.g., BTC, ETH, SOL, or BTC-USD)",
        };
        schema::object(json!({ "symbol": schema::string(description) }), &["symbol"])
    }
}
