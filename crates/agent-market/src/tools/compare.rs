//! Side-by-side comparison of several symbols

use agent_core::Result as AgentResult;
use agent_tools::{Tool, ToolOutput, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::aggregate::{MAX_COMPARISON_SYMBOLS, compare_quotes};
use crate::api::MarketDataProvider;
use crate::error::MarketError;
use crate::model::{CryptoComparison, StockComparison};
use crate::normalize::AssetClass;
use crate::summary::comparison_summary;
use crate::tools::parse_params;

const MIN_COMPARISON_SYMBOLS: usize = 2;

/// Tool comparing up to five stocks or cryptocurrencies
pub struct CompareTool {
    provider: Arc<dyn MarketDataProvider>,
    class: AssetClass,
}

#[derive(Debug, Deserialize)]
struct CompareParams {
    symbols: Vec<String>,
}

impl CompareTool {
    pub fn stocks(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            class: AssetClass::Equity,
        }
    }

    pub fn crypto(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            class: AssetClass::Crypto,
        }
    }
}

#[async_trait]
impl Tool for CompareTool {
    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let params: CompareParams = parse_params(params)?;
        if params.symbols.len() < MIN_COMPARISON_SYMBOLS {
            return Err(MarketError::InvalidInput(format!(
                "at least {MIN_COMPARISON_SYMBOLS} symbols are required for comparison"
            ))
            .into());
        }

        let quotes = compare_quotes(self.provider.as_ref(), &params.symbols, self.class).await?;
        let symbols: Vec<String> = quotes.iter().map(|q| q.symbol.clone()).collect();
        let summary = comparison_summary(&quotes, self.class.plural());

        let output = match self.class {
            AssetClass::Equity => ToolOutput::structured(&StockComparison { stocks: quotes })?,
            AssetClass::Crypto => ToolOutput::structured(&CryptoComparison { cryptos: quotes })?,
        };

        Ok(output
            .with_meta(json!({ "symbols": symbols }))
            .with_text(summary))
    }

    fn name(&self) -> &str {
        match self.class {
            AssetClass::Equity => "compare_stocks",
            AssetClass::Crypto => "compare_crypto",
        }
    }

    fn description(&self) -> &str {
        match self.class {
            AssetClass::Equity => {
                "Use this tool to compare multiple stocks side by side. \
                 Provides price, change, market cap, and valuation metrics for up to five symbols."
            }
            AssetClass::Crypto => {
                "Use this tool to compare multiple cryptocurrencies side by side. \
                 Provides USD price, change, market cap, and supply for up to five symbols."
            }
        }
    }

    fn input_schema(&self) -> Value {
        let (items, description) = match self.class {
            AssetClass::Equity => (
                "Stock ticker symbol",
                "Stock symbols to compare (e.g., [\"AAPL\", \"MSFT\", \"GOOGL\"])",
            ),
            AssetClass::Crypto => (
                "Cryptocurrency symbol",
                "Cryptocurrency symbols to compare (e.g., [\"BTC\", \"ETH\", \"SOL\"])",
            ),
        };
        schema::object(
            json!({
                "symbols": schema::array(
                    schema::string(items),
                    description,
                    MIN_COMPARISON_SYMBOLS,
                    MAX_COMPARISON_SYMBOLS,
                ),
            }),
            &["symbols"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockMarketDataProvider, RawQuote};

    fn raw(price: f64) -> RawQuote {
        RawQuote {
            regular_market_price: Some(price),
            regular_market_previous_close: Some(price),
            market_cap: Some(1.0e12),
            ..Default::default()
        }
    }

    #[test]
    fn test_schema_bounds() {
        let tool = CompareTool::stocks(Arc::new(MockMarketDataProvider::new()));
        let schema = tool.input_schema();
        assert_eq!(schema["properties"]["symbols"]["minItems"], 2);
        assert_eq!(schema["properties"]["symbols"]["maxItems"], 5);
    }

    #[tokio::test]
    async fn test_compare_stocks_drops_failures() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().returning(|symbol| match symbol {
            "AAPL" => Ok(Some(raw(190.0))),
            "MSFT" => Ok(Some(raw(410.0))),
            _ => Ok(None),
        });
        let tool = CompareTool::stocks(Arc::new(provider));

        let output = tool
            .invoke(json!({ "symbols": ["aapl", "ZZZZ", "msft"] }))
            .await;
        assert!(!output.is_error);

        let stocks = &output.structured_content.as_ref().unwrap()["stocks"];
        assert_eq!(stocks.as_array().unwrap().len(), 2);
        assert_eq!(stocks[0]["symbol"], "AAPL");
        assert_eq!(stocks[1]["symbol"], "MSFT");
        assert_eq!(stocks[1]["marketCap"], 1.0e12);

        assert_eq!(output.meta, Some(json!({ "symbols": ["AAPL", "MSFT"] })));
        assert!(output.text().starts_with("Compared 2 stocks: AAPL, MSFT."));
    }

    #[tokio::test]
    async fn test_compare_crypto_payload_key() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_quote()
            .withf(|symbol: &str| symbol.ends_with("-USD"))
            .times(2)
            .returning(|_| Ok(Some(raw(1.0))));
        let tool = CompareTool::crypto(Arc::new(provider));

        let output = tool.invoke(json!({ "symbols": ["btc", "eth"] })).await;
        let payload = output.structured_content.unwrap();
        assert!(payload.get("stocks").is_none());
        assert_eq!(payload["cryptos"][0]["symbol"], "BTC");
        assert_eq!(payload["cryptos"][1]["symbol"], "ETH");
    }

    #[tokio::test]
    async fn test_all_failed_is_error() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().returning(|_| Ok(None));
        let tool = CompareTool::crypto(Arc::new(provider));

        let output = tool.invoke(json!({ "symbols": ["AAA", "BBB"] })).await;
        assert!(output.is_error);
        assert!(output.structured_content.is_none());
        assert_eq!(
            output.text(),
            "Error: No valid cryptocurrencies found for comparison"
        );
    }

    #[tokio::test]
    async fn test_too_few_symbols() {
        let tool = CompareTool::stocks(Arc::new(MockMarketDataProvider::new()));

        let output = tool.invoke(json!({ "symbols": ["AAPL"] })).await;
        assert!(output.is_error);
        assert!(output.text().contains("at least 2 symbols"));
    }
}
