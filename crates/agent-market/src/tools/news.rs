//! News search tools

use agent_core::Result as AgentResult;
use agent_tools::{Tool, ToolOutput, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::MarketDataProvider;
use crate::error::MarketError;
use crate::normalize::{NewsScope, fetch_news};
use crate::summary::news_summary;
use crate::tools::parse_params;

/// Largest article count a caller may ask for
pub const MAX_NEWS_LIMIT: u32 = 10;

/// Tool searching recent news for a stock or a cryptocurrency
pub struct NewsTool {
    provider: Arc<dyn MarketDataProvider>,
    scope: NewsScope,
    default_limit: u32,
}

#[derive(Debug, Deserialize)]
struct NewsParams {
    query: String,
    #[serde(default)]
    limit: Option<u32>,
}

impl NewsTool {
    pub fn stock(provider: Arc<dyn MarketDataProvider>, default_limit: u32) -> Self {
        Self {
            provider,
            scope: NewsScope::Stock,
            default_limit,
        }
    }

    pub fn crypto(provider: Arc<dyn MarketDataProvider>, default_limit: u32) -> Self {
        Self {
            provider,
            scope: NewsScope::Crypto,
            default_limit,
        }
    }
}

#[async_trait]
impl Tool for NewsTool {
    async fn execute(&self, params: Value) -> AgentResult<ToolOutput> {
        let params: NewsParams = parse_params(params)?;
        let query = params.query.trim();
        if query.is_empty() {
            return Err(MarketError::InvalidInput("query must not be empty".to_string()).into());
        }

        let limit = params.limit.unwrap_or(self.default_limit);
        if !(1..=MAX_NEWS_LIMIT).contains(&limit) {
            return Err(MarketError::InvalidInput(format!(
                "limit must be between 1 and {MAX_NEWS_LIMIT}, got {limit}"
            ))
            .into());
        }

        let result = fetch_news(self.provider.as_ref(), query, limit, self.scope).await?;

        Ok(ToolOutput::structured(&result)?
            .with_meta(json!({ "query": result.query }))
            .with_text(news_summary(&result)))
    }

    fn name(&self) -> &str {
        match self.scope {
            NewsScope::Stock => "get_stock_news",
            NewsScope::Crypto => "get_crypto_news",
        }
    }

    fn description(&self) -> &str {
        match self.scope {
            NewsScope::Stock => {
                "Use this tool to get the latest news articles about a stock or company. \
                 Accepts a ticker symbol or a company name."
            }
            NewsScope::Crypto => {
                "Use this tool to get the latest news articles about a cryptocurrency. \
                 Accepts a symbol (BTC, ETH) or a free-text topic."
            }
        }
    }

    fn input_schema(&self) -> Value {
        let query = match self.scope {
            NewsScope::Stock => "Stock symbol or company name (e.g., AAPL, Tesla)",
            NewsScope::Crypto => "Cryptocurrency symbol or topic (e.g., BTC, Ethereum ETF)",
        };
        schema::object(
            json!({
                "query": schema::string(query),
                "limit": schema::integer_range(
                    "Number of articles to return",
                    1,
                    i64::from(MAX_NEWS_LIMIT),
                    Some(i64::from(self.default_limit)),
                ),
            }),
            &["query"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockMarketDataProvider, RawNewsItem, RawSearchResponse};

    fn articles(n: usize) -> RawSearchResponse {
        RawSearchResponse {
            news: Some(
                (0..n)
                    .map(|i| RawNewsItem {
                        title: Some(format!("Headline {i}")),
                        publisher: Some("Reuters".to_string()),
                        link: Some(format!("https://example.com/{i}")),
                        provider_publish_time: Some(1_700_000_000),
                        ..Default::default()
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_schema_limit_bounds() {
        let tool = NewsTool::stock(Arc::new(MockMarketDataProvider::new()), 5);
        let schema = tool.input_schema();
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["limit"]["minimum"], 1);
        assert_eq!(schema["properties"]["limit"]["maximum"], 10);
        assert_eq!(schema["properties"]["limit"]["default"], 5);
    }

    #[tokio::test]
    async fn test_stock_news_default_limit() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_search_news()
            .withf(|query: &str, count: &u32| query == "Tesla" && *count == 5)
            .times(1)
            .returning(|_, _| Ok(Some(articles(2))));
        let tool = NewsTool::stock(Arc::new(provider), 5);

        let output = tool.invoke(json!({ "query": "Tesla" })).await;
        assert!(!output.is_error);

        let payload = output.structured_content.as_ref().unwrap();
        assert_eq!(payload["query"], "Tesla");
        assert_eq!(payload["articles"].as_array().unwrap().len(), 2);
        assert_eq!(payload["articles"][0]["publishedAt"], 1_700_000_000_000_i64);
        assert!(payload.get("timestamp").is_none());

        assert_eq!(output.meta, Some(json!({ "query": "Tesla" })));
        assert!(output.text().starts_with("Found 2 news articles for \"Tesla\":"));
    }

    #[tokio::test]
    async fn test_crypto_news_shapes_query_but_reports_original() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_search_news()
            .withf(|query: &str, count: &u32| query == "ETH-USD cryptocurrency" && *count == 3)
            .times(1)
            .returning(|_, _| Ok(None));
        let tool = NewsTool::crypto(Arc::new(provider), 5);

        let output = tool.invoke(json!({ "query": "eth", "limit": 3 })).await;
        assert!(!output.is_error);

        let payload = output.structured_content.unwrap();
        assert_eq!(payload["query"], "eth");
        assert_eq!(payload["articles"], json!([]));
        assert!(payload["timestamp"].is_i64());
        assert_eq!(output.content[0].as_text(), "No recent news found for \"eth\".");
    }

    #[tokio::test]
    async fn test_limit_out_of_range() {
        let tool = NewsTool::stock(Arc::new(MockMarketDataProvider::new()), 5);

        for limit in [0, 11] {
            let output = tool.invoke(json!({ "query": "AAPL", "limit": limit })).await;
            assert!(output.is_error);
            assert!(output.text().contains("limit must be between 1 and 10"));
        }
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_search_news()
            .returning(|_, _| Err(MarketError::Upstream("503".to_string())));
        let tool = NewsTool::crypto(Arc::new(provider), 5);

        let output = tool.invoke(json!({ "query": "BTC" })).await;
        assert!(output.is_error);
        assert!(output.structured_content.is_none());
        assert!(output.text().starts_with("Error: Failed to fetch news for \"BTC\""));
    }
}
