//! Market data tools for LLM tool-calling runtimes
//!
//! This crate exposes seven stateless tool handlers backed by Yahoo Finance:
//!
//! - `get_stock_price` / `get_crypto_price`: real-time quote for one symbol
//! - `get_stock_news` / `get_crypto_news`: recent news for a symbol or topic
//! - `get_market_indices`: S&P 500, NASDAQ, Dow Jones and Russell 2000
//! - `compare_stocks` / `compare_crypto`: up to five symbols side by side
//!
//! Every handler returns an [`agent_tools::ToolOutput`] carrying a structured
//! payload for the widget, a `_meta` object and plain-text summaries for the
//! model. Upstream failures never escape a handler; they come back as
//! error-flagged outputs.
//!
//! # Architecture
//!
//! - [`api`]: the [`MarketDataProvider`] seam and the Yahoo Finance client
//! - [`normalize`]: raw record to canonical [`model`] mapping
//! - [`aggregate`]: concurrent multi-symbol fetches with partial failure
//! - [`tools`]: the handlers themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_market::{MarketConfig, YahooFinanceClient, register_market_tools};
//! use agent_tools::ToolRegistry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = MarketConfig::default().with_env()?;
//!     let client = Arc::new(YahooFinanceClient::new(config.clone())?);
//!
//!     let registry = ToolRegistry::new();
//!     register_market_tools(&registry, client, &config);
//!
//!     let tool = registry.get("get_stock_price").expect("registered");
//!     let output = tool.invoke(serde_json::json!({ "symbol": "AAPL" })).await;
//!     println!("{}", output.text());
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod summary;
pub mod tools;

// Re-export main types for convenience
pub use api::{MarketDataProvider, YahooFinanceClient};
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use model::{Article, IndicesResult, MarketIndex, NewsResult, Quote};
pub use tools::{
    CompareTool, MarketIndicesTool, NewsTool, PriceTool, market_tools, register_market_tools,
};
