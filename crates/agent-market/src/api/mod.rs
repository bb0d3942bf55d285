//! Upstream market data provider

pub mod types;
pub mod yahoo;

pub use types::{RawNewsItem, RawQuote, RawResolution, RawSearchResponse, RawThumbnail};
pub use yahoo::YahooFinanceClient;

use crate::error::Result;
use async_trait::async_trait;

/// Source of raw quotes and news search results
///
/// `Ok(None)` means the provider answered but had no record; `Err` means the
/// call itself failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Look up the latest quote for one symbol
    async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>>;

    /// Keyword search returning up to `news_count` news items
    async fn search_news(&self, query: &str, news_count: u32) -> Result<Option<RawSearchResponse>>;
}
