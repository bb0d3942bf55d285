//! News search shaping and article mapping

use crate::api::{MarketDataProvider, RawNewsItem, RawSearchResponse};
use crate::error::{MarketError, Result};
use crate::model::{Article, NewsResult};
use chrono::Utc;

/// Which news handler is searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsScope {
    Stock,
    Crypto,
}

/// Whether a query is a single ticker-shaped token such as `BTC` or `eth`
///
/// Mixed-case words (`Tesla`, `Bitcoin`) read as names, not tickers.
pub fn is_bare_symbol(query: &str) -> bool {
    let has_upper = query.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = query.chars().any(|c| c.is_ascii_lowercase());
    !query.is_empty()
        && query.chars().all(|c| c.is_ascii_alphanumeric())
        && !(has_upper && has_lower)
}

/// Build the keyword query sent upstream
///
/// Stock queries pass through. Crypto queries are annotated so the
/// keyword search does not return generic results:
/// a bare symbol becomes `"<SYMBOL>-USD cryptocurrency"`, a query already
/// mentioning crypto is kept, anything else gets `" cryptocurrency"` appended.
pub fn shape_query(query: &str, scope: NewsScope) -> String {
    match scope {
        NewsScope::Stock => query.to_string(),
        NewsScope::Crypto => {
            if is_bare_symbol(query) {
                format!("{}-USD cryptocurrency", query.to_uppercase())
            } else if query.to_lowercase().contains("crypto") {
                query.to_string()
            } else {
                format!("{query} cryptocurrency")
            }
        }
    }
}

/// Map one upstream item onto an article
pub fn normalize_article(item: RawNewsItem, now_ms: i64) -> Article {
    let thumbnail = item
        .thumbnail
        .and_then(|t| t.resolutions.into_iter().next())
        .and_then(|r| r.url);

    Article {
        title: item.title.unwrap_or_else(|| "No title".to_string()),
        publisher: item.publisher.unwrap_or_else(|| "Unknown".to_string()),
        link: item.link.unwrap_or_default(),
        published_at: item
            .provider_publish_time
            .map_or(now_ms, |secs| secs.saturating_mul(1000)),
        thumbnail,
        summary: item.summary,
    }
}

/// Map a whole search response; a missing response or news list is an empty result
pub fn normalize_news(raw: Option<RawSearchResponse>, query: &str, now_ms: i64) -> NewsResult {
    match raw.and_then(|r| r.news) {
        Some(items) => NewsResult {
            query: query.to_string(),
            articles: items
                .into_iter()
                .map(|item| normalize_article(item, now_ms))
                .collect(),
            timestamp: None,
        },
        None => NewsResult {
            query: query.to_string(),
            articles: Vec::new(),
            timestamp: Some(now_ms),
        },
    }
}

/// Search news for a query and normalize the answer
pub async fn fetch_news(
    provider: &dyn MarketDataProvider,
    query: &str,
    limit: u32,
    scope: NewsScope,
) -> Result<NewsResult> {
    let search_query = shape_query(query, scope);
    tracing::debug!(query, search_query = %search_query, limit, "Fetching news");

    let raw = provider
        .search_news(&search_query, limit)
        .await
        .map_err(|e| MarketError::FetchFailed {
            query: query.to_string(),
            reason: e.to_string(),
        })?;

    Ok(normalize_news(raw, query, Utc::now().timestamp_millis()))
}
