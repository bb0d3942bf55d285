//! Concurrent multi-symbol fetches
//!
//! Aggregate handlers fan out one quote lookup per symbol, wait for all of
//! them to settle, and keep the survivors in input order. Failed items are
//! logged and dropped; whether an empty survivor set is an error is decided
//! by [`SettlePolicy`].

use crate::api::MarketDataProvider;
use crate::error::{MarketError, Result};
use crate::model::{IndicesResult, MarketIndex, Quote};
use crate::normalize::{AssetClass, fetch_quote};
use futures::future::join_all;
use std::future::Future;
use tracing::warn;

/// Most symbols a comparison will fetch; extra symbols are ignored
pub const MAX_COMPARISON_SYMBOLS: usize = 5;

/// Indices reported by the market overview, as (symbol, display name)
pub const MAJOR_INDICES: [(&str, &str); 4] = [
    ("^GSPC", "S&P 500"),
    ("^IXIC", "NASDAQ"),
    ("^DJI", "DOW Jones"),
    ("^RUT", "Russell 2000"),
];

/// What an empty survivor set means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePolicy {
    /// At least one item must succeed, otherwise `AllFailed`
    RequireAny { asset: &'static str },
    /// An empty result is a valid answer
    AllowEmpty,
}

/// Run `fetch` for every item concurrently, returning results in input order
pub async fn fetch_concurrently<'a, I, T, F, Fut>(items: &'a [I], fetch: F) -> Vec<Result<T>>
where
    F: Fn(&'a I) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    join_all(items.iter().map(fetch)).await
}

/// Drop failed items and apply the empty-set policy
///
/// `labels[i]` names the item that produced `results[i]`.
pub fn settle<T>(labels: &[String], results: Vec<Result<T>>, policy: SettlePolicy) -> Result<Vec<T>> {
    let survivors: Vec<T> = labels
        .iter()
        .zip(results)
        .filter_map(|(label, result)| match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(item = %label, error = %e, "Dropping failed item");
                None
            }
        })
        .collect();

    match policy {
        SettlePolicy::RequireAny { asset } if survivors.is_empty() => {
            Err(MarketError::AllFailed { asset })
        }
        _ => Ok(survivors),
    }
}

/// Keep the first [`MAX_COMPARISON_SYMBOLS`] symbols, upper-cased
pub fn prepare_symbols(symbols: &[String]) -> Vec<String> {
    symbols
        .iter()
        .take(MAX_COMPARISON_SYMBOLS)
        .map(|s| s.trim().to_uppercase())
        .collect()
}

/// Fetch quotes for up to five symbols side by side
///
/// Fails with `AllFailed` only when no symbol could be fetched.
pub async fn compare_quotes(
    provider: &dyn MarketDataProvider,
    symbols: &[String],
    class: AssetClass,
) -> Result<Vec<Quote>> {
    let symbols = prepare_symbols(symbols);
    let results =
        fetch_concurrently(&symbols[..], |symbol| fetch_quote(provider, symbol, class)).await;

    settle(
        &symbols,
        results,
        SettlePolicy::RequireAny {
            asset: class.plural(),
        },
    )
}

/// Fetch the four major indices; lost indices are simply left out
pub async fn market_indices(provider: &dyn MarketDataProvider) -> IndicesResult {
    let results = fetch_concurrently(&MAJOR_INDICES[..], |&(symbol, name)| async move {
        let quote = fetch_quote(provider, symbol, AssetClass::Equity).await?;
        Ok::<_, MarketError>(MarketIndex {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
        })
    })
    .await;

    let labels: Vec<String> = MAJOR_INDICES.iter().map(|(_, name)| (*name).to_string()).collect();
    let indices = settle(&labels, results, SettlePolicy::AllowEmpty).unwrap_or_default();

    IndicesResult { indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockMarketDataProvider, RawQuote};
    use std::collections::HashSet;
    use tokio_test::{assert_err, assert_ok};

    fn raw(symbol: &str, price: f64) -> RawQuote {
        RawQuote {
            symbol: Some(symbol.to_string()),
            regular_market_price: Some(price),
            regular_market_previous_close: Some(price - 1.0),
            ..Default::default()
        }
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_prepare_symbols_truncates_and_uppercases() {
        let prepared = prepare_symbols(&symbols(&["aapl", "msft", "googl", "amzn", "tsla", "nflx"]));
        assert_eq!(prepared, vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]);
    }

    #[test]
    fn test_settle_policies() {
        let labels = symbols(&["A", "B"]);

        let all_failed: Vec<Result<u32>> = vec![
            Err(MarketError::Upstream("x".to_string())),
            Err(MarketError::Upstream("y".to_string())),
        ];
        let err = assert_err!(settle(&labels, all_failed, SettlePolicy::RequireAny { asset: "stocks" }));
        assert!(matches!(err, MarketError::AllFailed { asset: "stocks" }));

        let all_failed: Vec<Result<u32>> = vec![
            Err(MarketError::Upstream("x".to_string())),
            Err(MarketError::Upstream("y".to_string())),
        ];
        let empty = assert_ok!(settle(&labels, all_failed, SettlePolicy::AllowEmpty));
        assert!(empty.is_empty());

        let mixed = vec![Err(MarketError::Upstream("x".to_string())), Ok(7)];
        let survivors = assert_ok!(settle(&labels, mixed, SettlePolicy::RequireAny { asset: "stocks" }));
        assert_eq!(survivors, vec![7]);
    }

    #[tokio::test]
    async fn test_compare_fetches_at_most_five() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_quote()
            .withf(|symbol: &str| symbol != "NFLX")
            .times(5)
            .returning(|symbol| Ok(Some(raw(symbol, 100.0))));

        let quotes = compare_quotes(
            &provider,
            &symbols(&["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NFLX"]),
            AssetClass::Equity,
        )
        .await
        .unwrap();

        let returned: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(returned, vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]);
    }

    #[tokio::test]
    async fn test_compare_all_failed() {
        let mut provider = MockMarketDataProvider::new();
        provider
            .expect_quote()
            .times(3)
            .returning(|_| Err(MarketError::Upstream("unavailable".to_string())));

        let err = compare_quotes(&provider, &symbols(&["AAPL", "MSFT", "GOOGL"]), AssetClass::Equity)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No valid stocks found for comparison");
    }

    #[tokio::test]
    async fn test_compare_keeps_survivor_order() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().times(3).returning(|symbol| {
            if symbol == "MSFT" {
                Ok(None)
            } else {
                Ok(Some(raw(symbol, 50.0)))
            }
        });

        let quotes = compare_quotes(&provider, &symbols(&["googl", "msft", "aapl"]), AssetClass::Equity)
            .await
            .unwrap();

        let returned: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(returned, vec!["GOOGL", "AAPL"]);
    }

    #[tokio::test]
    async fn test_compare_single_survivor_is_success() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().times(2).returning(|symbol| {
            if symbol == "ETH-USD" {
                Ok(Some(raw(symbol, 3000.0)))
            } else {
                Err(MarketError::Upstream("timeout".to_string()))
            }
        });

        let quotes = compare_quotes(&provider, &symbols(&["btc", "eth"]), AssetClass::Crypto)
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "ETH");
        assert_eq!(quotes[0].currency, "USD");
    }

    #[tokio::test]
    async fn test_indices_drop_one_failure() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().times(4).returning(|symbol| {
            if symbol == "^DJI" {
                Err(MarketError::Upstream("boom".to_string()))
            } else {
                Ok(Some(raw(symbol, 1000.0)))
            }
        });

        let result = market_indices(&provider).await;
        let names: Vec<&str> = result.indices.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["S&P 500", "NASDAQ", "Russell 2000"]);
        assert_eq!(result.indices[0].symbol, "^GSPC");
        assert_eq!(result.indices[0].change, 1.0);
    }

    #[tokio::test]
    async fn test_indices_all_failed_is_empty() {
        let mut provider = MockMarketDataProvider::new();
        provider.expect_quote().times(4).returning(|_| Ok(None));

        let result = market_indices(&provider).await;
        assert!(result.indices.is_empty());
    }

    #[tokio::test]
    async fn test_indices_requests_each_symbol_once() {
        let mut provider = MockMarketDataProvider::new();
        let expected: HashSet<&str> = MAJOR_INDICES.iter().map(|(s, _)| *s).collect();
        provider
            .expect_quote()
            .withf(move |symbol: &str| expected.contains(symbol))
            .times(4)
            .returning(|symbol| Ok(Some(raw(symbol, 10.0))));

        assert_eq!(market_indices(&provider).await.indices.len(), 4);
    }
}
