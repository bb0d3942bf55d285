//! Raw quote to display model mapping

use crate::api::{MarketDataProvider, RawQuote};
use crate::error::{MarketError, Result};
use crate::model::{CryptoMetrics, EquityMetrics, Quote, QuoteMetrics};
use tracing::debug;

/// Suffix that turns a bare crypto ticker into its USD pair
pub const CRYPTO_PAIR_SUFFIX: &str = "-USD";

/// Kind of instrument being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Equity,
    Crypto,
}

impl AssetClass {
    /// Singular label used in messages
    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Equity => "Stock",
            AssetClass::Crypto => "Cryptocurrency",
        }
    }

    /// Plural label used in messages
    pub fn plural(self) -> &'static str {
        match self {
            AssetClass::Equity => "stocks",
            AssetClass::Crypto => "cryptocurrencies",
        }
    }

    /// Upstream lookup key for a requested symbol
    pub fn lookup_symbol(self, requested: &str) -> String {
        match self {
            AssetClass::Equity => requested.to_uppercase(),
            AssetClass::Crypto => crypto_lookup_symbol(requested),
        }
    }
}

/// Upper-case a crypto symbol and pair it with USD unless it already names a pair
pub fn crypto_lookup_symbol(requested: &str) -> String {
    let symbol = requested.to_uppercase();
    if symbol.contains('-') {
        symbol
    } else {
        format!("{symbol}{CRYPTO_PAIR_SUFFIX}")
    }
}

/// Strip the USD pair marker for display
///
/// Only the first literal `-USD` is removed, wherever it appears.
pub fn crypto_display_symbol(lookup: &str) -> String {
    lookup.replacen(CRYPTO_PAIR_SUFFIX, "", 1)
}

/// First candidate that is present and non-empty
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.trim().is_empty())
}

/// Absolute and percent change against the previous close
///
/// Percent change is 0 when there is no previous close.
pub fn price_change(price: f64, previous_close: f64) -> (f64, f64) {
    let change = price - previous_close;
    let change_percent = if previous_close == 0.0 {
        0.0
    } else {
        change / previous_close * 100.0
    };
    (change, change_percent)
}

/// Map one raw record onto the display model
///
/// `requested` is the symbol the caller asked for; `lookup` is the key that
/// was sent upstream.
pub fn normalize_quote(raw: RawQuote, requested: &str, lookup: &str, class: AssetClass) -> Quote {
    let price = raw.regular_market_price.unwrap_or(0.0);
    let previous_close = raw.regular_market_previous_close.unwrap_or(0.0);
    let (change, change_percent) = price_change(price, previous_close);

    let name = first_present(&[
        raw.long_name.as_deref(),
        raw.short_name.as_deref(),
        Some(requested),
    ])
    .unwrap_or(requested)
    .to_string();

    let (symbol, currency, metrics) = match class {
        AssetClass::Equity => (
            first_present(&[raw.symbol.as_deref(), Some(lookup)])
                .unwrap_or(lookup)
                .to_string(),
            first_present(&[raw.currency.as_deref()])
                .unwrap_or("USD")
                .to_string(),
            QuoteMetrics::Equity(EquityMetrics {
                market_cap: raw.market_cap,
                pe_ratio: raw.trailing_pe,
                eps: raw.eps_trailing_twelve_months,
                dividend_yield: raw.dividend_yield.map(|y| y * 100.0),
                beta: raw.beta,
                exchange_name: raw.full_exchange_name,
                fifty_two_week_high: raw.fifty_two_week_high,
                fifty_two_week_low: raw.fifty_two_week_low,
            }),
        ),
        AssetClass::Crypto => (
            crypto_display_symbol(lookup),
            "USD".to_string(),
            QuoteMetrics::Crypto(CryptoMetrics {
                market_cap: raw.market_cap,
                circulating_supply: raw.circulating_supply,
                fifty_two_week_high: raw.fifty_two_week_high,
                fifty_two_week_low: raw.fifty_two_week_low,
            }),
        ),
    };

    Quote {
        symbol,
        name,
        price,
        change,
        change_percent,
        day_high: raw.regular_market_day_high.unwrap_or(0.0),
        day_low: raw.regular_market_day_low.unwrap_or(0.0),
        open: raw.regular_market_open.unwrap_or(0.0),
        previous_close,
        volume: raw.regular_market_volume.unwrap_or(0),
        currency,
        metrics,
        timestamp: None,
    }
}

/// Fetch one quote and normalize it
///
/// Any upstream failure, or an empty answer, becomes `NotFound`.
pub async fn fetch_quote(
    provider: &dyn MarketDataProvider,
    requested: &str,
    class: AssetClass,
) -> Result<Quote> {
    let lookup = class.lookup_symbol(requested);
    let not_found = || MarketError::NotFound {
        asset: class.label(),
        symbol: requested.to_string(),
    };

    match provider.quote(&lookup).await {
        Ok(Some(raw)) => Ok(normalize_quote(raw, requested, &lookup, class)),
        Ok(None) => {
            debug!(symbol = %lookup, "Provider returned no quote");
            Err(not_found())
        }
        Err(e) => {
            debug!(symbol = %lookup, error = %e, "Quote lookup failed");
            Err(not_found())
        }
    }
}
