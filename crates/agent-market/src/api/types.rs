//! Raw upstream response shapes
//!
//! Every field is optional: the provider omits whatever it does not have.
//! Defaults are applied only by the normalizers.

use serde::{Deserialize, Serialize};

/// One quote record as returned by the quote endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub market_cap: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    pub eps_trailing_twelve_months: Option<f64>,
    /// Fractional, e.g. 0.0123 for 1.23%
    pub dividend_yield: Option<f64>,
    pub beta: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub currency: Option<String>,
    pub full_exchange_name: Option<String>,
}

/// Envelope of the quote endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEnvelope {
    pub quote_response: Option<QuoteResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub result: Vec<RawQuote>,
    pub error: Option<serde_json::Value>,
}

/// Search endpoint response; only the news part is consumed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub news: Option<Vec<RawNewsItem>>,
}

/// One news item from the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNewsItem {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub link: Option<String>,
    /// Epoch seconds
    pub provider_publish_time: Option<i64>,
    pub thumbnail: Option<RawThumbnail>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawThumbnail {
    #[serde(default)]
    pub resolutions: Vec<RawResolution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResolution {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub tag: Option<String>,
}
