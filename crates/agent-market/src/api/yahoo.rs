//! Yahoo Finance API client

use crate::api::MarketDataProvider;
use crate::api::types::{QuoteEnvelope, RawQuote, RawSearchResponse};
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tokio::sync::OnceCell;
use tracing::debug;

/// Yahoo Finance API client
///
/// The quote endpoint only answers requests that carry a session cookie and
/// the matching crumb. Both are obtained on first use and kept for the
/// lifetime of the client.
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    client: Client,
    config: MarketConfig,
    crumb: OnceCell<String>,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new(config: MarketConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
            crumb: OnceCell::new(),
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Get the latest quote for a symbol
    pub async fn get_quote(&self, symbol: &str) -> Result<Option<RawQuote>> {
        let crumb = self.crumb().await?;

        debug!(symbol, "Requesting quote");
        let response = self
            .client
            .get(&self.config.quote_url)
            .query(&[("symbols", symbol), ("crumb", crumb)])
            .send()
            .await?;

        let envelope: QuoteEnvelope = Self::check_status(response).await?.json().await?;
        let Some(quote_response) = envelope.quote_response else {
            return Ok(None);
        };

        if let Some(error) = quote_response.error.filter(|e| !e.is_null()) {
            return Err(MarketError::Upstream(format!(
                "Quote lookup for {symbol} failed: {error}"
            )));
        }

        Ok(quote_response.result.into_iter().next())
    }

    /// Search for news matching a keyword query
    pub async fn search(&self, query: &str, news_count: u32) -> Result<Option<RawSearchResponse>> {
        debug!(query, news_count, "Searching news");
        let news_count = news_count.to_string();
        let response = self
            .client
            .get(&self.config.search_url)
            .query(&[
                ("q", query),
                ("newsCount", news_count.as_str()),
                ("quotesCount", "0"),
            ])
            .send()
            .await?;

        let body = Self::check_status(response).await?.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn crumb(&self) -> Result<&str> {
        self.crumb
            .get_or_try_init(|| self.fetch_crumb())
            .await
            .map(String::as_str)
    }

    async fn fetch_crumb(&self) -> Result<String> {
        // The cookie endpoint answers with an error status but still sets the
        // session cookie, so only transport failures matter here.
        if let Err(e) = self.client.get(&self.config.cookie_url).send().await {
            debug!("Session cookie request failed: {e}");
        }

        let response = self.client.get(&self.config.crumb_url).send().await?;
        let crumb = Self::check_status(response).await?.text().await?;
        let crumb = crumb.trim();

        if crumb.is_empty() || crumb.contains('<') {
            return Err(MarketError::Upstream(
                "Yahoo Finance returned no session crumb".to_string(),
            ));
        }

        debug!("Obtained Yahoo Finance session crumb");
        Ok(crumb.to_string())
    }

    async fn check_status(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(MarketError::Upstream(format!(
            "Yahoo Finance error {status}: {}",
            body.chars().take(200).collect::<String>()
        )))
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn quote(&self, symbol: &str) -> Result<Option<RawQuote>> {
        self.get_quote(symbol).await
    }

    async fn search_news(&self, query: &str, news_count: u32) -> Result<Option<RawSearchResponse>> {
        self.search(query, news_count).await
    }
}
