//! Configuration for market data operations

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
const DEFAULT_SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";
const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Configuration for the upstream market data client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Quote endpoint
    pub quote_url: String,

    /// Search (news) endpoint
    pub search_url: String,

    /// Session crumb endpoint
    pub crumb_url: String,

    /// Endpoint that hands out the session cookie
    pub cookie_url: String,

    /// User-Agent header sent upstream
    pub user_agent: String,

    /// Per-request timeout in seconds; `None` leaves requests unbounded
    pub request_timeout_secs: Option<u64>,

    /// News article count used when the caller gives no limit
    pub default_news_limit: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            crumb_url: DEFAULT_CRUMB_URL.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
            default_news_limit: 5,
        }
    }
}

impl MarketConfig {
    /// Create a new configuration builder
    pub fn builder() -> MarketConfigBuilder {
        MarketConfigBuilder::default()
    }

    /// Load a JSON configuration file; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MarketError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MARKET_*` environment overrides
    pub fn with_env(self) -> Result<Self> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("MARKET_QUOTE_URL") {
            self.quote_url = url;
        }
        if let Some(url) = lookup("MARKET_SEARCH_URL") {
            self.search_url = url;
        }
        if let Some(agent) = lookup("MARKET_USER_AGENT") {
            self.user_agent = agent;
        }
        if let Some(secs) = lookup("MARKET_REQUEST_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                MarketError::Config(format!("MARKET_REQUEST_TIMEOUT_SECS is not a number: {e}"))
            })?;
            self.request_timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("quote_url", &self.quote_url),
            ("search_url", &self.search_url),
            ("crumb_url", &self.crumb_url),
            ("cookie_url", &self.cookie_url),
        ] {
            Url::parse(value)
                .map_err(|e| MarketError::Config(format!("{name} is not a valid URL: {e}")))?;
        }

        if !(1..=10).contains(&self.default_news_limit) {
            return Err(MarketError::Config(
                "default_news_limit must be between 1 and 10".to_string(),
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(MarketError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for MarketConfig
#[derive(Debug, Default)]
pub struct MarketConfigBuilder {
    quote_url: Option<String>,
    search_url: Option<String>,
    crumb_url: Option<String>,
    cookie_url: Option<String>,
    user_agent: Option<String>,
    request_timeout_secs: Option<u64>,
    default_news_limit: Option<u32>,
}

impl MarketConfigBuilder {
    /// Set the quote endpoint
    pub fn quote_url(mut self, url: impl Into<String>) -> Self {
        self.quote_url = Some(url.into());
        self
    }

    /// Set the search endpoint
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }

    /// Set the crumb endpoint
    pub fn crumb_url(mut self, url: impl Into<String>) -> Self {
        self.crumb_url = Some(url.into());
        self
    }

    /// Set the cookie endpoint
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cookie_url = Some(url.into());
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set a per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Set the default news limit
    pub fn default_news_limit(mut self, limit: u32) -> Self {
        self.default_news_limit = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MarketConfig> {
        let defaults = MarketConfig::default();

        let config = MarketConfig {
            quote_url: self.quote_url.unwrap_or(defaults.quote_url),
            search_url: self.search_url.unwrap_or(defaults.search_url),
            crumb_url: self.crumb_url.unwrap_or(defaults.crumb_url),
            cookie_url: self.cookie_url.unwrap_or(defaults.cookie_url),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            request_timeout_secs: self.request_timeout_secs.or(defaults.request_timeout_secs),
            default_news_limit: self.default_news_limit.unwrap_or(defaults.default_news_limit),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MarketConfig::default();
        assert_eq!(config.default_news_limit, 5);
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = MarketConfig::builder()
            .quote_url("http://localhost:8080/quote")
            .request_timeout(Duration::from_secs(20))
            .default_news_limit(8)
            .build()
            .unwrap();

        assert_eq!(config.quote_url, "http://localhost:8080/quote");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(20)));
        assert_eq!(config.default_news_limit, 8);
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let result = MarketConfig::builder().search_url("not a url").build();
        assert!(matches!(result, Err(MarketError::Config(msg)) if msg.contains("search_url")));
    }

    #[test]
    fn test_validation_rejects_news_limit() {
        let config = MarketConfig {
            default_news_limit: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MARKET_QUOTE_URL", "http://127.0.0.1:9000/quote"),
            ("MARKET_REQUEST_TIMEOUT_SECS", "15"),
        ]);
        let config = MarketConfig::default()
            .with_lookup(|k| env.get(k).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.quote_url, "http://127.0.0.1:9000/quote");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_env_rejects_bad_timeout() {
        let result = MarketConfig::default()
            .with_lookup(|k| (k == "MARKET_REQUEST_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(matches!(result, Err(MarketError::Config(_))));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_news_limit": 3, "request_timeout_secs": 30}}"#).unwrap();

        let config = MarketConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_news_limit, 3);
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.quote_url, DEFAULT_QUOTE_URL);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = MarketConfig::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(MarketError::Config(_))));
    }
}
