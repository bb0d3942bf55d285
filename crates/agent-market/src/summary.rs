//! Plain-text summaries for text-only consumers

use crate::model::{IndicesResult, NewsResult, Quote};

fn direction(change: f64) -> (&'static str, &'static str) {
    if change >= 0.0 { ("up", "+") } else { ("down", "") }
}

/// One-sentence price summary
pub fn price_summary(quote: &Quote) -> String {
    let (direction, sign) = direction(quote.change);
    format!(
        "{} ({}) is currently trading at {} {:.2}, {direction} {sign}{:.2} ({sign}{:.2}%) today.",
        quote.name, quote.symbol, quote.currency, quote.price, quote.change, quote.change_percent
    )
}

/// Article count followed by one line per headline
pub fn news_summary(result: &NewsResult) -> String {
    if result.articles.is_empty() {
        return format!("No recent news found for \"{}\".", result.query);
    }

    let mut summary = format!(
        "Found {} news article{} for \"{}\":",
        result.articles.len(),
        if result.articles.len() == 1 { "" } else { "s" },
        result.query
    );
    for article in &result.articles {
        summary.push_str(&format!("\n- {} ({})", article.title, article.publisher));
    }
    summary
}

/// One line per index
pub fn indices_summary(result: &IndicesResult) -> String {
    if result.indices.is_empty() {
        return "Market index data is currently unavailable.".to_string();
    }

    let mut summary = String::from("Major market indices:");
    for index in &result.indices {
        let (direction, sign) = direction(index.change);
        summary.push_str(&format!(
            "\n- {} ({}): {:.2}, {direction} {sign}{:.2} ({sign}{:.2}%)",
            index.name, index.symbol, index.price, index.change, index.change_percent
        ));
    }
    summary
}

/// Header naming the compared symbols, then one line per quote
pub fn comparison_summary(quotes: &[Quote], asset_plural: &str) -> String {
    let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
    let mut summary = format!(
        "Compared {} {asset_plural}: {}.",
        quotes.len(),
        symbols.join(", ")
    );

    for quote in quotes {
        let (_, sign) = direction(quote.change);
        summary.push_str(&format!(
            "\n- {} ({}): {} {:.2} ({sign}{:.2}%)",
            quote.name, quote.symbol, quote.currency, quote.price, quote.change_percent
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, EquityMetrics, MarketIndex, QuoteMetrics};

    fn quote(symbol: &str, price: f64, change: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{symbol} Corp"),
            price,
            change,
            change_percent: change / (price - change) * 100.0,
            day_high: 0.0,
            day_low: 0.0,
            open: 0.0,
            previous_close: price - change,
            volume: 0,
            currency: "USD".to_string(),
            metrics: QuoteMetrics::Equity(EquityMetrics::default()),
            timestamp: None,
        }
    }

    #[test]
    fn test_price_summary_up() {
        let text = price_summary(&quote("AAPL", 110.0, 10.0));
        assert_eq!(
            text,
            "AAPL Corp (AAPL) is currently trading at USD 110.00, up +10.00 (+10.00%) today."
        );
    }

    #[test]
    fn test_price_summary_down() {
        let text = price_summary(&quote("TSLA", 90.0, -10.0));
        assert!(text.contains("down -10.00 (-10.00%)"));
    }

    #[test]
    fn test_news_summary() {
        let mut result = NewsResult {
            query: "BTC".to_string(),
            articles: vec![],
            timestamp: Some(0),
        };
        assert_eq!(news_summary(&result), "No recent news found for \"BTC\".");

        result.articles.push(Article {
            title: "Bitcoin rallies".to_string(),
            publisher: "Reuters".to_string(),
            link: String::new(),
            published_at: 0,
            thumbnail: None,
            summary: None,
        });
        assert_eq!(
            news_summary(&result),
            "Found 1 news article for \"BTC\":\n- Bitcoin rallies (Reuters)"
        );
    }

    #[test]
    fn test_indices_summary() {
        let result = IndicesResult {
            indices: vec![MarketIndex {
                name: "S&P 500".to_string(),
                symbol: "^GSPC".to_string(),
                price: 5000.0,
                change: -25.0,
                change_percent: -0.5,
            }],
        };
        assert_eq!(
            indices_summary(&result),
            "Major market indices:\n- S&P 500 (^GSPC): 5000.00, down -25.00 (-0.50%)"
        );
        assert_eq!(
            indices_summary(&IndicesResult { indices: vec![] }),
            "Market index data is currently unavailable."
        );
    }

    #[test]
    fn test_comparison_summary() {
        let quotes = vec![quote("AAPL", 110.0, 10.0), quote("MSFT", 95.0, -5.0)];
        let text = comparison_summary(&quotes, "stocks");
        assert!(text.starts_with("Compared 2 stocks: AAPL, MSFT."));
        assert!(text.contains("- AAPL Corp (AAPL): USD 110.00 (+10.00%)"));
        assert!(text.contains("- MSFT Corp (MSFT): USD 95.00 (-5.00%)"));
    }
}
