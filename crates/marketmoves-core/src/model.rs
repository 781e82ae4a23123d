//! Normalized data model shared by all providers
//!
//! Every type here is request-scoped: constructed fresh per analysis,
//! serialized to the caller, then dropped. Optional fields mean "the
//! provider did not report this", never zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of history points kept (~6 months of trading days)
pub const HISTORY_CAP: usize = 126;

/// Maximum number of news items surfaced to the caller
pub const NEWS_CAP: usize = 5;

/// Point-in-time price snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    /// Absolute change versus previous close
    pub change: f64,
    /// Percent change versus previous close; 0 when previous close is 0
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
}

/// Company-level fundamentals; every field independently optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    /// Fraction, not percent (0.02 = 2%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<f64>,
}

/// One daily closing price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub close: f64,
}

/// Daily close series, ascending by date, at most [`HISTORY_CAP`] points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub points: Vec<HistoryPoint>,
}

/// A single headline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Headlines surfaced to the caller, at most [`NEWS_CAP`] items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsFeed {
    pub items: Vec<NewsItem>,
}

/// Combined per-request analysis payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub quote: Quote,
    pub metrics: Metrics,
    pub history: History,
    pub news: NewsFeed,
    pub narrative: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serializes_camel_case_and_drops_absent_fields() {
        let quote = Quote {
            symbol: "AAPL".to_string(),
            price: 180.5,
            change: -1.25,
            change_percent: -0.69,
            volume: None,
            previous_close: Some(181.75),
        };

        let json = serde_json::to_value(&quote).expect("serializable");
        assert_eq!(json["changePercent"], -0.69);
        assert_eq!(json["previousClose"], 181.75);
        assert!(json.get("volume").is_none());
    }

    #[test]
    fn test_metrics_default_is_all_unknown() {
        let metrics = Metrics::default();
        assert!(metrics.market_cap.is_none());
        assert!(metrics.pe_ratio.is_none());
        assert_eq!(
            serde_json::to_value(&metrics).expect("serializable"),
            serde_json::json!({})
        );
    }
}
