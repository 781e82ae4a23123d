//! Upstream provider adapters
//!
//! One adapter per data source; each performs exactly one outbound HTTP
//! call per invocation and normalizes the provider's wire schema into the
//! shared model. No retries, no backoff.

pub mod alpha_vantage;
pub mod news_api;

use crate::error::Result;
use crate::model::{History, Metrics, NewsItem, Quote};
use async_trait::async_trait;

pub use alpha_vantage::AlphaVantageClient;
pub use news_api::NewsApiClient;

/// Source of the required market data (quote, fundamentals, history).
///
/// A failure from any of these methods aborts the whole aggregated analysis.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the current quote for a symbol
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote>;

    /// Fetch company fundamentals for a symbol
    async fn fetch_metrics(&self, symbol: &str) -> Result<Metrics>;

    /// Fetch the daily close history for a symbol
    async fn fetch_history(&self, symbol: &str) -> Result<History>;
}

/// Best-effort source of recent headlines.
///
/// Errors from this provider never reach the caller; they are folded into
/// an empty item list by the aggregator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch recent headlines mentioning a symbol
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>>;
}
