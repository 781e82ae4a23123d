//! Concurrent fan-out aggregator
//!
//! One analysis fans out to all providers at once, joins them, and applies
//! the fault-tolerance policy: quote, metrics and history are required
//! (first failure aborts the whole analysis), news is best-effort and folds
//! into an empty feed on any failure.

use crate::api::{AlphaVantageClient, MarketDataProvider, NewsApiClient, NewsProvider};
use crate::config::ProviderConfig;
use crate::error::{MarketError, Result};
use crate::model::{History, Metrics, NEWS_CAP, NewsFeed, NewsItem, Quote, StockAnalysis};
use crate::narrative;
use std::sync::Arc;

/// Ticker analysis service over a market-data provider and a news provider
#[derive(Clone)]
pub struct Analyzer {
    market: Arc<dyn MarketDataProvider>,
    news: Arc<dyn NewsProvider>,
}

impl Analyzer {
    /// Create an analyzer over explicit providers
    pub fn new(market: Arc<dyn MarketDataProvider>, news: Arc<dyn NewsProvider>) -> Self {
        Self { market, news }
    }

    /// Wire up the real upstream clients from configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            Arc::new(AlphaVantageClient::from_config(config)),
            Arc::new(NewsApiClient::from_config(config)),
        )
    }

    /// Run the full pipeline for one ticker: fan out to every provider
    /// concurrently, merge per policy and synthesize the narrative.
    pub async fn analyze(&self, ticker: &str) -> Result<StockAnalysis> {
        let symbol = normalize_symbol(ticker)?;
        tracing::info!(%symbol, "analyzing ticker");

        let (quote, metrics, history, news) = tokio::join!(
            self.market.fetch_quote(&symbol),
            self.market.fetch_metrics(&symbol),
            self.market.fetch_history(&symbol),
            self.news.fetch_news(&symbol),
        );

        // Required data: first error wins, in this fixed order
        let quote = quote?;
        let metrics = metrics?;
        let history = history?;
        let news = fold_news(news);

        let narrative = narrative::explain(Some(&quote), Some(&metrics), &news.items);

        Ok(StockAnalysis {
            quote,
            metrics,
            history,
            news,
            narrative,
        })
    }

    /// Current quote for a ticker
    pub async fn quote(&self, ticker: &str) -> Result<Quote> {
        let symbol = normalize_symbol(ticker)?;
        self.market.fetch_quote(&symbol).await
    }

    /// Company fundamentals for a ticker
    pub async fn metrics(&self, ticker: &str) -> Result<Metrics> {
        let symbol = normalize_symbol(ticker)?;
        self.market.fetch_metrics(&symbol).await
    }

    /// Daily close history for a ticker
    pub async fn history(&self, ticker: &str) -> Result<History> {
        let symbol = normalize_symbol(ticker)?;
        self.market.fetch_history(&symbol).await
    }

    /// Recent headlines for a ticker. Never fails: a blank ticker or any
    /// provider failure yields an empty feed.
    pub async fn news(&self, ticker: &str) -> NewsFeed {
        let Ok(symbol) = normalize_symbol(ticker) else {
            return NewsFeed::default();
        };
        fold_news(self.news.fetch_news(&symbol).await)
    }
}

/// Canonicalize a ticker: trim, reject blank input before any network
/// call, uppercase. No validation against a known-symbol list; upstream
/// decides whether the symbol exists.
fn normalize_symbol(ticker: &str) -> Result<String> {
    let trimmed = ticker.trim();
    if trimmed.is_empty() {
        return Err(MarketError::MissingSymbol);
    }
    Ok(trimmed.to_uppercase())
}

/// Fold a news outcome into a bounded feed, absorbing failures
fn fold_news(outcome: Result<Vec<NewsItem>>) -> NewsFeed {
    let mut items = match outcome {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "news fetch failed, continuing without headlines");
            Vec::new()
        }
    };
    items.truncate(NEWS_CAP);
    NewsFeed { items }
}
