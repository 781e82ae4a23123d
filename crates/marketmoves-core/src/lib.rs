//! MarketMoves: ticker snapshot synthesis
//!
//! Given a stock ticker, fan out to independent upstream data providers
//! (quote, fundamentals, daily history, headlines), normalize their
//! heterogeneous responses into one model, tolerate partial failure and
//! derive a short templated explanation of the day's move.
//!
//! # Architecture
//!
//! - [`api`]: one adapter per upstream source, each mapping a provider wire
//!   schema and its error conditions into the shared model
//! - [`analyzer`]: the concurrent fan-out and the required-vs-optional
//!   fault-tolerance policy
//! - [`narrative`]: the pure rule list producing the explanation text
//!
//! Nothing is persisted or cached: every analysis is request-scoped.
//!
//! # Example
//!
//! ```rust,no_run
//! use marketmoves_core::{Analyzer, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = Analyzer::from_config(&ProviderConfig::from_env());
//!     let analysis = analyzer.analyze("AAPL").await?;
//!     println!("{}", analysis.narrative);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod narrative;

// Re-export main types for convenience
pub use analyzer::Analyzer;
pub use api::{AlphaVantageClient, MarketDataProvider, NewsApiClient, NewsProvider};
pub use config::ProviderConfig;
pub use error::{MarketError, Result};
pub use model::{History, HistoryPoint, Metrics, NewsFeed, NewsItem, Quote, StockAnalysis};
