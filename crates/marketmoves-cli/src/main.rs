//! MarketMoves CLI
//!
//! Fetches and prints the combined snapshot for one ticker.
//!
//! # Usage
//!
//! ```bash
//! export ALPHA_VANTAGE_API_KEY="..."
//! export NEWSAPI_KEY="..."   # optional, enables headlines
//!
//! marketmoves AAPL
//! marketmoves NVDA --json
//! ```

use clap::Parser;
use marketmoves_core::{Analyzer, ProviderConfig, StockAnalysis};
use std::env;

#[derive(Parser, Debug)]
#[command(name = "marketmoves")]
#[command(about = "Fetch a combined market snapshot for a ticker", long_about = None)]
struct Args {
    /// Ticker symbol to analyze (e.g. AAPL, MSFT, NVDA)
    ticker: String,

    /// Print the raw analysis as pretty JSON
    #[arg(long)]
    json: bool,
}

fn print_report(analysis: &StockAnalysis) {
    let quote = &analysis.quote;
    let sign = if quote.change >= 0.0 { "+" } else { "" };
    println!(
        "{}  ${:.2}  {sign}{:.2} ({sign}{:.2}%)",
        quote.symbol, quote.price, quote.change, quote.change_percent
    );
    if let Some(volume) = quote.volume {
        println!("Volume: {volume}");
    }

    let metrics = &analysis.metrics;
    println!(
        "Market cap: {}   P/E: {}   Dividend yield: {}",
        metrics
            .market_cap
            .map_or_else(|| "-".to_string(), format_market_cap),
        metrics
            .pe_ratio
            .map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
        metrics
            .dividend_yield
            .map_or_else(|| "-".to_string(), |v| format!("{:.2}%", v * 100.0)),
    );
    if let (Some(high), Some(low)) = (metrics.fifty_two_week_high, metrics.fifty_two_week_low) {
        println!("52-week range: ${low:.2} - ${high:.2}");
    }

    if let Some(last) = analysis.history.points.last() {
        println!(
            "History: {} points, last close ${:.2} on {}",
            analysis.history.points.len(),
            last.close,
            last.date
        );
    }

    if !analysis.news.items.is_empty() {
        println!("\nHeadlines:");
        for item in &analysis.news.items {
            match &item.source {
                Some(source) => println!("  - {} ({source})", item.title),
                None => println!("  - {}", item.title),
            }
        }
    }

    println!("\nWhy is it moving?");
    println!("{}", analysis.narrative);
}

/// Humanize a market capitalization figure ($1.23T, $456.78B, ...)
fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${value:.0}")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,marketmoves_core=info".to_string()),
        )
        .init();

    let args = Args::parse();
    let config = ProviderConfig::from_env();
    let analyzer = Analyzer::from_config(&config);

    match analyzer.analyze(&args.ticker).await {
        Ok(analysis) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_report(&analysis);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, status = err.status(), "analysis failed");
            Err(err.into())
        }
    }
}
