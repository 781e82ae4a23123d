//! Alpha Vantage API client
//!
//! Serves the three required data shapes: current quote (`GLOBAL_QUOTE`),
//! fundamentals (`OVERVIEW`) and the daily close series
//! (`TIME_SERIES_DAILY_ADJUSTED`). Numeric fields are parsed defensively:
//! a single missing or non-numeric field never fails a call, only a
//! transport failure or a fully missing payload shape does.

use crate::api::MarketDataProvider;
use crate::config::{ALPHA_VANTAGE_KEY_VAR, ProviderConfig};
use crate::error::{MarketError, Result};
use crate::model::{HISTORY_CAP, History, HistoryPoint, Metrics, Quote};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: Option<String>,
}

impl AlphaVantageClient {
    /// Create a new client.
    ///
    /// The key may be absent; every call then fails with a configuration
    /// error before touching the network.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Create a client from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.alpha_vantage_api_key.clone())
    }

    /// Perform one query against the Alpha Vantage endpoint and surface
    /// provider-reported error conditions.
    async fn query(&self, function: &str, symbol: &str, extra: &[(&str, &str)]) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MarketError::Config(format!("{ALPHA_VANTAGE_KEY_VAR} not set")))?;

        let mut params = HashMap::new();
        params.insert("function", function);
        params.insert("symbol", symbol);
        params.insert("apikey", api_key);
        for (name, value) in extra {
            params.insert(name, value);
        }

        tracing::debug!(function, symbol, "requesting Alpha Vantage");
        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(MarketError::Upstream(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| MarketError::Malformed(e.to_string()))?;

        check_provider_errors(&data)?;
        Ok(data)
    }
}

#[async_trait]
impl MarketDataProvider for AlphaVantageClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        let data = self.query("GLOBAL_QUOTE", symbol, &[]).await?;
        parse_global_quote(&data, symbol)
    }

    async fn fetch_metrics(&self, symbol: &str) -> Result<Metrics> {
        let data = self.query("OVERVIEW", symbol, &[]).await?;
        Ok(parse_overview(&data))
    }

    async fn fetch_history(&self, symbol: &str) -> Result<History> {
        let data = self
            .query(
                "TIME_SERIES_DAILY_ADJUSTED",
                symbol,
                &[("outputsize", "compact")],
            )
            .await?;
        parse_daily_series(&data)
    }
}

/// Map Alpha Vantage in-band error signaling to errors
fn check_provider_errors(data: &Value) -> Result<()> {
    if let Some(error) = data.get("Error Message") {
        return Err(MarketError::Upstream(format!(
            "Alpha Vantage error: {error}"
        )));
    }

    // Free-tier throttling arrives as a "Note" with a 200 status
    if data.get("Note").is_some() {
        return Err(MarketError::Upstream(
            "Alpha Vantage rate limit reached".to_string(),
        ));
    }

    Ok(())
}

/// Numeric field of a quote object; missing or non-numeric parses as 0
fn num_field(obj: &Map<String, Value>, key: &str) -> f64 {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Optional numeric field; placeholders like "None" or "-" become unknown,
/// never zero or NaN
fn opt_num_field(data: &Value, key: &str) -> Option<f64> {
    data.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<f64>().ok())
}

/// Normalize a `GLOBAL_QUOTE` payload.
///
/// `change` and `changePercent` are derived here from the raw price and
/// previous close; the percent is defined as 0 when the previous close is 0.
fn parse_global_quote(data: &Value, symbol: &str) -> Result<Quote> {
    let quote = data
        .get("Global Quote")
        .and_then(Value::as_object)
        .ok_or_else(|| MarketError::Malformed("no Global Quote object in response".to_string()))?;

    let price = num_field(quote, "05. price");
    let previous_close = num_field(quote, "08. previous close");
    let change = price - previous_close;
    let change_percent = if previous_close == 0.0 {
        0.0
    } else {
        change / previous_close * 100.0
    };

    let volume = quote
        .get("06. volume")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&v| v != 0);

    let symbol = quote
        .get("01. symbol")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(symbol)
        .to_string();

    Ok(Quote {
        symbol,
        price,
        change,
        change_percent,
        volume,
        previous_close: (previous_close != 0.0).then_some(previous_close),
    })
}

/// Normalize an `OVERVIEW` payload; every field is independently optional.
///
/// An empty overview (sparse or unknown symbol) yields all-unknown metrics
/// rather than an error; upstream does not reliably distinguish the two.
fn parse_overview(data: &Value) -> Metrics {
    Metrics {
        market_cap: opt_num_field(data, "MarketCapitalization"),
        pe_ratio: opt_num_field(data, "PERatio"),
        dividend_yield: opt_num_field(data, "DividendYield"),
        fifty_two_week_high: opt_num_field(data, "52WeekHigh"),
        fifty_two_week_low: opt_num_field(data, "52WeekLow"),
    }
}

/// Normalize a daily time series payload: extract closing prices, sort
/// ascending by date and keep the most recent [`HISTORY_CAP`] points.
///
/// Lexicographic ordering on the date strings is valid because they are
/// ISO-formatted (YYYY-MM-DD).
fn parse_daily_series(data: &Value) -> Result<History> {
    let series = data
        .get("Time Series (Daily)")
        .and_then(Value::as_object)
        .ok_or_else(|| MarketError::Malformed("no daily time series in response".to_string()))?;

    let mut points: Vec<HistoryPoint> = series
        .iter()
        .map(|(date, ohlc)| HistoryPoint {
            date: date.clone(),
            close: ohlc
                .get("4. close")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0),
        })
        .collect();

    points.sort_by(|a, b| a.date.cmp(&b.date));
    if points.len() > HISTORY_CAP {
        points.drain(..points.len() - HISTORY_CAP);
    }

    Ok(History { points })
}
