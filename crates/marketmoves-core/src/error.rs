//! Error types for market data operations

use thiserror::Error;

/// Errors produced by the analysis pipeline
#[derive(Debug, Error)]
pub enum MarketError {
    /// Blank or empty ticker symbol supplied by the caller
    #[error("Missing ticker symbol")]
    MissingSymbol,

    /// Configuration error (typically a missing API credential)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP transport failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream provider reported a failure (non-2xx status, error body,
    /// or a rate-limit throttling note)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Response body did not match the expected payload shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarketError {
    /// HTTP status the error maps to at the serving boundary.
    ///
    /// A missing ticker is the caller's fault (400); everything else is a
    /// server-side failure (500).
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingSymbol => 400,
            _ => 500,
        }
    }
}

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;
