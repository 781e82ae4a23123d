//! Provider credential configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the Alpha Vantage API key
pub const ALPHA_VANTAGE_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// Environment variable holding the NewsAPI.org key
pub const NEWS_API_KEY_VAR: &str = "NEWSAPI_KEY";

/// Credentials for the upstream data providers.
///
/// Neither key is checked at construction time. The Alpha Vantage key is
/// required by every quote/metrics/history call and its absence fails those
/// calls with a configuration error; the news key is optional and its
/// absence silently disables headlines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Alpha Vantage API key (required for quote, metrics and history)
    pub alpha_vantage_api_key: Option<String>,

    /// NewsAPI.org key (optional; news degrades to empty without it)
    pub news_api_key: Option<String>,
}

impl ProviderConfig {
    /// Create a new configuration builder
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Load both keys from the environment
    pub fn from_env() -> Self {
        Self {
            alpha_vantage_api_key: std::env::var(ALPHA_VANTAGE_KEY_VAR).ok(),
            news_api_key: std::env::var(NEWS_API_KEY_VAR).ok(),
        }
    }
}

/// Builder for [`ProviderConfig`]
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    news_api_key: Option<String>,
}

impl ProviderConfigBuilder {
    /// Set the Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set the NewsAPI.org key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProviderConfig {
        ProviderConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            news_api_key: self.news_api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_keys() {
        let config = ProviderConfig::default();
        assert!(config.alpha_vantage_api_key.is_none());
        assert!(config.news_api_key.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ProviderConfig::builder()
            .alpha_vantage_api_key("av_key")
            .news_api_key("news_key")
            .build();

        assert_eq!(config.alpha_vantage_api_key.as_deref(), Some("av_key"));
        assert_eq!(config.news_api_key.as_deref(), Some("news_key"));
    }
}
