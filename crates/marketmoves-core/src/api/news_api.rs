//! NewsAPI.org client for recent headlines
//!
//! Headlines are best-effort enrichment: the symbol is used as a free-text
//! query (upstream may return loosely related articles) and every failure
//! mode degrades to an empty list at the aggregation boundary rather than
//! failing the analysis.

use crate::api::NewsProvider;
use crate::config::ProviderConfig;
use crate::error::{MarketError, Result};
use crate::model::{NEWS_CAP, NewsItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "https://newsapi.org/v2/everything";

/// NewsAPI.org client
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: Option<String>,
}

impl NewsApiClient {
    /// Create a new client; without a key the headline feature is disabled
    /// and every fetch yields an empty list.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Create a client from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.news_api_key.clone())
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_news(&self, symbol: &str) -> Result<Vec<NewsItem>> {
        // Missing credential disables the feature, it is not an error
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("no news API key configured, skipping headlines");
            return Ok(Vec::new());
        };

        let page_size = NEWS_CAP.to_string();
        let params = [
            ("q", symbol),
            ("language", "en"),
            ("sortBy", "publishedAt"),
            ("pageSize", page_size.as_str()),
            ("apiKey", api_key),
        ];

        tracing::debug!(symbol, "requesting headlines");
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

        Ok(parse_articles(&data))
    }
}

/// Normalize a NewsAPI `articles` array; items without a title or URL are
/// skipped, timestamps that fail to parse become unknown.
fn parse_articles(data: &Value) -> Vec<NewsItem> {
    let Some(articles) = data.get("articles").and_then(Value::as_array) else {
        return Vec::new();
    };

    articles
        .iter()
        .filter_map(|article| {
            let title = article.get("title")?.as_str()?.to_string();
            let url = article.get("url")?.as_str()?.to_string();

            let source = article
                .get("source")
                .and_then(|s| s.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string);

            let published_at = article
                .get("publishedAt")
                .and_then(Value::as_str)
                .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                .map(|ts| ts.with_timezone(&Utc));

            Some(NewsItem {
                title,
                url,
                source,
                published_at,
            })
        })
        .take(NEWS_CAP)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_credential_yields_empty_not_error() {
        let client = NewsApiClient::new(None);
        let items = client.fetch_news("AAPL").await.expect("disabled feature");
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_articles() {
        let data = json!({
            "articles": [
                {
                    "title": "Apple unveils new chip",
                    "url": "https://example.com/a",
                    "source": { "name": "Example Wire" },
                    "publishedAt": "2025-08-12T14:30:00Z"
                },
                {
                    "title": "Untitled piece without a link"
                }
            ]
        });

        let items = parse_articles(&data);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Apple unveils new chip");
        assert_eq!(items[0].source.as_deref(), Some("Example Wire"));
        assert!(items[0].published_at.is_some());
    }

    #[test]
    fn test_parse_articles_caps_at_five() {
        let articles: Vec<Value> = (0..8)
            .map(|i| {
                json!({
                    "title": format!("Headline {i}"),
                    "url": format!("https://example.com/{i}")
                })
            })
            .collect();
        let data = json!({ "articles": articles });

        assert_eq!(parse_articles(&data).len(), NEWS_CAP);
    }

    #[test]
    fn test_parse_articles_malformed_body_is_empty() {
        assert!(parse_articles(&json!({ "status": "error" })).is_empty());
        assert!(parse_articles(&json!("not an object")).is_empty());
    }
}
