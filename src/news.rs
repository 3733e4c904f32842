//! NewsAPI client for fetching recent smart-glasses articles.
//!
//! Issues a single GET against the NewsAPI `/v2/everything` endpoint over a
//! rolling 24-hour window and normalizes the response into [`Article`]
//! records. No caching, no retries; an empty result is valid and signals a
//! slow news day, not an error.
//!
//! The [`ArticleSource`] trait is the seam between the pipeline and the
//! network so tests can substitute a deterministic fake.

use crate::error::{GhostwriterError, Result};
use crate::models::{self, Article, NewsResponse};
use chrono::{Duration, Utc};
use tracing::{debug, info, instrument};

const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Fixed search query over the smart glasses / AR / XR ecosystem.
pub const TOPIC_QUERY: &str =
    "smart glasses OR AR glasses OR Android XR OR Apple Vision Pro OR Meta Ray-Ban";

/// Capability interface for fetching recent articles.
pub trait ArticleSource {
    /// Fetch up to `limit` recent articles, newest first.
    async fn fetch(&self, limit: u32) -> Result<Vec<Article>>;
}

/// HTTP client for NewsAPI.
#[derive(Debug)]
pub struct NewsClient {
    client: reqwest::Client,
    api_key: String,
}

impl NewsClient {
    /// Create a client from the configured credential.
    ///
    /// Fails with a configuration error if the credential is absent. No
    /// network I/O happens here, so a missing key is reported before any
    /// request is attempted.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.ok_or(GhostwriterError::MissingEnv {
            var: "NEWS_API_KEY",
        })?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("ghostwriter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, api_key })
    }
}

impl ArticleSource for NewsClient {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, limit: u32) -> Result<Vec<Article>> {
        // Rolling 24-hour window ending at invocation time.
        let since = (Utc::now() - Duration::hours(24))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        info!(%since, limit, "Querying NewsAPI for recent articles");

        let response = self
            .client
            .get(NEWS_ENDPOINT)
            .query(&[
                ("q", TOPIC_QUERY),
                ("from", &since),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", &limit.to_string()),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let envelope: NewsResponse = response.json().await?;
        if envelope.status != "ok" {
            return Err(GhostwriterError::NewsApi {
                message: envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let raw_count = envelope.articles.len();
        let articles = models::normalize(envelope.articles);
        debug!(
            raw = raw_count,
            kept = articles.len(),
            "Normalized NewsAPI articles"
        );
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_fails_before_any_request() {
        let err = NewsClient::new(None).unwrap_err();
        match err {
            GhostwriterError::MissingEnv { var } => assert_eq!(var, "NEWS_API_KEY"),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    fn present_credential_builds_a_client() {
        assert!(NewsClient::new(Some("test-key".to_string())).is_ok());
    }
}
