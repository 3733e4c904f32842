//! Data models for news articles and the NewsAPI response envelope.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: Normalized news-item record used as model input context
//! - [`NewsResponse`], [`RawArticle`], [`RawSource`]: serde mirror of the raw
//!   NewsAPI `/v2/everything` response
//!
//! Raw articles are normalized through [`normalize`], which drops entries with
//! missing or placeholder titles and fills in a default description.

use serde::Deserialize;

/// Sentinel title NewsAPI uses for articles withdrawn by their publisher.
pub const REMOVED_TITLE: &str = "[Removed]";

/// Default description when an article carries none.
pub const NO_DESCRIPTION: &str = "No description available";

/// A normalized news article, immutable once created.
///
/// Produced by [`normalize`] from the raw API response. Every field is
/// guaranteed non-empty except `description`, which falls back to
/// [`NO_DESCRIPTION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// A short summary, or [`NO_DESCRIPTION`] if the API returned none.
    pub description: String,
    /// Canonical URL of the article.
    pub url: String,
    /// Name of the publishing outlet.
    pub source: String,
    /// Publication timestamp as reported by the API (ISO 8601 string).
    pub published_at: String,
}

/// Top-level NewsAPI response envelope.
///
/// `status` is `"ok"` on success; on error the API sets `status` to `"error"`
/// and carries a human-readable `message`.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// A single article as returned by NewsAPI, before normalization.
///
/// All content fields are optional; NewsAPI omits or nulls them freely,
/// and withdrawn articles carry the `"[Removed]"` placeholder title.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source: RawSource,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// The `source` object nested inside each raw article.
#[derive(Debug, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}

/// Normalize raw API articles into [`Article`] records.
///
/// Drops any entry whose title is absent, empty, or equal to
/// [`REMOVED_TITLE`]. Input order is preserved; the output is never larger
/// than the input.
pub fn normalize(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .filter_map(|a| {
            let title = match a.title {
                Some(t) if !t.is_empty() && t != REMOVED_TITLE => t,
                _ => return None,
            };
            Some(Article {
                title,
                description: a
                    .description
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                url: a.url.unwrap_or_default(),
                source: a.source.name.unwrap_or_default(),
                published_at: a.published_at.unwrap_or_default(),
            })
        })
        .collect()
}
