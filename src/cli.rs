//! Command-line interface definitions for the ghostwriter.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials and model settings can be provided via environment variables,
//! everything else via command-line flags. The parsed [`Cli`] value is the
//! single configuration struct for a run: it is built once at startup and its
//! fields are handed to each component, so no component reads the environment
//! on its own.

use clap::Parser;

/// Default model used when `MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Command-line arguments for the ghostwriter application.
///
/// # Examples
///
/// ```sh
/// # Basic usage (keys from the environment)
/// ghostwriter
///
/// # Fewer articles, custom output directory
/// ghostwriter --limit 5 --output-dir ./drafts
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of articles to fetch
    #[arg(short, long, default_value_t = 10)]
    pub limit: u32,

    /// Path to the writing style guide
    #[arg(long, default_value = "config/style_guide_longform.md")]
    pub style_guide: String,

    /// Output directory for generated drafts
    #[arg(short, long, default_value = "data/drafts")]
    pub output_dir: String,

    /// NewsAPI credential
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// Model provider credential
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Model name used for essay generation
    #[arg(long, env = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature for essay generation
    #[arg(long, env = "WRITING_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ghostwriter"]);
        assert_eq!(cli.limit, 10);
        assert_eq!(cli.style_guide, "config/style_guide_longform.md");
        assert_eq!(cli.output_dir, "data/drafts");
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.temperature, 0.7);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "ghostwriter",
            "--limit",
            "5",
            "--output-dir",
            "/tmp/drafts",
            "--model",
            "gpt-4o-mini",
            "--temperature",
            "0.3",
        ]);
        assert_eq!(cli.limit, 5);
        assert_eq!(cli.output_dir, "/tmp/drafts");
        assert_eq!(cli.model, "gpt-4o-mini");
        assert_eq!(cli.temperature, 0.3);
    }

    #[test]
    fn test_cli_keys_via_flags() {
        let cli = Cli::parse_from([
            "ghostwriter",
            "--news-api-key",
            "news-secret",
            "--openai-api-key",
            "model-secret",
        ]);
        assert_eq!(cli.news_api_key.as_deref(), Some("news-secret"));
        assert_eq!(cli.openai_api_key.as_deref(), Some("model-secret"));
    }
}
