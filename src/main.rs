//! # Ghostwriter
//!
//! A content-generation pipeline that fetches recent smart-glasses news from
//! NewsAPI, composes a prompt from the articles and a local style guide,
//! generates a long-form essay through an OpenAI-compatible chat-completions
//! endpoint, and writes the draft to a timestamped markdown file.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... OPENAI_API_KEY=... ghostwriter
//! ```
//!
//! ## Architecture
//!
//! One fully sequential run per invocation:
//! 1. **Fetch**: one NewsAPI query over a rolling 24-hour window
//! 2. **Compose**: style guide + article digest + fixed task instructions
//! 3. **Generate**: one completion request, no retries
//! 4. **Write**: metadata header + essay to `data/drafts/essay_<timestamp>.md`
//!
//! An empty fetch result ends the run cleanly with status 0; any failure is
//! reported with its category and a troubleshooting checklist and exits 1.

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod draft;
mod error;
mod generator;
mod models;
mod news;
mod pipeline;
mod prompt;

use cli::Cli;
use generator::{OpenAiClient, SamplingParams};
use news::NewsClient;
use pipeline::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ghostwriter starting up");

    let args = Cli::parse();
    debug!(limit = args.limit, model = %args.model, output_dir = %args.output_dir, "Parsed CLI arguments");

    match run(args).await {
        Ok(Outcome::Completed {
            path,
            article_count,
            stats,
        }) => {
            info!(
                path = %path.display(),
                article_count,
                words = stats.words,
                characters = stats.characters,
                paragraphs = stats.paragraphs,
                reading_minutes = stats.reading_minutes,
                "Essay draft ready for review"
            );
            info!(elapsed = ?start_time.elapsed(), "Execution complete");
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoArticles) => {
            warn!("No articles found in the last 24 hours");
            warn!("This might be normal on slow news days; try widening the search query");
            info!(elapsed = ?start_time.elapsed(), "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(category = e.category(), error = %e, "Run failed");
            if let Some(hint) = e.remediation() {
                error!(%hint, "Remediation");
            }
            error!("Troubleshooting: check NEWS_API_KEY and OPENAI_API_KEY, verify the network connection, ensure the style guide file exists");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Wire up the real clients and execute one pipeline run.
async fn run(args: Cli) -> error::Result<Outcome> {
    let style_guide = draft::load_style_guide(&args.style_guide).await?;

    let source = NewsClient::new(args.news_api_key)?;
    let params = SamplingParams::new(args.model.clone(), args.temperature);
    let generator = OpenAiClient::new(args.openai_api_key, params)?;

    pipeline::run(
        &source,
        &generator,
        &style_guide,
        args.limit,
        &args.model,
        &args.output_dir,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GhostwriterError;

    #[tokio::test]
    async fn run_fails_on_missing_style_guide_before_building_clients() {
        let args = Cli::parse_from([
            "ghostwriter",
            "--style-guide",
            "/nonexistent/guide.md",
            "--news-api-key",
            "k1",
            "--openai-api-key",
            "k2",
        ]);
        let err = run(args).await.unwrap_err();
        assert!(matches!(err, GhostwriterError::StyleGuideMissing { .. }));
    }

    #[tokio::test]
    async fn run_fails_on_missing_news_credential() {
        let dir = tempfile::tempdir().unwrap();
        let guide = dir.path().join("guide.md");
        std::fs::write(&guide, "Write plainly.").unwrap();

        let mut args = Cli::parse_from([
            "ghostwriter",
            "--style-guide",
            guide.to_str().unwrap(),
            "--openai-api-key",
            "k2",
        ]);
        // the env binding may have filled this in from the test environment
        args.news_api_key = None;

        let err = run(args).await.unwrap_err();
        match err {
            GhostwriterError::MissingEnv { var } => assert_eq!(var, "NEWS_API_KEY"),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }
}
