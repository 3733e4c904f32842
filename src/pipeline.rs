//! Run orchestration: fetch, compose, generate, write.
//!
//! The pipeline is a straight line with one early exit: an empty fetch result
//! is a normal termination, not an error, and must not touch the generator.
//! Any failure aborts the run and propagates to the top level; there are no
//! retries and no backward transitions.

use crate::draft::{self, DraftStats};
use crate::error::Result;
use crate::generator::CompletionClient;
use crate::news::ArticleSource;
use crate::prompt;
use std::path::PathBuf;
use tracing::{info, instrument};

/// How a run ended, short of an error.
#[derive(Debug)]
pub enum Outcome {
    /// A draft was generated and written.
    Completed {
        path: PathBuf,
        article_count: usize,
        stats: DraftStats,
    },
    /// The fetch returned nothing; the generator was never invoked.
    NoArticles,
}

/// Execute one full run of the pipeline.
#[instrument(level = "info", skip_all, fields(limit = limit, model = %model))]
pub async fn run<S, C>(
    source: &S,
    generator: &C,
    style_guide: &str,
    limit: u32,
    model: &str,
    output_dir: &str,
) -> Result<Outcome>
where
    S: ArticleSource,
    C: CompletionClient,
{
    let articles = source.fetch(limit).await?;
    if articles.is_empty() {
        info!("No articles found in the last 24 hours; nothing to write");
        return Ok(Outcome::NoArticles);
    }

    info!(count = articles.len(), "Fetched articles");
    for (i, article) in articles.iter().take(5).enumerate() {
        info!(n = i + 1, title = %article.title, "Recent headline");
    }
    if articles.len() > 5 {
        info!(more = articles.len() - 5, "Additional headlines omitted");
    }

    let composed = prompt::compose(style_guide, &articles);
    info!(prompt_bytes = composed.len(), "Composed generation prompt");

    let essay = generator.complete(&composed).await?;

    let path = draft::write(&essay, articles.len(), model, output_dir).await?;
    let stats = DraftStats::from_text(&essay);

    Ok(Outcome::Completed {
        path,
        article_count: articles.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use std::cell::RefCell;

    struct FakeSource {
        articles: Vec<Article>,
    }

    impl ArticleSource for FakeSource {
        async fn fetch(&self, _limit: u32) -> Result<Vec<Article>> {
            Ok(self.articles.clone())
        }
    }

    struct FakeGenerator {
        essay: &'static str,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeGenerator {
        fn returning(essay: &'static str) -> Self {
            Self {
                essay,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl CompletionClient for FakeGenerator {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.essay.to_string())
        }
    }

    fn articles(n: usize) -> Vec<Article> {
        (1..=n)
            .map(|i| Article {
                title: format!("Headline {i}"),
                description: format!("Summary {i}"),
                url: format!("https://example.com/{i}"),
                source: "Example Wire".to_string(),
                published_at: "2025-11-02T08:00:00Z".to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn empty_fetch_short_circuits_without_generating() {
        let source = FakeSource { articles: vec![] };
        let generator = FakeGenerator::returning("should never be produced");
        let dir = tempfile::tempdir().unwrap();

        let outcome = run(
            &source,
            &generator,
            "Write plainly.",
            10,
            "gpt-4o",
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, Outcome::NoArticles));
        assert!(generator.prompts.borrow().is_empty());
        // no draft file either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn full_run_writes_draft_and_reports_stats() {
        let source = FakeSource {
            articles: articles(3),
        };
        let generator = FakeGenerator::returning("First paragraph here.\n\nSecond one.");
        let dir = tempfile::tempdir().unwrap();

        let outcome = run(
            &source,
            &generator,
            "Write plainly.",
            10,
            "gpt-4o",
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        match outcome {
            Outcome::Completed {
                path,
                article_count,
                stats,
            } => {
                assert_eq!(article_count, 3);
                assert_eq!(stats.paragraphs, 2);
                assert_eq!(stats.words, 5);
                let contents = std::fs::read_to_string(path).unwrap();
                assert!(contents.contains("Articles: 3"));
                assert!(contents.ends_with("First paragraph here.\n\nSecond one."));
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generator_receives_the_composed_prompt() {
        let source = FakeSource {
            articles: articles(2),
        };
        let generator = FakeGenerator::returning("Essay.");
        let dir = tempfile::tempdir().unwrap();

        run(
            &source,
            &generator,
            "Voice: measured.",
            10,
            "gpt-4o",
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap();

        let prompts = generator.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Article 1: Headline 1"));
        assert!(prompts[0].contains("Article 2: Headline 2"));
        assert!(prompts[0].contains("Voice: measured."));
        assert!(prompts[0].contains("YOUR TASK:"));
    }

    #[tokio::test]
    async fn fetch_failure_aborts_the_run() {
        struct FailingSource;
        impl ArticleSource for FailingSource {
            async fn fetch(&self, _limit: u32) -> Result<Vec<Article>> {
                Err(crate::error::GhostwriterError::NewsApi {
                    message: "apiKeyInvalid".to_string(),
                })
            }
        }

        let generator = FakeGenerator::returning("Essay.");
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &FailingSource,
            &generator,
            "Guide.",
            10,
            "gpt-4o",
            dir.path().to_str().unwrap(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.category(), "provider");
        assert!(generator.prompts.borrow().is_empty());
    }
}
