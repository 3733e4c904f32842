//! Draft output: style-guide loading, metadata header, file writing, and
//! post-hoc text statistics.
//!
//! Each run produces exactly one markdown file in the output directory,
//! named with the run timestamp and never mutated afterwards. The metadata
//! header records generation time, article count, and model name between
//! `---` fences, ahead of the generated text.

use crate::error::{GhostwriterError, Result};
use chrono::Local;
use std::fs as stdfs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Assumed reading speed for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Simple statistics over a generated text, for console reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftStats {
    /// Whitespace-delimited tokens.
    pub words: usize,
    /// Unicode characters, not bytes.
    pub characters: usize,
    /// Non-blank blocks separated by blank lines.
    pub paragraphs: usize,
    /// Estimated reading time in whole minutes.
    pub reading_minutes: usize,
}

impl DraftStats {
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            words,
            characters: text.chars().count(),
            paragraphs: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
            reading_minutes: words / WORDS_PER_MINUTE,
        }
    }
}

/// Load the style guide from its configured path.
///
/// A missing file is a configuration error with a remediation hint; any
/// other read failure surfaces as an I/O error.
#[instrument(level = "info")]
pub async fn load_style_guide(path: &str) -> Result<String> {
    match fs::read_to_string(path).await {
        Ok(text) => {
            info!(bytes = text.len(), "Loaded writing style guide");
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(GhostwriterError::StyleGuideMissing {
            path: path.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Render the metadata header placed ahead of the generated text.
pub fn metadata_header(generated_at: &str, article_count: usize, model: &str) -> String {
    format!(
        "---\nGenerated: {generated_at}\nArticles: {article_count}\nModel: {model}\n---\n\n"
    )
}

/// Ensure the output directory exists and is writable.
///
/// Creates the directory if needed, then probes writability by creating and
/// deleting a throwaway file.
#[instrument(level = "info", skip_all, fields(path = %path))]
async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    // Small sync probe write (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    Ok(())
}

/// Write the generated essay to a timestamped markdown file.
///
/// Returns the path of the written draft.
#[instrument(level = "info", skip(essay), fields(output_dir = %output_dir))]
pub async fn write(
    essay: &str,
    article_count: usize,
    model: &str,
    output_dir: &str,
) -> Result<PathBuf> {
    ensure_writable_dir(output_dir).await?;

    let now = Local::now();
    let path = PathBuf::from(output_dir).join(format!(
        "essay_{}.md",
        now.format("%Y-%m-%d_%H%M%S")
    ));
    let header = metadata_header(
        &now.format("%Y-%m-%d %H:%M:%S").to_string(),
        article_count,
        model,
    );

    fs::write(&path, format!("{header}{essay}")).await?;
    info!(path = %path.display(), "Wrote essay draft");
    Ok(path)
}
