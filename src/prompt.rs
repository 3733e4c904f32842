//! Prompt composition for essay generation.
//!
//! Pure string assembly, no network or file access: the composed prompt is a
//! deterministic function of the style guide and the article sequence. The
//! layout is a preamble, the numbered article digest, the full style-guide
//! text, and a fixed task-instruction block covering voice, essay arc,
//! forbidden stylistic elements, and title constraints.

use crate::models::Article;

/// System message sent alongside every completion request.
pub const SYSTEM_PROMPT: &str = "You are a thoughtful essayist who writes with depth and \
intellectual integrity. You follow the provided style guide exactly.";

/// Fixed task instructions appended after the style guide.
const TASK_INSTRUCTIONS: &str = r#"YOUR TASK:
Write a thoughtful, 1200-1500 word essay that synthesizes these smart glasses developments.

CRITICAL REQUIREMENTS:
1. Follow the style guide EXACTLY - this is non-negotiable
2. Voice: Measured, reflective, quietly authoritative ("thinking honestly in public")
3. Structure: Do NOT start with a thesis. Circle the idea first with observations or tensions
4. Epistemic Hospitality: Accessible without jargon. Use cognitive pressure reducers like "You don't need to know the term..."
5. Essay Arc: Recognition -> Normalization -> Reframing -> Deepening -> Open Ending
6. One metaphor per paragraph maximum (metaphors are environments, not transitions)
7. Avoid: bullet points, numbered lists, exclamation points, statistics, urgent language, satisfying conclusions
8. Core throughline: "Modern life has optimized away the conditions required for depth"
9. End with reframing, NOT resolution or prescriptions

TITLE REQUIREMENTS:
- Create tension, don't promise outcomes
- No numbers, no "how to", no urgency
- Examples: "The [Abstract Noun] of [Condition]" or "Why [Group] [Quiet Truth]"

Generate the complete essay now, starting with the title:"#;

/// Render articles as a numbered digest for the prompt.
///
/// Each entry becomes an `Article N:` block carrying title, source, summary,
/// and URL, in input order.
pub fn format_articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No articles available.".to_string();
    }
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| {
            format!(
                "Article {}: {}\nSource: {}\nSummary: {}\nURL: {}",
                i + 1,
                a.title,
                a.source,
                a.description,
                a.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Compose the full generation prompt from the style guide and articles.
pub fn compose(style_guide: &str, articles: &[Article]) -> String {
    format!(
        "You are writing a Substack essay about recent developments in the smart glasses \
and AR/XR ecosystem.\n\n\
RECENT ARTICLES (Last 24 Hours):\n{}\n\n\
WRITING STYLE GUIDE:\n{}\n\n\
{}",
        format_articles(articles),
        style_guide,
        TASK_INSTRUCTIONS
    )
}
