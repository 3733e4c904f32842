//! Error types for the ghostwriter pipeline.
//!
//! Uses thiserror for derive macros. Errors fall into three categories:
//! configuration (missing credential or style guide, actionable by the user),
//! transport (HTTP-level failure talking to an external service), and
//! provider (a service answered but reported failure). Configuration errors
//! carry a remediation hint surfaced at the top level.

use thiserror::Error;

/// Main error type for a ghostwriter run.
#[derive(Error, Debug)]
pub enum GhostwriterError {
    /// A required environment credential is not set.
    #[error("{var} environment variable is not set")]
    MissingEnv { var: &'static str },

    /// The style guide file does not exist at the configured path.
    #[error("style guide not found at {path}")]
    StyleGuideMissing { path: String },

    /// An HTTP request to an external service failed outright.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// NewsAPI answered with an error envelope.
    #[error("NewsAPI error: {message}")]
    NewsApi { message: String },

    /// The model provider rejected or failed the completion request.
    #[error("model provider error: {message}")]
    Provider { message: String },

    /// Local filesystem failure (output directory, draft write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GhostwriterError {
    /// A remediation hint for configuration errors, `None` otherwise.
    pub fn remediation(&self) -> Option<String> {
        match self {
            GhostwriterError::MissingEnv { var } => Some(format!(
                "export {var} or add it to your .env file; see README.md for obtaining keys"
            )),
            GhostwriterError::StyleGuideMissing { path } => Some(format!(
                "create the style guide at {path} or point --style-guide at an existing file"
            )),
            _ => None,
        }
    }

    /// Short category name used in top-level diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            GhostwriterError::MissingEnv { .. } | GhostwriterError::StyleGuideMissing { .. } => {
                "configuration"
            }
            GhostwriterError::Transport(_) => "transport",
            GhostwriterError::NewsApi { .. } | GhostwriterError::Provider { .. } => "provider",
            GhostwriterError::Io(_) => "io",
        }
    }

    /// Every failure exits with status 1; success and the no-articles
    /// early exit use status 0.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for ghostwriter operations.
pub type Result<T> = std::result::Result<T, GhostwriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_is_configuration_with_hint() {
        let err = GhostwriterError::MissingEnv {
            var: "NEWS_API_KEY",
        };
        assert_eq!(err.category(), "configuration");
        assert!(err.remediation().unwrap().contains("NEWS_API_KEY"));
        assert_eq!(err.to_string(), "NEWS_API_KEY environment variable is not set");
    }

    #[test]
    fn style_guide_missing_names_the_path() {
        let err = GhostwriterError::StyleGuideMissing {
            path: "config/style_guide_longform.md".to_string(),
        };
        assert_eq!(err.category(), "configuration");
        assert!(err.to_string().contains("config/style_guide_longform.md"));
        assert!(err.remediation().is_some());
    }

    #[test]
    fn provider_errors_have_no_remediation() {
        let err = GhostwriterError::Provider {
            message: "rate limited".to_string(),
        };
        assert_eq!(err.category(), "provider");
        assert!(err.remediation().is_none());
    }

    #[test]
    fn news_api_error_surfaces_message() {
        let err = GhostwriterError::NewsApi {
            message: "Your API key is invalid".to_string(),
        };
        assert_eq!(err.to_string(), "NewsAPI error: Your API key is invalid");
        assert_eq!(err.category(), "provider");
    }

    #[test]
    fn all_failures_exit_nonzero() {
        let err = GhostwriterError::NewsApi {
            message: "x".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
