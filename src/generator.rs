//! Draft generation through an OpenAI-compatible chat-completions endpoint.
//!
//! Sends the composed prompt as a single completion request with fixed
//! sampling parameters and returns the generated text untouched. Provider
//! failures (auth, rate limit, malformed request) propagate to the caller;
//! there is no retry and no parsing of the essay content itself.
//!
//! The [`CompletionClient`] trait is the seam between the pipeline and the
//! provider so tests can substitute a deterministic fake.

use crate::error::{GhostwriterError, Result};
use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

const COMPLETIONS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Output-length cap for a single essay.
const MAX_TOKENS: u32 = 4096;

/// Capability interface for text generation.
pub trait CompletionClient {
    /// Send one completion request and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Fixed sampling parameters for a run.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingParams {
    pub fn new(model: String, temperature: f32) -> Self {
        Self {
            model,
            temperature,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

impl ChatRequest {
    fn for_prompt(params: &SamplingParams, prompt: &str) -> Self {
        Self {
            model: params.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GhostwriterError::Provider {
                message: "completion response contained no choices".to_string(),
            })
    }
}

/// HTTP client for the model provider.
#[derive(Debug)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    params: SamplingParams,
}

impl OpenAiClient {
    /// Create a client from the configured credential and sampling params.
    ///
    /// Fails with a configuration error if the credential is absent. No
    /// network I/O happens here.
    pub fn new(api_key: Option<String>, params: SamplingParams) -> Result<Self> {
        let api_key = api_key.ok_or(GhostwriterError::MissingEnv {
            var: "OPENAI_API_KEY",
        })?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("ghostwriter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key,
            params,
        })
    }
}

impl CompletionClient for OpenAiClient {
    #[instrument(level = "info", skip_all)]
    async fn complete(&self, prompt: &str) -> Result<String> {
        info!(
            model = %self.params.model,
            temperature = self.params.temperature,
            prompt_bytes = prompt.len(),
            "Sending completion request (this may take 30-60 seconds)"
        );

        let body = ChatRequest::for_prompt(&self.params, prompt);
        let response = self
            .client
            .post(COMPLETIONS_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GhostwriterError::Provider {
                message: format!("{status}: {detail}"),
            });
        }

        let essay = response.json::<ChatResponse>().await?.into_text()?;
        info!(essay_bytes = essay.len(), "Completion request succeeded");
        Ok(essay)
    }
}
