//! Groq chat client implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::config::GroqConfig;
use crate::chat::{ChatModel, Message};
use crate::error::{ModelError, Result};

const PROVIDER: &str = "Groq";

/// Chat client for Groq's OpenAI-compatible API.
///
/// Holds one `reqwest::Client` with the configured request deadline; a
/// call that exceeds it surfaces as [`ModelError::Timeout`] so the caller
/// can tell "collaborator unavailable" apart from a rejected request.
#[derive(Debug)]
pub struct GroqClient {
    client: reqwest::Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingApiKey`] if the key is empty, or
    /// [`ModelError::Request`] if the HTTP client cannot be constructed.
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ModelError::MissingApiKey("GROQ_API_KEY".into()));
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build().map_err(|e| {
            ModelError::Request {
                provider: PROVIDER.into(),
                message: format!("failed to build HTTP client: {e}"),
            }
        })?;

        Ok(Self { client, config })
    }

    /// Create a client using the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ModelError::MissingApiKey("GROQ_API_KEY".into()))?;
        Self::new(GroqConfig::new(api_key))
    }
}

// ── Groq API request/response types ────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// ── ChatModel implementation ───────────────────────────────────────

#[async_trait]
impl ChatModel for GroqClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String> {
        debug!(
            provider = PROVIDER,
            model = %self.config.model,
            turns = messages.len(),
            "sending chat request"
        );

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest { model: &self.config.model, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(provider = PROVIDER, "chat request timed out");
                    ModelError::Timeout { provider: PROVIDER.into() }
                } else {
                    error!(provider = PROVIDER, error = %e, "chat request failed");
                    ModelError::Request { provider: PROVIDER.into(), message: e.to_string() }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            error!(provider = PROVIDER, status, "chat API error");
            return Err(ModelError::Api { provider: PROVIDER.into(), status, message: detail });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER, error = %e, "failed to parse chat response");
            ModelError::InvalidResponse {
                provider: PROVIDER.into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        parsed.choices.into_iter().next().and_then(|c| c.message.content).ok_or_else(|| {
            ModelError::InvalidResponse {
                provider: PROVIDER.into(),
                message: "response contained no choices".into(),
            }
        })
    }
}
