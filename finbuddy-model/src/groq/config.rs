//! Configuration for the Groq client.

use std::time::Duration;

/// Base URL of Groq's OpenAI-compatible API.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// The default chat model.
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default request deadline for a single generation call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`GroqClient`](super::GroqClient).
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// The API key used as a bearer token.
    pub api_key: String,
    /// The model name sent with every request.
    pub model: String,
    /// The API base URL. Override to target another OpenAI-compatible server.
    pub base_url: String,
    /// Per-request deadline. Calls exceeding it fail with a timeout error.
    pub timeout: Duration,
}

impl GroqConfig {
    /// Create a configuration with the given API key and default
    /// model, base URL, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            base_url: GROQ_API_BASE.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the model name (e.g. `llama-3.1-70b-versatile`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL, for OpenAI-compatible servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_groq() {
        let config = GroqConfig::new("gsk_test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, GROQ_API_BASE);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_overrides_apply() {
        let config = GroqConfig::new("gsk_test")
            .with_model("llama-3.1-70b-versatile")
            .with_base_url("http://localhost:8000/v1")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "llama-3.1-70b-versatile");
        assert_eq!(config.base_url, "http://localhost:8000/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
