//! Chat message types and the model trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The author of a chat message.
///
/// Serialized with lowercase names, matching the wire format of
/// OpenAI-compatible chat APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The fixed behavioral instruction, sent before any conversation turns.
    System,
    /// An end-user turn.
    User,
    /// A model turn.
    Assistant,
}

/// A single role-tagged message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored this message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// A text-generation model behind a uniform async interface.
///
/// Implementations wrap a specific backend (Groq, a local server, a mock).
/// Callers hold an `Arc<dyn ChatModel>` and own its lifecycle; nothing in
/// this crate caches clients globally.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model identifier, used in logs.
    fn name(&self) -> &str;

    /// Generate a completion for an ordered list of messages.
    ///
    /// The list starts with at most one system message, followed by
    /// alternating user/assistant turns.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`](crate::ModelError) when the backend is
    /// unreachable, times out, rejects the request, or replies with a body
    /// that cannot be interpreted. Transient failures are not retried here;
    /// that decision belongs to the caller.
    async fn generate(&self, messages: &[Message]) -> Result<String>;
}
