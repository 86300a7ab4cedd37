//! Mock chat model for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::chat::{ChatModel, Message};
use crate::error::{ModelError, Result};

enum Behavior {
    Reply(String),
    Timeout,
}

/// A deterministic chat model that replies from a canned script.
///
/// Counts every `generate` call, so tests can assert that a code path did
/// (or did not) reach the model.
///
/// # Example
///
/// ```rust,ignore
/// use finbuddy_model::{ChatModel, MockChatModel, Message};
///
/// let model = MockChatModel::replying("Profit fell 2% year over year.");
/// let reply = model.generate(&[Message::user("What was profit?")]).await?;
/// assert_eq!(model.calls(), 1);
/// ```
pub struct MockChatModel {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockChatModel {
    /// A model that always returns the given reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self { behavior: Behavior::Reply(reply.into()), calls: AtomicUsize::new(0) }
    }

    /// A model whose every call fails with [`ModelError::Timeout`].
    pub fn timing_out() -> Self {
        Self { behavior: Behavior::Timeout, calls: AtomicUsize::new(0) }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _messages: &[Message]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Timeout => Err(ModelError::Timeout { provider: "mock".into() }),
        }
    }
}
