//! # finbuddy-model
//!
//! Language-model integrations for FinBuddy.
//!
//! ## Overview
//!
//! This crate defines the [`ChatModel`] trait — the boundary behind which
//! every text-generation backend lives — along with the message types that
//! cross it. Currently supports:
//!
//! - [`GroqClient`](groq::GroqClient) - Groq's OpenAI-compatible API
//!   (Llama 3.1 family and other hosted open models)
//! - [`MockChatModel`] - Deterministic model for tests and offline runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finbuddy_model::{ChatModel, Message};
//! use finbuddy_model::groq::GroqClient;
//!
//! let model = GroqClient::from_env()?;
//! let reply = model
//!     .generate(&[
//!         Message::system("You are a financial assistant."),
//!         Message::user("What is a bond ladder?"),
//!     ])
//!     .await?;
//! ```
//!
//! ## Design
//!
//! Clients are plain values constructed by the caller and injected where a
//! model is needed (`Arc<dyn ChatModel>`); there is no process-wide client
//! state. Every call returns a [`Result`] with a typed [`ModelError`], so
//! timeouts and API rejections are distinguishable at the call site.

mod chat;
mod error;
pub mod groq;
pub mod mock;

pub use chat::{ChatModel, Message, Role};
pub use error::{ModelError, Result};
pub use mock::MockChatModel;
