//! Groq provider implementation.
//!
//! Groq serves open models behind an OpenAI-compatible chat-completions
//! API. The client here speaks that API directly over `reqwest` — no
//! streaming, one request per generation — which also makes it usable
//! against any other server exposing the same shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use finbuddy_model::groq::{GroqClient, GroqConfig};
//!
//! // From the GROQ_API_KEY environment variable, default model
//! let model = GroqClient::from_env()?;
//!
//! // Custom configuration
//! let custom = GroqClient::new(
//!     GroqConfig::new("gsk_...")
//!         .with_model("llama-3.1-70b-versatile")
//!         .with_timeout(std::time::Duration::from_secs(10)),
//! )?;
//! ```
//!
//! # Supported Models
//!
//! | Model | Description |
//! |-------|-------------|
//! | `llama-3.1-8b-instant` | Fast, cost-effective (default) |
//! | `llama-3.1-70b-versatile` | Most capable Llama 3.1 |

mod client;
mod config;

pub use client::GroqClient;
pub use config::{GROQ_API_BASE, GroqConfig};
