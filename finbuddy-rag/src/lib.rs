//! # finbuddy-rag
//!
//! Retrieval-augmented question answering over a single uploaded document.
//!
//! ## Overview
//!
//! An uploaded document flows through extraction, chunking, embedding, and
//! indexing into a [`SessionIndex`]; questions are answered by retrieving
//! the nearest chunks and grounding a language-model completion on them:
//!
//! ```text
//! Document ─→ extract ─→ chunk ─→ embed ─→ FlatIndex ─┐
//!                                                     │ SessionIndex
//! question ─→ embed ─→ search ─→ resolve ─→ compose ─┘
//! ```
//!
//! The embedding model and the language model are collaborators injected
//! behind the [`EmbeddingProvider`] and [`ChatModel`](finbuddy_model::ChatModel)
//! traits; everything else is in-process. The session's chunks, vectors,
//! and index live and die as one value — a new upload replaces the whole
//! thing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finbuddy_model::groq::GroqClient;
//! use finbuddy_rag::{
//!     DocQaPipeline, Document, DocumentKind, OpenAiEmbeddingProvider, RagConfig,
//! };
//!
//! let pipeline = DocQaPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedder(Arc::new(OpenAiEmbeddingProvider::from_env()?))
//!     .chat_model(Arc::new(GroqClient::from_env()?))
//!     .build()?;
//!
//! let document = Document::new(DocumentKind::Pdf, std::fs::read("report.pdf")?);
//! let session = pipeline.ingest(&document).await?;
//! let answer = pipeline.answer(&session, "How did revenue develop?").await;
//! println!("{}", answer.text);
//! ```

pub mod chunking;
pub mod composer;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod index;
pub mod openai;
pub mod pipeline;
pub mod session;

pub use chunking::{
    Chunker, FixedWindowChunker, PunctuationSegmenter, SentenceChunker, SentenceSegmenter,
};
pub use composer::{AnswerComposer, NO_RELEVANT_TEXT_MESSAGE};
pub use config::RagConfig;
pub use document::{Answer, Chunk, Document, DocumentKind, Retrieved};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use index::{FlatIndex, Neighbor};
pub use openai::OpenAiEmbeddingProvider;
pub use pipeline::{DocQaPipeline, DocQaPipelineBuilder};
pub use session::SessionIndex;
