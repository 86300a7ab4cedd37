//! Question-answering pipeline orchestrator.
//!
//! The [`DocQaPipeline`] coordinates the full upload-and-ask workflow by
//! composing an [`EmbeddingProvider`], a [`ChatModel`], and a [`Chunker`].
//! Ingesting a document produces a [`SessionIndex`]; answering runs
//! embed → search → resolve → compose against it.
//!
//! # Example
//!
//! ```rust,ignore
//! use finbuddy_rag::{DocQaPipeline, RagConfig};
//!
//! let pipeline = DocQaPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedder(Arc::new(my_embedder))
//!     .chat_model(Arc::new(my_model))
//!     .build()?;
//!
//! let session = pipeline.ingest(&document).await?;
//! let answer = pipeline.answer(&session, "What was profit?").await;
//! ```

use std::sync::Arc;

use tracing::{error, info};

use finbuddy_model::ChatModel;

use crate::chunking::{Chunker, SentenceChunker};
use crate::composer::AnswerComposer;
use crate::config::RagConfig;
use crate::document::{Answer, Document, Retrieved};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract;
use crate::index::FlatIndex;
use crate::session::SessionIndex;

/// The question-answering pipeline.
///
/// Holds the injected collaborators and configuration; the per-document
/// state lives in the [`SessionIndex`] values it produces, owned by the
/// caller. Construct one via [`DocQaPipeline::builder()`].
pub struct DocQaPipeline {
    config: RagConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    chunker: Arc<dyn Chunker>,
    composer: AnswerComposer,
}

impl DocQaPipeline {
    /// Create a new [`DocQaPipelineBuilder`].
    pub fn builder() -> DocQaPipelineBuilder {
        DocQaPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Ingest one document: extract → chunk → embed → index.
    ///
    /// Returns the session owning the chunks and their index as one unit.
    /// A document with no extractable text yields an empty session — a
    /// valid "nothing to retrieve" state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::PipelineError`] if the embedding collaborator
    /// fails or the embeddings cannot be indexed.
    pub async fn ingest(&self, document: &Document) -> Result<SessionIndex> {
        // 1. Extract cleaned text
        let text = extract::extract(document);
        if text.trim().is_empty() {
            info!(chunk_count = 0, "ingested document with no extractable text");
            return Ok(SessionIndex::empty());
        }

        // 2. Chunk
        let chunks = self.chunker.chunk(&text);
        if chunks.is_empty() {
            info!(chunk_count = 0, "document produced no chunks");
            return Ok(SessionIndex::empty());
        }

        // 3. Embed all chunks in one batch
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let vectors = self.embedder.embed_batch(&texts).await.map_err(|e| {
            error!(error = %e, "embedding failed during ingestion");
            RagError::PipelineError(format!("embedding failed during ingestion: {e}"))
        })?;

        // 4. Index
        let index = FlatIndex::build(vectors).map_err(|e| {
            error!(error = %e, "index build failed");
            RagError::PipelineError(format!("index build failed: {e}"))
        })?;

        let chunk_count = chunks.len();
        let session = SessionIndex::new(chunks, index);
        info!(chunk_count, "ingested document");

        Ok(session)
    }

    /// Retrieve the `top_k` chunks nearest to `query`.
    ///
    /// An empty session yields an empty result — the normal "nothing to
    /// retrieve" outcome, reached without calling any collaborator. A
    /// failure of the embedding collaborator is returned as an error,
    /// never conflated with the empty case.
    pub async fn retrieve(&self, session: &SessionIndex, query: &str) -> Result<Vec<Retrieved>> {
        if session.is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = self.embedder.embed(query).await.map_err(|e| {
            error!(error = %e, "embedding failed during retrieval");
            RagError::PipelineError(format!("query embedding failed: {e}"))
        })?;

        let neighbors = session.search(&query_vector, self.config.top_k);
        let retrieved = session.resolve(neighbors);
        info!(result_count = retrieved.len(), "retrieval completed");

        Ok(retrieved)
    }

    /// Answer `query` from the session's document.
    ///
    /// Never fails: an empty retrieval produces the fixed no-relevant-text
    /// message, and collaborator failures degrade to a readable error
    /// answer. The caller always gets something to show.
    pub async fn answer(&self, session: &SessionIndex, query: &str) -> Answer {
        let retrieved = match self.retrieve(session, query).await {
            Ok(retrieved) => retrieved,
            Err(err) => {
                error!(error = %err, "retrieval failed");
                return Answer {
                    text: format!("Error generating answer: {err}"),
                    sections: Vec::new(),
                };
            }
        };

        self.composer.compose(query, &retrieved).await
    }
}

/// Builder for constructing a [`DocQaPipeline`].
///
/// `config`, `embedder`, and `chat_model` are required; the chunker
/// defaults to sentence-aware splitting at the configured chunk size.
#[derive(Default)]
pub struct DocQaPipelineBuilder {
    config: Option<RagConfig>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    chat: Option<Arc<dyn ChatModel>>,
    chunker: Option<Arc<dyn Chunker>>,
}

impl DocQaPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the chat model used for answer generation.
    pub fn chat_model(mut self, chat: Arc<dyn ChatModel>) -> Self {
        self.chat = Some(chat);
        self
    }

    /// Set the document chunker. Defaults to a [`SentenceChunker`] at the
    /// configured `max_chunk_size`.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Build the [`DocQaPipeline`], validating that all required fields
    /// are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if a required field is missing.
    pub fn build(self) -> Result<DocQaPipeline> {
        let config =
            self.config.ok_or_else(|| RagError::ConfigError("config is required".to_string()))?;
        let embedder = self
            .embedder
            .ok_or_else(|| RagError::ConfigError("embedder is required".to_string()))?;
        let chat =
            self.chat.ok_or_else(|| RagError::ConfigError("chat model is required".to_string()))?;
        let chunker = self
            .chunker
            .unwrap_or_else(|| Arc::new(SentenceChunker::new(config.max_chunk_size)));

        Ok(DocQaPipeline { config, embedder, chunker, composer: AnswerComposer::new(chat) })
    }
}
