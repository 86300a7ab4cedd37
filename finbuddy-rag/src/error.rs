//! Error types for the `finbuddy-rag` crate.

use thiserror::Error;

use finbuddy_model::ModelError;

/// Errors that can occur in the question-answering pipeline.
#[derive(Debug, Error)]
pub enum RagError {
    /// An error from the embedding collaborator.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingError {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The vector index rejected its input.
    #[error("Index error: {0}")]
    IndexError(String),

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An error in pipeline orchestration.
    #[error("Pipeline error: {0}")]
    PipelineError(String),

    /// An error propagated from the language-model collaborator.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RagError>;
