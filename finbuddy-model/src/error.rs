//! Error types for the `finbuddy-model` crate.

use thiserror::Error;

/// Errors that can occur when calling a chat model backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The backend did not respond within the configured deadline.
    #[error("Model timeout ({provider}): no response within the request deadline")]
    Timeout {
        /// The backend that timed out.
        provider: String,
    },

    /// The backend rejected the request.
    #[error("Model API error ({provider}): {status}: {message}")]
    Api {
        /// The backend that produced the error.
        provider: String,
        /// The HTTP status code returned.
        status: u16,
        /// The error message reported by the backend.
        message: String,
    },

    /// The request could not be sent or the connection failed.
    #[error("Model request error ({provider}): {message}")]
    Request {
        /// The backend the request was addressed to.
        provider: String,
        /// A description of the transport failure.
        message: String,
    },

    /// The backend returned a body this crate could not interpret.
    #[error("Model response error ({provider}): {message}")]
    InvalidResponse {
        /// The backend that produced the response.
        provider: String,
        /// A description of what was malformed.
        message: String,
    },

    /// A required API key was missing or empty.
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
