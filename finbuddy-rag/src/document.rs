//! Data types for documents, chunks, and answers.

use serde::{Deserialize, Serialize};

/// The declared format of an uploaded document.
///
/// Extraction dispatches on this closed set; there is no MIME-string
/// sniffing anywhere downstream of the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A PDF file. Text is pulled per page from the text layer.
    Pdf,
    /// UTF-8 text taken verbatim (plain text, CSV, markdown, ...).
    PlainText,
}

/// An uploaded document: raw bytes plus their declared kind.
///
/// Consumed once by [`extract`](crate::extract::extract) when a session is
/// built, then discarded.
#[derive(Debug, Clone)]
pub struct Document {
    /// The declared format of `bytes`.
    pub kind: DocumentKind,
    /// The raw uploaded bytes.
    pub bytes: Vec<u8>,
}

impl Document {
    /// Create a document from raw bytes and their declared kind.
    pub fn new(kind: DocumentKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self { kind, bytes: bytes.into() }
    }
}

/// A bounded text unit cut from the document — the atomic retrieval and
/// citation unit.
///
/// Chunks are immutable once produced and collectively preserve document
/// order; no chunk is empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based position within the document's chunk sequence.
    pub ordinal: usize,
    /// The chunk text.
    pub text: String,
}

/// A chunk returned from retrieval, paired with its rank and distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieved {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Rank among the results; 0 is the nearest neighbor.
    pub rank: usize,
    /// Squared Euclidean distance between the query and chunk vectors.
    pub distance: f32,
}

/// A generated answer with the sections that grounded it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The user-facing answer text, traceability footer included.
    pub text: String,
    /// 1-based section numbers cited, ascending. Empty when no document
    /// context contributed (nothing retrieved, or generation failed).
    pub sections: Vec<usize>,
}
