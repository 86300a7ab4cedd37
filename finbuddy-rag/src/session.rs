//! The per-document session: chunks and index owned as one unit.

use tracing::warn;

use crate::document::{Chunk, Retrieved};
use crate::index::{FlatIndex, Neighbor};

/// The retrievable state for one uploaded document.
///
/// Owns the chunk sequence and the vector index together so the two can
/// never drift apart: they are constructed as a unit, with one indexed
/// vector per chunk in chunk order, and a new upload replaces the whole
/// value. There are no partial updates.
#[derive(Debug, Clone, Default)]
pub struct SessionIndex {
    chunks: Vec<Chunk>,
    index: FlatIndex,
}

impl SessionIndex {
    /// A session with no retrievable content.
    ///
    /// The normal state for uploads with no extractable text; retrieval
    /// over it yields no results rather than an error.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(chunks: Vec<Chunk>, index: FlatIndex) -> Self {
        debug_assert_eq!(chunks.len(), index.len(), "one indexed vector per chunk");
        Self { chunks, index }
    }

    /// The document's chunks, in document order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Whether the session has nothing to retrieve.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub(crate) fn search(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        self.index.search(query, k)
    }

    /// Map index neighbors back to chunks, assigning ranks in result order.
    ///
    /// The chunk list and index are built together, so an out-of-range
    /// position is an internal bug: asserted in development builds,
    /// skipped with a warning in release.
    pub(crate) fn resolve(&self, neighbors: Vec<Neighbor>) -> Vec<Retrieved> {
        let mut retrieved = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            debug_assert!(
                neighbor.position < self.chunks.len(),
                "index position out of chunk range"
            );
            let Some(chunk) = self.chunks.get(neighbor.position) else {
                warn!(
                    position = neighbor.position,
                    chunks = self.chunks.len(),
                    "discarding out-of-range index position"
                );
                continue;
            };
            retrieved.push(Retrieved {
                chunk: chunk.clone(),
                rank: retrieved.len(),
                distance: neighbor.distance,
            });
        }
        retrieved
    }
}
