//! Exact nearest-neighbor index over embedding vectors.

use tracing::warn;

use crate::error::{RagError, Result};

/// A neighbor returned from [`FlatIndex::search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the matched vector in the order given to
    /// [`FlatIndex::build`].
    pub position: usize,
    /// Squared Euclidean distance to the query vector.
    pub distance: f32,
}

/// A flat (brute-force) exact nearest-neighbor index using squared
/// Euclidean distance.
///
/// Built once from the full vector set and only ever queried afterwards;
/// there is no incremental insert or delete. Replacing the document
/// rebuilds the index from scratch, which is cheap at this scale.
#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index over the given vectors.
    ///
    /// An empty vector set builds a valid empty index whose searches
    /// return no results.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::IndexError`] if the vectors do not all share
    /// one dimension.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(RagError::IndexError(format!(
                "expected vectors of dimension {dimension}, found one of dimension {}",
                bad.len()
            )));
        }
        Ok(Self { dimension, vectors })
    }

    /// Number of indexed vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimension of the indexed vectors (0 for an empty index).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Return the `k` vectors nearest to `query`, ascending by distance,
    /// ties broken by lowest position.
    ///
    /// `k` is clamped to the number of indexed vectors. An empty index,
    /// `k == 0`, or a query of the wrong dimension yields an empty result
    /// rather than an error.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        if self.vectors.is_empty() || k == 0 {
            return Vec::new();
        }
        if query.len() != self.dimension {
            warn!(
                expected = self.dimension,
                got = query.len(),
                "query vector dimension mismatch"
            );
            return Vec::new();
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| Neighbor {
                position,
                distance: squared_distance(query, vector),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });
        neighbors.truncate(k.min(self.vectors.len()));
        neighbors
    }
}

/// Squared Euclidean distance between two equal-length vectors.
fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
