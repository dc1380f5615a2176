//! Dense pairwise cosine similarity.
//!
//! The matrix is built once per catalog snapshot and never mutated. Rows are
//! computed independently, so construction parallelizes over disjoint row
//! slices of the output buffer.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RecomendaError, Result};
use crate::vector::neighbor::NeighborIndex;
use crate::vector::sparse::SparseVector;

/// Cosine similarity of two sparse vectors.
///
/// Defined as 0.0 when either vector has zero norm, and clamped to [0, 1].
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    cosine_with_norms(a, a.norm(), b, b.norm())
}

fn cosine_with_norms(a: &SparseVector, norm_a: f64, b: &SparseVector, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Square, symmetric matrix of cosine similarities indexed by catalog id.
///
/// The diagonal is 1.0 for every entry with a non-zero vector and 0.0 for
/// entries without any term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major `size * size` values.
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the matrix, spreading rows over the rayon pool.
    pub fn compute(vectors: &[SparseVector]) -> Self {
        Self::compute_with(vectors, true)
    }

    /// Compute the matrix, optionally on the calling thread only.
    pub fn compute_with(vectors: &[SparseVector], parallel: bool) -> Self {
        let size = vectors.len();
        let norms: Vec<f64> = vectors.iter().map(SparseVector::norm).collect();
        let mut values = vec![0.0; size * size];

        let fill_row = |(i, row): (usize, &mut [f64])| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if i == j {
                    if norms[i] > 0.0 { 1.0 } else { 0.0 }
                } else {
                    cosine_with_norms(&vectors[i], norms[i], &vectors[j], norms[j])
                };
            }
        };

        if size > 0 {
            if parallel {
                values.par_chunks_mut(size).enumerate().for_each(fill_row);
            } else {
                values.chunks_mut(size).enumerate().for_each(fill_row);
            }
        }

        SimilarityMatrix { size, values }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between entries `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// One row of the matrix.
    pub fn row(&self, id: usize) -> Option<&[f64]> {
        if id < self.size {
            Some(&self.values[id * self.size..(id + 1) * self.size])
        } else {
            None
        }
    }

    /// `(id, score)` for every column of row `id`, the entry itself included.
    pub fn similarities_of(&self, id: usize) -> Result<Vec<(usize, f64)>> {
        let row = self.row(id).ok_or_else(|| {
            RecomendaError::invalid_argument(format!(
                "id {id} out of range for {} entries",
                self.size
            ))
        })?;

        Ok(row.iter().copied().enumerate().collect())
    }
}

impl NeighborIndex for SimilarityMatrix {
    fn len(&self) -> usize {
        self.size
    }

    fn similarities_of(&self, id: usize) -> Result<Vec<(usize, f64)>> {
        SimilarityMatrix::similarities_of(self, id)
    }

    fn name(&self) -> &'static str {
        "dense_cosine"
    }
}
