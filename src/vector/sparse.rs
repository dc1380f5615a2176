//! Sparse vectors over a fitted vocabulary.

use serde::{Deserialize, Serialize};

/// A sparse vector stored as `(dimension, weight)` pairs sorted by dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from unsorted pairs.
    ///
    /// Pairs with the same dimension are summed and zero weights dropped.
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(dim, _)| *dim);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (dim, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == dim => *total += weight,
                _ => merged.push((dim, weight)),
            }
        }
        merged.retain(|(_, weight)| *weight != 0.0);

        SparseVector { entries: merged }
    }

    /// The all-zero vector.
    pub fn zero() -> Self {
        SparseVector::default()
    }

    /// Non-zero entries, sorted by dimension.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at one dimension.
    pub fn get(&self, dim: usize) -> f64 {
        self.entries
            .binary_search_by_key(&dim, |(d, _)| *d)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0.0)
    }

    /// Dot product by merging the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_dim, a_weight) = self.entries[i];
            let (b_dim, b_weight) = other.entries[j];
            match a_dim.cmp(&b_dim) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit L2 norm; the zero vector stays zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }

    /// Expand into a dense vector of `dimension` weights.
    pub fn to_dense(&self, dimension: usize) -> Vec<f64> {
        let mut dense = vec![0.0; dimension];
        for &(dim, weight) in &self.entries {
            if dim < dimension {
                dense[dim] = weight;
            }
        }
        dense
    }
}
