//! Similarity lookup seam.
//!
//! The recommender reads similarities through [`NeighborIndex`] rather than
//! the dense matrix directly. A catalog too large or too volatile for an
//! O(n²) rebuild can plug in an approximate index here without touching
//! [`SimilarityMatrix`](crate::vector::similarity::SimilarityMatrix).

use std::fmt::Debug;

use crate::error::Result;

/// Read-only similarity lookup by catalog id.
pub trait NeighborIndex: Send + Sync + Debug {
    /// Number of indexed entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(id, score)` pairs for the entry `id`, in catalog order.
    ///
    /// The row may include `id` itself; excluding it is the caller's job.
    fn similarities_of(&self, id: usize) -> Result<Vec<(usize, f64)>>;

    /// Name of this index implementation.
    fn name(&self) -> &'static str;
}
