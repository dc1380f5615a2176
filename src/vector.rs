//! Vector space model and similarity structures.
//!
//! - [`tfidf`] fits a TF-IDF [`VectorSpace`] over composite texts.
//! - [`similarity`] builds the dense pairwise cosine [`SimilarityMatrix`].
//! - [`neighbor`] is the lookup seam the recommender reads through.

pub mod neighbor;
pub mod similarity;
pub mod sparse;
pub mod tfidf;

pub use neighbor::NeighborIndex;
pub use similarity::{SimilarityMatrix, cosine_similarity};
pub use sparse::SparseVector;
pub use tfidf::{VectorSpace, VectorSpaceModel};
