//! TF-IDF vector space over composite texts.
//!
//! Weighting is the smoothed scheme used by common TF-IDF toolkits:
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = count(t, d) * idf(t)
//! vector(d) = w(., d) / ||w(., d)||
//! ```
//!
//! Vocabulary dimensions are assigned in sorted term order, so fitting the same
//! corpus twice yields identical spaces.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::{RecomendaError, Result};
use crate::vector::sparse::SparseVector;

/// Fits [`VectorSpace`]s with a given analyzer.
#[derive(Clone)]
pub struct VectorSpaceModel {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for VectorSpaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpaceModel")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl VectorSpaceModel {
    /// Create a model using the standard analyzer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a model with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        VectorSpaceModel { analyzer }
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Fit a vector space over `corpus` and vectorize every document.
    ///
    /// Fails with [`RecomendaError::EmptyCorpus`] when no document yields a
    /// single term.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Result<VectorSpace> {
        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| self.analyzer.terms(doc.as_ref()))
            .collect::<Result<_>>()?;

        let terms: Vec<String> = documents
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if terms.is_empty() {
            return Err(RecomendaError::empty_corpus(format!(
                "none of the {} documents contains a term",
                corpus.len()
            )));
        }

        let vocabulary: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        // Document frequencies
        let mut document_frequency = vec![0usize; terms.len()];
        for tokens in &documents {
            let unique: AHashSet<usize> = tokens
                .iter()
                .filter_map(|t| vocabulary.get(t.as_str()).copied())
                .collect();
            for idx in unique {
                document_frequency[idx] += 1;
            }
        }

        let n_documents = documents.len();
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|df| ((1.0 + n_documents as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let mut space = VectorSpace {
            vocabulary,
            terms,
            idf,
            n_documents,
            vectors: Vec::new(),
            analyzer: Arc::clone(&self.analyzer),
        };
        let vectors = documents
            .iter()
            .map(|tokens| space.weigh(tokens))
            .collect();
        space.vectors = vectors;

        debug!(
            "fitted vector space: {} documents, {} terms",
            space.n_documents,
            space.dimension()
        );

        Ok(space)
    }
}

/// A fitted TF-IDF space together with the vectors of its corpus.
///
/// Vectors are only comparable within the space that produced them.
#[derive(Clone)]
pub struct VectorSpace {
    /// Term -> dimension index.
    vocabulary: AHashMap<String, usize>,
    /// Dimension index -> term.
    terms: Vec<String>,
    /// Inverse document frequency per dimension.
    idf: Vec<f64>,
    n_documents: usize,
    /// One L2-normalized vector per corpus document.
    vectors: Vec<SparseVector>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for VectorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpace")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl VectorSpace {
    /// Number of dimensions, equal to the vocabulary size.
    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents the space was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Dimension index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// All terms, indexed by dimension.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Inverse document frequency of a term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    /// The vectors of the fitted corpus, in document order.
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// The vector of one corpus document.
    pub fn vector(&self, document: usize) -> Option<&SparseVector> {
        self.vectors.get(document)
    }

    /// Project new text into this space. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let tokens = self.analyzer.terms(text)?;
        Ok(self.weigh(&tokens))
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        SparseVector::new(
            counts
                .into_iter()
                .map(|(idx, count)| (idx, count * self.idf[idx]))
                .collect(),
        )
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "Action space war".to_string(),
            "action crime heist".to_string(),
            "Romance drama".to_string(),
        ]
    }

    #[test]
    fn test_vocabulary_is_sorted_and_lowercased() {
        let space = VectorSpaceModel::new().unwrap().fit(&corpus()).unwrap();

        assert_eq!(
            space.terms(),
            &["action", "crime", "drama", "heist", "romance", "space", "war"]
        );
        assert_eq!(space.dimension(), 7);
        assert_eq!(space.n_documents(), 3);
        assert_eq!(space.term_index("space"), Some(5));
        assert_eq!(space.term_index("Action"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let space = VectorSpaceModel::new().unwrap().fit(&corpus()).unwrap();

        // "action" appears in 2 of 3 documents, "war" in 1.
        let expected_action = (4.0f64 / 3.0).ln() + 1.0;
        let expected_war = (4.0f64 / 2.0).ln() + 1.0;
        assert!((space.idf("action").unwrap() - expected_action).abs() < 1e-12);
        assert!((space.idf("war").unwrap() - expected_war).abs() < 1e-12);
        assert_eq!(space.idf("comedy"), None);
    }

    #[test]
    fn test_document_vectors_are_unit_length() {
        let space = VectorSpaceModel::new().unwrap().fit(&corpus()).unwrap();

        assert_eq!(space.vectors().len(), 3);
        for vector in space.vectors() {
            assert!((vector.norm() - 1.0).abs() < 1e-12);
        }

        // Rarer terms weigh more within the same document.
        let first = space.vector(0).unwrap();
        let action = first.get(space.term_index("action").unwrap());
        let war = first.get(space.term_index("war").unwrap());
        assert!(war > action);
    }

    #[test]
    fn test_term_frequency_counts() {
        let docs = ["war war peace", "peace"];
        let space = VectorSpaceModel::new().unwrap().fit(&docs).unwrap();

        let vector = space.vector(0).unwrap();
        let war = vector.get(space.term_index("war").unwrap());
        let peace = vector.get(space.term_index("peace").unwrap());

        let idf_war = (3.0f64 / 2.0).ln() + 1.0;
        let idf_peace = 1.0;
        let ratio = (2.0 * idf_war) / (1.0 * idf_peace);
        assert!((war / peace - ratio).abs() < 1e-12);
    }

    #[test]
    fn test_empty_documents_get_zero_vectors() {
        let docs = ["    ", "space opera"];
        let space = VectorSpaceModel::new().unwrap().fit(&docs).unwrap();

        assert!(space.vector(0).unwrap().is_zero());
        assert!(!space.vector(1).unwrap().is_zero());
    }

    #[test]
    fn test_empty_corpus() {
        let model = VectorSpaceModel::new().unwrap();

        let empty: Vec<String> = Vec::new();
        assert!(matches!(model.fit(&empty), Err(RecomendaError::EmptyCorpus(_))));

        let blank = ["", " ", "a , !"];
        assert!(matches!(model.fit(&blank), Err(RecomendaError::EmptyCorpus(_))));
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let space = VectorSpaceModel::new().unwrap().fit(&corpus()).unwrap();

        let vector = space.transform("SPACE western").unwrap();
        assert_eq!(vector.nnz(), 1);
        assert!((vector.get(space.term_index("space").unwrap()) - 1.0).abs() < 1e-12);

        assert!(space.transform("western").unwrap().is_zero());
    }
}
