//! Text analysis for the similarity engine.
//!
//! Composite movie text is broken into terms by an [`analyzer::Analyzer`]: a
//! tokenizer followed by a chain of token filters. The default analyzer
//! reproduces the conventional TF-IDF tokenization (runs of two or more word
//! characters, lower-cased), so vector spaces fitted here are comparable with
//! the ones produced by common TF-IDF toolkits.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
