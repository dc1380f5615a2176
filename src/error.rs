//! Error types for the Recomenda library.
//!
//! All fallible operations return [`RecomendaError`] through the [`Result`]
//! alias. Two variants carry most of the domain meaning:
//!
//! - [`RecomendaError::EmptyCorpus`] is raised while building the engine when
//!   no catalog entry has any usable text. It is fatal for startup.
//! - [`RecomendaError::NotFound`] is the ordinary "no matching movie" outcome of
//!   a query. Callers branch on it instead of treating it as a fault.
//!
//! # Examples
//!
//! ```
//! use recomenda::error::{RecomendaError, Result};
//!
//! fn lookup(title: &str) -> Result<usize> {
//!     Err(RecomendaError::not_found(title))
//! }
//!
//! match lookup("zzz") {
//!     Err(e) if e.is_not_found() => println!("no matching movie found"),
//!     Err(e) => eprintln!("Error: {e}"),
//!     Ok(id) => println!("found {id}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Recomenda operations.
#[derive(Error, Debug)]
pub enum RecomendaError {
    /// The corpus produced no terms, so no vector space can be fitted.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// No catalog title is close enough to the query.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A caller supplied an out-of-range or malformed argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required input column is missing.
    #[error("Column error: {0}")]
    Column(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RecomendaError.
pub type Result<T> = std::result::Result<T, RecomendaError>;

impl RecomendaError {
    /// Create a new empty corpus error.
    pub fn empty_corpus<S: Into<String>>(msg: S) -> Self {
        RecomendaError::EmptyCorpus(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        RecomendaError::NotFound(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RecomendaError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RecomendaError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RecomendaError::Config(msg.into())
    }

    /// Create a new column error.
    pub fn column<S: Into<String>>(msg: S) -> Self {
        RecomendaError::Column(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RecomendaError::Other(msg.into())
    }

    /// Whether this is the expected per-query "no match" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecomendaError::NotFound(_))
    }
}
