//! # Recomenda
//!
//! A content-similarity movie recommender for Rust.
//!
//! ## Features
//!
//! - TF-IDF vector space over composite catalog text
//! - Pairwise cosine similarity, computed in parallel
//! - Fuzzy title resolution for misspelled queries
//! - Poster lookup with normalization, fuzzy fallback and a placeholder
//! - CSV loaders and a command line interface

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod feature;
pub mod fuzzy;
pub mod loader;
pub mod poster;
pub mod recommend;
pub mod vector;

pub mod prelude {
    pub use crate::catalog::{Attribute, Catalog, CatalogEntry, PosterCatalog, PosterCatalogEntry};
    pub use crate::config::EngineConfig;
    pub use crate::engine::Engine;
    pub use crate::error::{RecomendaError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
