//! Feature extraction from catalog entries.

pub mod composer;

pub use composer::{DEFAULT_FEATURES, TextFeatureComposer};
