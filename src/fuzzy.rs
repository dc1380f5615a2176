//! Approximate title matching.
//!
//! Titles are compared with the Ratcliff/Obershelp sequence-matching ratio
//! ([`sequence_matcher`]) and filtered by a cutoff ([`resolver`]). "No match"
//! is an empty result, never an error.

pub mod resolver;
pub mod sequence_matcher;

pub use resolver::{
    DEFAULT_POSTER_CUTOFF, DEFAULT_PRIMARY_CUTOFF, DEFAULT_PRIMARY_MAX_MATCHES,
    FuzzyTitleResolver, TitleMatch, resolve,
};
pub use sequence_matcher::SequenceMatcher;
