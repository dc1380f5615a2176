//! Token filters that transform token streams.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lowercase;

pub use lowercase::LowercaseFilter;

/// Trait for filters that transform a token stream.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
