//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline. They split raw text
//! into [`Token`](crate::analysis::token::Token)s which are then rewritten by
//! token filters.
//!
//! # Examples
//!
//! ```
//! use recomenda::analysis::tokenizer::Tokenizer;
//! use recomenda::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Science Fiction, space war").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod regex;

pub use self::regex::RegexTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a built engine can be shared across
/// threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
