//! Standard analyzer used to vectorize composite movie text.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\b\w\w+\b`)
//! 2. LowercaseFilter
//!
//! No stop words are removed; common words are damped by the inverse document
//! frequency instead.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// The default analyzer: TF-IDF word tokenization with lowercasing.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let terms = analyzer
            .terms("Action Adventure Science Fiction culture clash, future I")
            .unwrap();

        assert_eq!(
            terms,
            vec!["action", "adventure", "science", "fiction", "culture", "clash", "future"]
        );
    }

    #[test]
    fn test_empty_text() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert!(analyzer.terms("").unwrap().is_empty());
        assert!(analyzer.terms("  , . !").unwrap().is_empty());
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert_eq!(analyzer.name(), "standard");
        assert_eq!(analyzer.inner().name(), "standard");
    }
}
