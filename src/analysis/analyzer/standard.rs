//! Standard analyzer: tokenization and normalization without stemming.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\w+`)
//! 2. LowercaseFilter
//! 3. StopFilter (33 common English stop words)
//!
//! Suitable when documents are in a language the Porter rules do not cover
//! but which still separates words with spaces.
//!
//! # Examples
//!
//! ```
//! use lexbayes::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let stems = analyzer.tokenize_and_stem("Hello the worlds and tests").unwrap();
//!
//! assert_eq!(stems, vec!["hello", "worlds", "tests"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A standard analyzer with lowercase and stop word filtering.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a new standard analyzer without stop word filtering.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard_no_stop");

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let stems = analyzer.tokenize_and_stem("Hello the world and test").unwrap();

        assert_eq!(stems, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_standard_analyzer_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words().unwrap();

        let stems = analyzer.tokenize_and_stem("Hello the World").unwrap();

        assert_eq!(stems, vec!["hello", "the", "world"]);
    }
}
