//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the tokenizer/stemmer collaborator of the classifier:
//! it turns raw text into the ordered sequence of stems that feeds the
//! vocabulary and the feature vectors.
//!
//! ```text
//! Raw Text → Analyzer → stems → Vocabulary / Feature Vector
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use lexbayes::analysis::analyzer::{Analyzer, EnglishAnalyzer};
//!
//! let analyzer = EnglishAnalyzer::new().unwrap();
//! let stems = analyzer.tokenize_and_stem("The cats are running").unwrap();
//!
//! assert_eq!(stems, vec!["cat", "run"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens, otherwise trained counts and inference vectors drift apart.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze `text` and keep the texts of the surviving tokens, in order.
    ///
    /// Tokens a filter marked as stopped are dropped here.
    fn tokenize_and_stem(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}
