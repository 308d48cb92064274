//! Stemming token filter and stemmer implementations.

use serde::{Deserialize, Serialize};

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod porter;

pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// Selects one of the bundled stemmers by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// English Porter stemmer.
    #[default]
    Porter,
    /// Leave words unchanged.
    Identity,
}

impl StemmerKind {
    /// Build the stemmer this kind names.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Box::new(PorterStemmer::new()),
            StemmerKind::Identity => Box::new(IdentityStemmer::new()),
        }
    }
}

/// Filter that applies stemming to tokens.
pub struct StemFilter {
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        Self::with_stemmer(Box::new(PorterStemmer::new()))
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Create a stem filter for a bundled stemmer.
    pub fn from_kind(kind: StemmerKind) -> Self {
        Self::with_stemmer(kind.build())
    }

    /// Name of the wrapped stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let stem = self.stemmer.stem(&token.text);
                    token.with_text(stem)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("running", 0),
            Token::new("flies", 1),
            Token::new("cats", 2).stop(),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "cats"); // Stopped tokens are not processed
    }

    #[test]
    fn test_stemmer_kind() {
        assert_eq!(StemFilter::from_kind(StemmerKind::Porter).stemmer_name(), "porter");
        assert_eq!(
            StemFilter::from_kind(StemmerKind::Identity).stemmer_name(),
            "identity"
        );
        assert_eq!(StemmerKind::default(), StemmerKind::Porter);

        let kind: StemmerKind = serde_json::from_str("\"identity\"").unwrap();
        assert_eq!(kind, StemmerKind::Identity);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
