//! Pass-through stemmer.
//!
//! Selected with `StemmerKind::Identity` when inflected forms should stay
//! separate vocabulary entries, e.g. "cat" and "cats" count as two features.

use crate::analysis::token_filter::stem::Stemmer;

/// Stemmer that leaves every word as the preceding filters produced it.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::Filter;
    use crate::analysis::token_filter::stem::{StemFilter, StemmerKind};

    #[test]
    fn test_inflections_stay_distinct() {
        let stemmer = IdentityStemmer::new();

        assert_ne!(stemmer.stem("cat"), stemmer.stem("cats"));
        assert_eq!(stemmer.stem("running"), "running");
    }

    #[test]
    fn test_selected_by_kind() {
        let filter = StemFilter::from_kind(StemmerKind::Identity);
        assert_eq!(filter.stemmer_name(), "identity");

        let tokens = vec![Token::new("loving", 0), Token::new("cats", 1)];
        let stems: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|token| token.text)
            .collect();

        assert_eq!(stems, vec!["loving", "cats"]);
    }
}
