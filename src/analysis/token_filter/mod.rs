//! Token filters transform the token streams produced by tokenizers.
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Stemmer → stems
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to rewrite, mark or drop tokens.
///
/// # Examples
///
/// ```
/// use lexbayes::analysis::token::{Token, TokenStream};
/// use lexbayes::analysis::token_filter::Filter;
/// use lexbayes::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
