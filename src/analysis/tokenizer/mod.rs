//! Tokenizers split raw text into tokens.
//!
//! Tokenization is the first step of the analysis pipeline. Only the
//! regex-based tokenizer ships with the crate; anything else can be plugged
//! in by implementing [`Tokenizer`].
//!
//! # Examples
//!
//! ```
//! use lexbayes::analysis::tokenizer::Tokenizer;
//! use lexbayes::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("I love cats!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared behind an
/// `Arc` by several analyzers.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexbayes::analysis::token::{Token, TokenStream};
/// use lexbayes::analysis::tokenizer::Tokenizer;
/// use lexbayes::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
