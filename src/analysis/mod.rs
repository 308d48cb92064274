//! Text analysis for lexbayes.
//!
//! The analysis pipeline is the tokenize-and-stem collaborator of the
//! classifier: a tokenizer splits raw text and a chain of filters
//! normalizes the tokens into stems.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::stem::StemmerKind;
pub use token_filter::{Filter, StemFilter, Stemmer};
pub use tokenizer::Tokenizer;
