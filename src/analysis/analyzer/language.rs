//! Language-specific analyzers.
//!
//! - [`english`] - regex tokenization, English stop words and Porter stemming

pub mod english;

pub use english::EnglishAnalyzer;
