//! # Lexbayes
//!
//! A multinomial-style Naive Bayes text classifier over stemmed
//! bag-of-words features.
//!
//! ## Features
//!
//! - Incremental training over an append-only document log
//! - Pluggable text analysis pipeline with a Porter stemmer
//! - Log-space likelihoods with additive smoothing
//! - JSON and JSON-lines training data

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, StandardAnalyzer};
    pub use crate::classifier::{
        BayesClassifier, Classification, ClassifierConfig, DocumentInput, FeatureVector,
    };
    pub use crate::error::{LexbayesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
