//! Naive Bayes bag-of-words text classification.
//!
//! Documents are added with a label, reduced to stems by an
//! [`Analyzer`](crate::analysis::analyzer::Analyzer) and recorded in an
//! append-only log. Training folds the untrained tail of the log into
//! per-class feature counts. Inference ranks every trained class by its
//! unnormalized posterior.
//!
//! - [`Vocabulary`]: distinct stems in first-seen order
//! - [`FeatureVector`]: dense presence vector or sparse feature indices
//! - [`NaiveBayes`]: count accumulator and scorer
//! - [`BayesClassifier`]: document log, training cursor and orchestration

pub mod bayes;
pub mod config;
pub mod features;
pub mod naive_bayes;
pub mod training;
pub mod types;
pub mod vocabulary;

pub use bayes::BayesClassifier;
pub use config::ClassifierConfig;
pub use features::FeatureVector;
pub use naive_bayes::NaiveBayes;
pub use training::{load_training_samples, new_trained, parse_training_samples};
pub use types::{
    ClassSummary, Classification, DocumentInput, LabeledDocument, ModelStats, TrainingSample,
};
pub use vocabulary::Vocabulary;
