//! Training data loading and classifier construction helpers.

use std::path::Path;

use crate::classifier::bayes::BayesClassifier;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::types::TrainingSample;
use crate::error::{LexbayesError, Result};

/// Load labeled training samples from a JSON file.
///
/// The file holds either a JSON array of `{"label": ..., "text": ...}`
/// records or one such record per line (blank lines are ignored).
pub fn load_training_samples<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    parse_training_samples(&content)
}

/// Parse training samples from an in-memory JSON array or JSON-lines text.
pub fn parse_training_samples(content: &str) -> Result<Vec<TrainingSample>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line).map_err(|e| {
                LexbayesError::invalid_argument(format!(
                    "line {}: invalid training sample: {e}",
                    number + 1
                ))
            })
        })
        .collect()
}

/// Create a classifier from `config`, add every sample in order and train
/// once.
pub fn new_trained(config: ClassifierConfig, samples: &[TrainingSample]) -> Result<BayesClassifier> {
    let mut classifier = BayesClassifier::with_config(config)?;
    for sample in samples {
        classifier.add_document(sample.text.as_str(), &sample.label)?;
    }
    classifier.train();
    Ok(classifier)
}
