//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::StemmerKind;
use crate::error::{LexbayesError, Result};

/// Configuration for [`BayesClassifier`](super::BayesClassifier).
///
/// Fixed for the lifetime of a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant. Must be finite and positive.
    pub smoothing: f64,
    /// Keep stop words in the default English analyzer.
    pub keep_stops: bool,
    /// Stemmer of the default English analyzer.
    pub stemmer: StemmerKind,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            keep_stops: false,
            stemmer: StemmerKind::Porter,
        }
    }
}

impl ClassifierConfig {
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_keep_stops(mut self, keep_stops: bool) -> Self {
        self.keep_stops = keep_stops;
        self
    }

    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Check the values a classifier cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(LexbayesError::invalid_config(format!(
                "smoothing must be a positive finite number, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();

        assert_eq!(config.smoothing, 1.0);
        assert!(!config.keep_stops);
        assert_eq!(config.stemmer, StemmerKind::Porter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_smoothing() {
        for smoothing in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = ClassifierConfig::default().with_smoothing(smoothing);
            assert!(matches!(
                config.validate(),
                Err(LexbayesError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_partial_json() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"keep_stops": true, "stemmer": "identity"}"#).unwrap();

        assert_eq!(config.smoothing, 1.0);
        assert!(config.keep_stops);
        assert_eq!(config.stemmer, StemmerKind::Identity);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"smoothing": 0.5}"#).unwrap();

        let config = ClassifierConfig::from_file(&path).unwrap();
        assert_eq!(config.smoothing, 0.5);

        std::fs::write(&path, r#"{"smoothing": 0}"#).unwrap();
        assert!(ClassifierConfig::from_file(&path).is_err());
    }
}
