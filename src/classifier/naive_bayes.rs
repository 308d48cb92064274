//! Naive Bayes count accumulator and scorer.
//!
//! [`NaiveBayes`] knows nothing about text: it folds feature vectors into
//! per-class counts and scores feature vectors against them. The document
//! and vocabulary bookkeeping lives in
//! [`BayesClassifier`](super::BayesClassifier).
//!
//! Counts are smoothed in two places. A class starts with a total of one
//! before its first example, and a feature starts at `1 + smoothing` the
//! first time it is seen for a class. A feature never seen for a class is
//! scored with `smoothing` as its count, so every logarithm receives a
//! strictly positive argument.

use ahash::AHashMap;

use crate::classifier::features::FeatureVector;
use crate::classifier::types::Classification;
use crate::error::{LexbayesError, Result};

/// Seed of the global example counter.
const INITIAL_TOTAL_EXAMPLES: u64 = 1;

/// Baseline class total established before the first example of a class.
const CLASS_TOTAL_BASELINE: u64 = 1;

#[derive(Debug, Clone)]
struct ClassCounts {
    label: String,
    total: u64,
    features: AHashMap<usize, f64>,
}

impl ClassCounts {
    fn new(label: &str) -> Self {
        ClassCounts {
            label: label.to_string(),
            total: CLASS_TOTAL_BASELINE,
            features: AHashMap::new(),
        }
    }
}

/// Per-class feature counts and totals.
///
/// Classes are enumerated in the order they were first seen, which is also
/// the order ties keep in [`get_classifications`](Self::get_classifications).
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    classes: Vec<ClassCounts>,
    class_index: AHashMap<String, usize>,
    total_examples: u64,
    smoothing: f64,
}

impl NaiveBayes {
    /// Create an empty model with the given additive smoothing constant.
    ///
    /// The constant must be finite and strictly positive.
    pub fn new(smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(LexbayesError::invalid_config(format!(
                "smoothing must be a positive finite number, got {smoothing}"
            )));
        }

        Ok(NaiveBayes {
            classes: Vec::new(),
            class_index: AHashMap::new(),
            total_examples: INITIAL_TOTAL_EXAMPLES,
            smoothing,
        })
    }

    /// Fold one example into the counts of `label`.
    ///
    /// The global example counter moves by exactly one per call, however
    /// many features the example has. Only a dense example raises the class
    /// total; a sparse one touches its feature counts alone.
    pub fn add_example(&mut self, features: &FeatureVector, label: &str) {
        let slot = match self.class_index.get(label) {
            Some(&slot) => slot,
            None => {
                let slot = self.classes.len();
                self.classes.push(ClassCounts::new(label));
                self.class_index.insert(label.to_string(), slot);
                slot
            }
        };

        self.total_examples += 1;

        let smoothing = self.smoothing;
        let class = &mut self.classes[slot];
        if let FeatureVector::Dense(_) = features {
            class.total += 1;
        }
        for index in features.active_indices() {
            class
                .features
                .entry(index)
                .and_modify(|count| *count += 1.0)
                .or_insert(1.0 + smoothing);
        }
    }

    /// Unnormalized posterior `P(c) * P(d|c)` of `label` for `features`.
    ///
    /// The likelihood is accumulated in log space and converted back before
    /// the prior is applied. A label the model has never seen is scored
    /// like a class holding only its baseline total.
    pub fn probability_of_class(&self, features: &FeatureVector, label: &str) -> f64 {
        let class = self.class_index.get(label).map(|&slot| &self.classes[slot]);
        let class_total = class.map_or(CLASS_TOTAL_BASELINE, |c| c.total) as f64;

        let log_likelihood: f64 = features
            .active_indices()
            .into_iter()
            .map(|index| {
                let count = class
                    .and_then(|c| c.features.get(&index).copied())
                    .unwrap_or(self.smoothing);
                (count / class_total).ln()
            })
            .sum();

        let class_ratio = class_total / self.total_examples as f64;
        class_ratio * log_likelihood.exp()
    }

    /// Score every known class, highest value first.
    ///
    /// The sort is stable: classes with equal values keep the order in which
    /// they were first trained.
    pub fn get_classifications(&self, features: &FeatureVector) -> Vec<Classification> {
        let mut classifications: Vec<Classification> = self
            .classes
            .iter()
            .map(|class| Classification {
                label: class.label.clone(),
                value: self.probability_of_class(features, &class.label),
            })
            .collect();

        classifications.sort_by(|a, b| b.value.total_cmp(&a.value));
        classifications
    }

    /// Label of the best-scoring class.
    pub fn classify(&self, features: &FeatureVector) -> Result<String> {
        self.get_classifications(features)
            .into_iter()
            .next()
            .map(|classification| classification.label)
            .ok_or_else(|| LexbayesError::untrained("no class has been trained yet"))
    }

    /// Drop every class and reset the example counter to its seed.
    pub fn reset(&mut self) {
        self.classes.clear();
        self.class_index.clear();
        self.total_examples = INITIAL_TOTAL_EXAMPLES;
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Examples folded in so far, plus the seed of one.
    pub fn total_examples(&self) -> u64 {
        self.total_examples
    }

    /// Class total of `label`: its example count plus the baseline of one.
    pub fn class_total(&self, label: &str) -> Option<u64> {
        self.class_index
            .get(label)
            .map(|&slot| self.classes[slot].total)
    }

    /// Recorded count of feature `index` for `label`, if any.
    pub fn feature_count(&self, label: &str, index: usize) -> Option<f64> {
        self.class_index
            .get(label)
            .and_then(|&slot| self.classes[slot].features.get(&index).copied())
    }

    /// Number of distinct features recorded for `label`.
    pub fn feature_len(&self, label: &str) -> usize {
        self.class_index
            .get(label)
            .map_or(0, |&slot| self.classes[slot].features.len())
    }

    /// Labels in first-trained order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|class| class.label.as_str())
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn is_trained(&self) -> bool {
        !self.classes.is_empty()
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        NaiveBayes {
            classes: Vec::new(),
            class_index: AHashMap::new(),
            total_examples: INITIAL_TOTAL_EXAMPLES,
            smoothing: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(values: &[u8]) -> FeatureVector {
        FeatureVector::Dense(values.to_vec())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_add_example_initializes_and_increments() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1, 0, 1]), "pos");

        assert_eq!(model.total_examples(), 2);
        assert_eq!(model.class_total("pos"), Some(2));
        assert_eq!(model.feature_count("pos", 0), Some(2.0));
        assert_eq!(model.feature_count("pos", 1), None);
        assert_eq!(model.feature_count("pos", 2), Some(2.0));

        model.add_example(&dense(&[1, 1, 0]), "pos");

        assert_eq!(model.total_examples(), 3);
        assert_eq!(model.class_total("pos"), Some(3));
        assert_eq!(model.feature_count("pos", 0), Some(3.0));
        assert_eq!(model.feature_count("pos", 1), Some(2.0));
        assert_eq!(model.feature_count("pos", 2), Some(2.0));
    }

    #[test]
    fn test_first_count_uses_smoothing() {
        let mut model = NaiveBayes::new(0.5).unwrap();
        model.add_example(&dense(&[0, 1]), "a");

        assert_eq!(model.feature_count("a", 1), Some(1.5));
    }

    #[test]
    fn test_examples_without_features_still_count() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[]), "a");
        model.add_example(&dense(&[0, 0, 0]), "a");

        assert_eq!(model.total_examples(), 3);
        assert_eq!(model.class_total("a"), Some(3));
        assert_eq!(model.feature_len("a"), 0);
    }

    #[test]
    fn test_sparse_examples() {
        let mut model = NaiveBayes::default();
        model.add_example(&FeatureVector::Sparse(vec![7, 3, 7]), "a");

        // the class keeps its baseline total; only the global counter moves
        assert_eq!(model.class_total("a"), Some(1));
        assert_eq!(model.total_examples(), 2);
        assert_eq!(model.feature_count("a", 7), Some(3.0));
        assert_eq!(model.feature_count("a", 3), Some(2.0));

        let dense_score = model.probability_of_class(&dense(&[0, 0, 0, 1]), "a");
        let sparse_score = model.probability_of_class(&FeatureVector::Sparse(vec![3]), "a");
        assert_close(dense_score, sparse_score);
    }

    #[test]
    fn test_sparse_then_dense_class_total() {
        let mut model = NaiveBayes::default();
        model.add_example(&FeatureVector::Sparse(vec![3]), "a");
        assert_eq!(model.class_total("a"), Some(1));

        model.add_example(&dense(&[0, 0, 0, 1]), "a");
        assert_eq!(model.class_total("a"), Some(2));
        assert_eq!(model.total_examples(), 3);
        assert_eq!(model.feature_count("a", 3), Some(3.0));
    }

    #[test]
    fn test_prior_for_featureless_document() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1, 0]), "a");
        model.add_example(&dense(&[1, 0]), "a");
        model.add_example(&dense(&[0, 1]), "b");

        // totals: a = 3, b = 2, examples = 4
        assert_eq!(model.probability_of_class(&dense(&[0, 0]), "a"), 3.0 / 4.0);
        assert_eq!(model.probability_of_class(&dense(&[]), "b"), 2.0 / 4.0);
    }

    #[test]
    fn test_unseen_feature_uses_smoothing_floor() {
        let mut model = NaiveBayes::new(0.25).unwrap();
        model.add_example(&dense(&[1, 0]), "a");

        // feature 1 was never seen for "a": count falls back to 0.25
        let score = model.probability_of_class(&dense(&[0, 1]), "a");
        let expected = (2.0 / 2.0) * (0.25_f64 / 2.0);
        assert_close(score, expected);
        assert!(score > 0.0);
    }

    #[test]
    fn test_probability_matches_closed_form() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1, 1, 0]), "a");
        model.add_example(&dense(&[1, 0, 1]), "a");
        model.add_example(&dense(&[0, 0, 1]), "b");

        // a: total 3, f0 = 3, f1 = 2, f2 = 2; examples = 4
        let score = model.probability_of_class(&dense(&[1, 1, 0]), "a");
        assert_close(score, (3.0 / 4.0) * (3.0 / 3.0) * (2.0 / 3.0));

        // b: total 2, f2 = 2, f0 and f1 unseen
        let score = model.probability_of_class(&dense(&[1, 1, 0]), "b");
        assert_close(score, (2.0 / 4.0) * (1.0 / 2.0) * (1.0 / 2.0));
    }

    #[test]
    fn test_unknown_label_scores_as_baseline_class() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1]), "a");

        assert_close(model.probability_of_class(&dense(&[1]), "zzz"), 1.0 / 2.0);
        assert_eq!(model.class_total("zzz"), None);
    }

    #[test]
    fn test_classifications_sorted_descending() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1, 0, 0]), "a");
        model.add_example(&dense(&[0, 1, 0]), "b");
        model.add_example(&dense(&[0, 1, 0]), "b");
        model.add_example(&dense(&[0, 0, 1]), "c");

        let ranked = model.get_classifications(&dense(&[0, 1, 0]));

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].label, "b");
        for pair in ranked.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        assert_eq!(model.classify(&dense(&[0, 1, 0])).unwrap(), "b");
    }

    #[test]
    fn test_ties_keep_training_order() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1]), "first");
        model.add_example(&dense(&[1]), "second");

        let ranked = model.get_classifications(&dense(&[1]));
        assert_eq!(ranked[0].value, ranked[1].value);
        assert_eq!(ranked[0].label, "first");
        assert_eq!(ranked[1].label, "second");
    }

    #[test]
    fn test_classify_untrained() {
        let model = NaiveBayes::default();

        let err = model.classify(&dense(&[])).unwrap_err();
        assert!(err.is_untrained());
        assert!(model.get_classifications(&dense(&[])).is_empty());
    }

    #[test]
    fn test_invalid_smoothing() {
        assert!(NaiveBayes::new(0.0).is_err());
        assert!(NaiveBayes::new(-1.0).is_err());
        assert!(NaiveBayes::new(f64::NAN).is_err());
        assert!(NaiveBayes::new(f64::INFINITY).is_err());
        assert_eq!(NaiveBayes::new(2.0).unwrap().smoothing(), 2.0);
    }

    #[test]
    fn test_reset() {
        let mut model = NaiveBayes::default();
        model.add_example(&dense(&[1]), "a");
        model.reset();

        assert!(!model.is_trained());
        assert_eq!(model.num_classes(), 0);
        assert_eq!(model.total_examples(), 1);
        assert_eq!(model.labels().count(), 0);
    }
}
