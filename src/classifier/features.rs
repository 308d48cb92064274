//! Feature representations accepted by the count accumulator and scorer.

use serde::{Deserialize, Serialize};

/// Features of one document.
///
/// `Dense` is the positional presence vector aligned to the vocabulary at
/// the time it was built. `Sparse` carries the values of a keyed feature
/// mapping: each value is a feature index, and a repeated index counts once
/// per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureVector {
    Dense(Vec<u8>),
    Sparse(Vec<usize>),
}

impl FeatureVector {
    /// Indices of the features present in this document.
    pub fn active_indices(&self) -> Vec<usize> {
        match self {
            FeatureVector::Dense(values) => values
                .iter()
                .enumerate()
                .filter(|(_, value)| **value != 0)
                .map(|(index, _)| index)
                .collect(),
            FeatureVector::Sparse(indices) => indices.clone(),
        }
    }

    /// Number of positions (dense) or entries (sparse).
    pub fn len(&self) -> usize {
        match self {
            FeatureVector::Dense(values) => values.len(),
            FeatureVector::Sparse(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for FeatureVector {
    fn from(values: Vec<u8>) -> Self {
        FeatureVector::Dense(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_active_indices() {
        let features = FeatureVector::from(vec![1, 0, 0, 1, 1]);

        assert_eq!(features.active_indices(), vec![0, 3, 4]);
        assert_eq!(features.len(), 5);
    }

    #[test]
    fn test_sparse_active_indices_keep_repeats() {
        let features = FeatureVector::Sparse(vec![4, 2, 4]);

        assert_eq!(features.active_indices(), vec![4, 2, 4]);
        assert!(!features.is_empty());
    }

    #[test]
    fn test_empty_features() {
        assert!(FeatureVector::Dense(vec![]).is_empty());
        assert!(FeatureVector::Dense(vec![0, 0]).active_indices().is_empty());
    }
}
