//! Common types for the classifier.

use serde::{Deserialize, Serialize};

/// A document handed to the classifier: raw text to be analyzed, or a
/// sequence of stems that is used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    /// Raw text, tokenized and stemmed by the classifier's analyzer.
    Text(String),
    /// Pre-tokenized stems, never re-analyzed.
    Stems(Vec<String>),
}

impl DocumentInput {
    /// Zero-length text or an empty stem sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            DocumentInput::Text(text) => text.is_empty(),
            DocumentInput::Stems(stems) => stems.is_empty(),
        }
    }
}

impl From<&str> for DocumentInput {
    fn from(text: &str) -> Self {
        DocumentInput::Text(text.to_string())
    }
}

impl From<String> for DocumentInput {
    fn from(text: String) -> Self {
        DocumentInput::Text(text)
    }
}

impl From<&String> for DocumentInput {
    fn from(text: &String) -> Self {
        DocumentInput::Text(text.clone())
    }
}

impl From<Vec<String>> for DocumentInput {
    fn from(stems: Vec<String>) -> Self {
        DocumentInput::Stems(stems)
    }
}

impl From<Vec<&str>> for DocumentInput {
    fn from(stems: Vec<&str>) -> Self {
        DocumentInput::Stems(stems.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for DocumentInput {
    fn from(stems: &[&str]) -> Self {
        DocumentInput::Stems(stems.iter().map(|s| s.to_string()).collect())
    }
}

/// A document in the classifier's log, stored after stemming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Class label.
    pub label: String,
    /// Ordered stems of the document.
    pub stems: Vec<String>,
}

/// One entry of a ranked classification list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Class label.
    pub label: String,
    /// Unnormalized posterior, only meaningful relative to other classes.
    pub value: f64,
}

/// Training record read from a JSON or JSON-lines file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Class label.
    pub label: String,
    /// Document text.
    pub text: String,
}

/// Per-class summary in [`ModelStats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub label: String,
    /// Dense examples trained plus the smoothing baseline of one.
    pub total: u64,
    /// Number of distinct features recorded for the class.
    pub features: usize,
}

/// Snapshot of a classifier's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub documents: usize,
    pub trained_documents: usize,
    pub vocabulary_size: usize,
    pub total_examples: u64,
    pub smoothing: f64,
    pub classes: Vec<ClassSummary>,
}
