//! Document-level Naive Bayes classifier.

use std::sync::Arc;

use log::{debug, info, trace};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::classifier::config::ClassifierConfig;
use crate::classifier::features::FeatureVector;
use crate::classifier::naive_bayes::NaiveBayes;
use crate::classifier::types::{
    ClassSummary, Classification, DocumentInput, LabeledDocument, ModelStats,
};
use crate::classifier::vocabulary::Vocabulary;
use crate::error::Result;

/// A text classifier over stemmed bag-of-words presence features.
///
/// Documents are added to a log and grow the vocabulary immediately, but
/// only reach the class counts on the next [`train`](Self::train). Each
/// document's feature vector is built at that moment against the vocabulary
/// as it then stands, so documents trained early carry fewer features than
/// the vocabulary later holds.
///
/// A classifier is single-threaded state; share one across threads only
/// behind an external lock.
///
/// # Examples
///
/// ```
/// use lexbayes::classifier::BayesClassifier;
///
/// let mut classifier = BayesClassifier::new().unwrap();
/// classifier.add_documents(["i love cats", "i love dogs"], "pos").unwrap();
/// classifier.add_documents(["i hate cats", "i hate dogs"], "neg").unwrap();
/// classifier.train();
///
/// assert_eq!(classifier.classify("i love parrots").unwrap(), "pos");
/// assert_eq!(classifier.classify("i hate parrots").unwrap(), "neg");
/// ```
pub struct BayesClassifier {
    analyzer: Arc<dyn Analyzer>,
    config: ClassifierConfig,
    documents: Vec<LabeledDocument>,
    vocabulary: Vocabulary,
    model: NaiveBayes,
    last_trained: usize,
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .field("documents", &self.documents.len())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("last_trained", &self.last_trained)
            .finish()
    }
}

impl BayesClassifier {
    /// Create a classifier with the default configuration and the English
    /// analyzer.
    pub fn new() -> Result<Self> {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier whose English analyzer follows `config`.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        let analyzer = Arc::new(EnglishAnalyzer::with_options(
            config.keep_stops,
            config.stemmer,
        )?);
        Self::with_analyzer(config, analyzer)
    }

    /// Create a classifier with a custom tokenize-and-stem analyzer.
    /// `keep_stops` and `stemmer` of `config` are ignored in that case.
    pub fn with_analyzer(config: ClassifierConfig, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        config.validate()?;
        let model = NaiveBayes::new(config.smoothing)?;

        Ok(BayesClassifier {
            analyzer,
            config,
            documents: Vec::new(),
            vocabulary: Vocabulary::new(),
            model,
            last_trained: 0,
        })
    }

    fn stems_of(&self, doc: DocumentInput) -> Result<Vec<String>> {
        match doc {
            DocumentInput::Text(text) => self.analyzer.tokenize_and_stem(&text),
            DocumentInput::Stems(stems) => Ok(stems),
        }
    }

    /// Append a labeled document to the log and add its stems to the
    /// vocabulary. Empty documents are skipped without error.
    pub fn add_document<D: Into<DocumentInput>>(&mut self, doc: D, label: &str) -> Result<()> {
        let doc = doc.into();
        if doc.is_empty() {
            trace!("skipping empty document for label {label:?}");
            return Ok(());
        }

        let stems = self.stems_of(doc)?;
        self.vocabulary.extend(&stems);
        self.documents.push(LabeledDocument {
            label: label.to_string(),
            stems,
        });
        Ok(())
    }

    /// Add each document in order under the same label.
    pub fn add_documents<I, D>(&mut self, docs: I, label: &str) -> Result<()>
    where
        I: IntoIterator<Item = D>,
        D: Into<DocumentInput>,
    {
        for doc in docs {
            self.add_document(doc, label)?;
        }
        Ok(())
    }

    /// Presence vector of `doc` over the current vocabulary.
    pub fn doc_to_features<D: Into<DocumentInput>>(&self, doc: D) -> Result<Vec<u8>> {
        let stems = self.stems_of(doc.into())?;
        Ok(self.vocabulary.presence_vector(&stems))
    }

    /// Fold every document added since the previous call into the class
    /// counts and return how many were trained. Calling it again with no new
    /// documents changes nothing.
    pub fn train(&mut self) -> usize {
        let total = self.documents.len();
        let start = self.last_trained;

        for (index, doc) in self.documents.iter().enumerate().skip(start) {
            let features = FeatureVector::Dense(self.vocabulary.presence_vector(&doc.stems));
            self.model.add_example(&features, &doc.label);
            self.last_trained = index + 1;
            debug!(
                "trained document {}/{} with label {:?}",
                index + 1,
                total,
                doc.label
            );
        }

        let trained = total - start;
        if trained > 0 {
            info!(
                "trained {} documents ({} classes, vocabulary of {})",
                trained,
                self.model.num_classes(),
                self.vocabulary.len()
            );
        }
        trained
    }

    /// Discard all class counts and train again over the whole document log
    /// against the current vocabulary. No document is removed.
    pub fn retrain(&mut self) -> usize {
        self.model.reset();
        self.last_trained = 0;
        info!("retraining over {} documents", self.documents.len());
        self.train()
    }

    /// Unnormalized posterior of `label` for `doc`.
    pub fn probability_of_class<D: Into<DocumentInput>>(&self, doc: D, label: &str) -> Result<f64> {
        let features = FeatureVector::Dense(self.doc_to_features(doc)?);
        Ok(self.model.probability_of_class(&features, label))
    }

    /// Every trained class scored against `doc`, highest value first.
    pub fn get_classifications<D: Into<DocumentInput>>(
        &self,
        doc: D,
    ) -> Result<Vec<Classification>> {
        let features = FeatureVector::Dense(self.doc_to_features(doc)?);
        Ok(self.model.get_classifications(&features))
    }

    /// Label of the best-scoring class for `doc`.
    ///
    /// Fails with [`LexbayesError::Untrained`](crate::error::LexbayesError::Untrained)
    /// while no class has been trained.
    pub fn classify<D: Into<DocumentInput>>(&self, doc: D) -> Result<String> {
        let features = FeatureVector::Dense(self.doc_to_features(doc)?);
        self.model.classify(&features)
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn documents(&self) -> &[LabeledDocument] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The underlying count tables.
    pub fn model(&self) -> &NaiveBayes {
        &self.model
    }

    /// Index of the first document not yet trained.
    pub fn trained_cursor(&self) -> usize {
        self.last_trained
    }

    pub fn total_examples(&self) -> u64 {
        self.model.total_examples()
    }

    pub fn smoothing(&self) -> f64 {
        self.model.smoothing()
    }

    /// Trained labels in first-trained order.
    pub fn classes(&self) -> Vec<String> {
        self.model.labels().map(String::from).collect()
    }

    pub fn class_total(&self, label: &str) -> Option<u64> {
        self.model.class_total(label)
    }

    pub fn feature_count(&self, label: &str, index: usize) -> Option<f64> {
        self.model.feature_count(label, index)
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            documents: self.documents.len(),
            trained_documents: self.last_trained,
            vocabulary_size: self.vocabulary.len(),
            total_examples: self.model.total_examples(),
            smoothing: self.model.smoothing(),
            classes: self
                .model
                .labels()
                .map(|label| ClassSummary {
                    label: label.to_string(),
                    total: self.model.class_total(label).unwrap_or_default(),
                    features: self.model.feature_len(label),
                })
                .collect(),
        }
    }
}
