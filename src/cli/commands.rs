//! Command implementations for the lexbayes CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::classifier::{BayesClassifier, ClassifierConfig, load_training_samples, new_trained};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: LexbayesArgs) -> Result<()> {
    let config = args.classifier_config()?;
    debug!("classifier config: {config:?}");

    match &args.command {
        Command::Classify(classify_args) => classify_texts(classify_args, config, &args),
        Command::Features(features_args) => show_features(features_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
    }
}

/// Load a training file and train a classifier on it.
fn train_from_file(path: &Path, config: ClassifierConfig) -> Result<BayesClassifier> {
    let samples = load_training_samples(path)
        .with_context(|| format!("failed to load training data from {}", path.display()))?;
    info!(
        "loaded {} training samples from {}",
        samples.len(),
        path.display()
    );
    new_trained(config, &samples)
}

/// Train on a file and classify each text.
fn classify_texts(
    args: &ClassifyArgs,
    config: ClassifierConfig,
    cli_args: &LexbayesArgs,
) -> Result<()> {
    let start_time = Instant::now();
    let classifier = train_from_file(&args.training_file, config)?;

    let mut results = Vec::with_capacity(args.texts.len());
    for text in &args.texts {
        let label = classifier.classify(text)?;
        let classifications = if args.all {
            Some(classifier.get_classifications(text)?)
        } else {
            None
        };
        results.push(ClassifyResult {
            text: text.clone(),
            label,
            classifications,
        });
    }

    output_result(
        "Classification results",
        &ClassifyResults {
            results,
            trained_documents: classifier.trained_cursor(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show the stems and presence vector of a text against the trained
/// vocabulary.
fn show_features(
    args: &FeaturesArgs,
    config: ClassifierConfig,
    cli_args: &LexbayesArgs,
) -> Result<()> {
    let classifier = train_from_file(&args.training_file, config)?;

    let stems = classifier.analyzer().tokenize_and_stem(&args.text)?;
    let features = classifier.doc_to_features(stems.clone())?;

    output_result(
        "Document features",
        &FeaturesResult {
            text: args.text.clone(),
            stems,
            vocabulary: classifier.vocabulary().iter().map(String::from).collect(),
            features,
        },
        cli_args,
    )
}

/// Show model statistics.
fn show_stats(args: &StatsArgs, config: ClassifierConfig, cli_args: &LexbayesArgs) -> Result<()> {
    let classifier = train_from_file(&args.training_file, config)?;
    output_result("Model statistics", &classifier.stats(), cli_args)
}
