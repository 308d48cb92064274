//! Command line argument parsing for the lexbayes CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierConfig;
use crate::error::Result;

/// Lexbayes - Naive Bayes text classification over stemmed words
#[derive(Parser, Debug, Clone)]
#[command(name = "lexbayes")]
#[command(about = "Train a Naive Bayes text classifier and classify documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexbayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXBAYES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additive smoothing constant (overrides the config file)
    #[arg(short, long)]
    pub smoothing: Option<f64>,

    /// Keep stop words when analyzing text
    #[arg(long)]
    pub keep_stops: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexbayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the classifier configuration: the config file (or the
    /// defaults), then the command line overrides.
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::from_file(path)?,
            None => ClassifierConfig::default(),
        };

        if let Some(smoothing) = self.smoothing {
            config.smoothing = smoothing;
        }
        if self.keep_stops {
            config.keep_stops = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a file and classify one or more texts
    Classify(ClassifyArgs),

    /// Show the stems and presence vector of a text
    Features(FeaturesArgs),

    /// Show model statistics after training
    Stats(StatsArgs),
}

/// Arguments for classifying texts
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training file (JSON array or JSON lines of {"label", "text"})
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Show the ranked list of every class
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for showing document features
#[derive(Parser, Debug, Clone)]
pub struct FeaturesArgs {
    /// Training file (JSON array or JSON lines of {"label", "text"})
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Text to vectorize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Training file (JSON array or JSON lines of {"label", "text"})
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
