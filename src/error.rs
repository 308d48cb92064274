//! Error types for the lexbayes library.
//!
//! All errors are represented by the [`LexbayesError`] enum. The classifier
//! core has a single caller-visible failure of its own, the untrained-model
//! error raised by `classify`; the remaining variants cover analysis,
//! configuration and the I/O done by the loaders and the CLI.
//!
//! # Examples
//!
//! ```
//! use lexbayes::error::{LexbayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexbayesError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexbayes operations.
#[derive(Error, Debug)]
pub enum LexbayesError {
    /// I/O errors (reading training files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The model has no trained class to rank
    #[error("Untrained model: {0}")]
    Untrained(String),

    /// Invalid classifier configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexbayesError.
pub type Result<T> = std::result::Result<T, LexbayesError>;

impl LexbayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexbayesError::Analysis(msg.into())
    }

    /// Create a new untrained-model error.
    pub fn untrained<S: Into<String>>(msg: S) -> Self {
        LexbayesError::Untrained(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexbayesError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexbayesError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexbayesError::Other(msg.into())
    }

    /// Whether this error reports a model with no trained classes.
    pub fn is_untrained(&self) -> bool {
        matches!(self, LexbayesError::Untrained(_))
    }
}
