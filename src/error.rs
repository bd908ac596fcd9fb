//! Error types for the TokenKit library.
//!
//! Every failure the engine can report is a configuration failure: once a
//! [`TokenizerConfig`](crate::config::TokenizerConfig) has been built,
//! tokenization itself cannot fail. The I/O and JSON variants only surface
//! when options are loaded from files or through the command line.
//!
//! # Examples
//!
//! ```
//! use tokenkit::error::TokenKitError;
//!
//! let error = TokenKitError::invalid_delimiter("path_hierarchy");
//! assert_eq!(
//!     error.to_string(),
//!     "Invalid delimiter: path_hierarchy requires a non-empty delimiter"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for TokenKit operations.
#[derive(Error, Debug)]
pub enum TokenKitError {
    /// Unknown strategy name.
    #[error("Invalid strategy: unknown tokenizer strategy '{0}'")]
    InvalidStrategy(String),

    /// A regex (primary or preserve pattern) failed to compile.
    #[error("Invalid regex '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// N-gram bounds that could not be used (only when coercion is off).
    #[error(
        "Invalid n-gram configuration: min_gram ({min_gram}) must be >= 1 and <= max_gram ({max_gram})"
    )]
    InvalidNgramConfig { min_gram: usize, max_gram: usize },

    /// Empty delimiter for a delimiter-driven strategy.
    #[error("Invalid delimiter: {0} requires a non-empty delimiter")]
    InvalidDelimiter(String),

    /// A strategy was selected without a parameter it cannot work without.
    #[error("Missing required parameter: {strategy} strategy requires '{parameter}'")]
    MissingRequiredParameter {
        strategy: String,
        parameter: String,
    },

    /// I/O errors (reading option files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TokenKitError.
pub type Result<T> = std::result::Result<T, TokenKitError>;

impl TokenKitError {
    /// Create a new invalid strategy error.
    pub fn invalid_strategy<S: Into<String>>(name: S) -> Self {
        TokenKitError::InvalidStrategy(name.into())
    }

    /// Create a new invalid regex error from a pattern and the compiler's complaint.
    pub fn invalid_regex<P: Into<String>, M: ToString>(pattern: P, message: M) -> Self {
        TokenKitError::InvalidRegex {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a new n-gram bounds error.
    pub fn invalid_ngram(min_gram: usize, max_gram: usize) -> Self {
        TokenKitError::InvalidNgramConfig { min_gram, max_gram }
    }

    /// Create a new invalid delimiter error for the named strategy.
    pub fn invalid_delimiter<S: Into<String>>(strategy: S) -> Self {
        TokenKitError::InvalidDelimiter(strategy.into())
    }

    /// Create a new missing parameter error.
    pub fn missing_parameter<S: Into<String>, P: Into<String>>(strategy: S, parameter: P) -> Self {
        TokenKitError::MissingRequiredParameter {
            strategy: strategy.into(),
            parameter: parameter.into(),
        }
    }

    /// Whether this error was raised while validating a configuration.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, TokenKitError::Io(_) | TokenKitError::Json(_))
    }
}
