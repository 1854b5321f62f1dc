//! Error types for model generation

use thiserror::Error;

/// Result type alias for generation operations
pub type ModelGenResult<T> = Result<T, ModelGenError>;

/// Error type for the generation pipeline
#[derive(Error, Debug)]
pub enum ModelGenError {
    /// Target language display name is not in the supported set
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Input file extension has no source-type mapping
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// The generate pipeline only accepts `.json` inputs
    #[error("not a JSON file: {0}")]
    NotJson(String),

    /// Input file is not valid JSON
    #[error("invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },

    /// A required free-text answer was left empty
    #[error("{0} is required")]
    MissingInput(String),

    /// User dismissed a prompt; the pipeline stops with no side effects
    #[error("generation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The external generator failed (non-zero exit or launch failure)
    #[error("generator failed: {0}")]
    Generator(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelGenError {
    /// True for errors that flip the overall run to failure (exit code 1).
    ///
    /// [`ModelGenError::Cancelled`] is deliberately excluded: a dismissed
    /// prompt is a no-op, not a failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ModelGenError::Cancelled)
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
