//! Error types for cellgate_io crate.
//!
//! Covers reading DNA and reports from disk and writing masks, usage
//! tables and analysis summaries.

use cellgate_data::CircuitError;
use thiserror::Error;

/// Main error type for cellgate_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed text input
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid circuit data
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for cellgate_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Parse error at a 1-based line number.
    #[must_use]
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
