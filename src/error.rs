//! Error types for faqsplit.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for faqsplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while splitting documents.
///
/// Parsing a document only ever fails with [`Error::UnreadableDocument`];
/// structural oddities inside a readable document produce fewer records
/// instead of errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be opened at all (missing, not a DOCX
    /// package, corrupt container or XML).
    #[error("Unreadable document {}: {reason}", path.display())]
    UnreadableDocument { path: PathBuf, reason: String },

    /// A configured stop-section pattern is not a valid regular expression.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::UnreadableDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
