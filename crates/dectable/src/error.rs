//! Error types for the dectable library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationMessage;

/// Failure to turn document text into a decision table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text is not well-formed XML.
    #[error("Document is not valid XML: {0}")]
    MalformedDocument(String),

    /// Well-formed XML without the decision/decisionTable shape.
    #[error("Document is valid XML but has invalid DMN format: {0}")]
    MissingStructure(String),
}

/// Main error type for dectable operations.
#[derive(Debug, Error)]
pub enum DectableError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding a DMN document.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The table failed validation where a valid table was required.
    #[error("Decision table has {} validation error(s)", .0.len())]
    ValidationFailure(Vec<ValidationMessage>),

    /// A structural edit addressed a column or row that does not exist.
    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// An edit operation could not be parsed.
    #[error("Invalid edit operation: {0}")]
    InvalidOperation(String),

    /// Error saving or loading stored tables.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dectable operations.
pub type Result<T> = std::result::Result<T, DectableError>;
