//! Error types for the formatter.
//!
//! The parser itself never fails: malformed input degrades to empty fields.
//! Everything that can fail lives around it (reading the source, validating
//! the variable name, serializing and writing the literal).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the formatter library.
#[derive(Debug, Error)]
pub enum FormatterError {
    /// Variable name is not a usable JavaScript identifier.
    #[error("Invalid variable name: '{0}'. Expected a JavaScript identifier (e.g., state, newyork)")]
    InvalidVariableName(String),

    /// Failed to read the source document.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path resolves to the source document.
    #[error("Refusing to overwrite the input file {}; pass a different output path", .0.display())]
    OutputIsInput(PathBuf),

    /// Input path for a batch run is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Text is not a `var <name> = <json>;` literal.
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

/// Result type alias for formatter operations.
pub type Result<T> = std::result::Result<T, FormatterError>;
