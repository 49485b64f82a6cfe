//! Error types for the importer.
//!
//! Parsing itself never fails: malformed lines are skipped and undecodable
//! bytes are replaced or dropped. Errors only come from the edges (reading
//! the source, writing the document, validating CLI overrides).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the importer library.
#[derive(Debug, Error)]
pub enum ImporterError {
    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2025-01-01)")]
    InvalidDate(String),

    /// The rulebook text file could not be read.
    #[error("Failed to read rulebook source {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document could not be written.
    #[error("Failed to write document to {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for importer operations.
pub type Result<T> = std::result::Result<T, ImporterError>;
