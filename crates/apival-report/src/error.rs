//! Error types for loading documents

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while loading JSON documents
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to read a file
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read standard input
    #[error("failed to read stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON, or not the expected document shape
    #[error("failed to parse JSON from {origin}: {source}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
