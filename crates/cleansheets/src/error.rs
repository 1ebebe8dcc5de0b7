//! Error types for the cleansheets library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cleansheets operations.
#[derive(Debug, Error)]
pub enum CleanSheetsError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty batch or no cells to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error sending the chat-completion request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The chat-completion API answered with a non-success status.
    #[error("OpenRouter API error: {status}")]
    Upstream { status: u16 },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cleansheets operations.
pub type Result<T> = std::result::Result<T, CleanSheetsError>;
