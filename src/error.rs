//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metaquery operations
#[derive(Error, Debug)]
pub enum MetaqueryError {
    /// I/O errors (file missing, permission denied, read failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Specimen table documents that are not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line or element that does not match the expected positional shape
    #[error("Malformed input in {file} at {record}: {message}")]
    MalformedInput {
        file: String,
        record: String,
        message: String,
    },

    /// A cross-reference lookup with no match in the target map
    #[error("Missing join key {key:?} in {table}")]
    MissingJoinKey { key: String, table: &'static str },

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File not found errors
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
}

/// Type alias for Results using MetaqueryError
pub type Result<T> = std::result::Result<T, MetaqueryError>;

impl MetaqueryError {
    /// Create a malformed-input error naming the source and the offending record
    pub fn malformed(
        file: impl Into<String>,
        record: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            file: file.into(),
            record: record.into(),
            message: message.into(),
        }
    }

    /// Create a missing-join-key error naming the key and the map it was expected in
    pub fn missing_key(key: impl Into<String>, table: &'static str) -> Self {
        Self::MissingJoinKey {
            key: key.into(),
            table,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
