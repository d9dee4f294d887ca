//! Error types for the restructurer.
//!
//! The content splitter itself is infallible; errors only come from loading,
//! writing, and from user-supplied clause rules that fail to compile.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the restructurer library.
#[derive(Debug, Error)]
pub enum RestructureError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The knowledge file did not contain a top-level JSON array.
    #[error("Expected a JSON array of records in {}", .path.display())]
    NotAnArray { path: PathBuf },

    /// A clause rule's lead phrase is not a valid regular expression.
    #[error("Invalid pattern for clause rule '{label}': {source}")]
    InvalidClausePattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    /// The directory the output file should be written to does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),
}

/// Result type alias for restructurer operations.
pub type Result<T> = std::result::Result<T, RestructureError>;
