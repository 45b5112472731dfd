//! Error types for the Tapis library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`TapisError`] enum. The classifier boundary itself never surfaces
//! these errors to callers; artifact failures are absorbed by the keyword
//! fallback inside [`crate::classifier::ClassifierEngine::predict`].

use std::io;

use thiserror::Error;

/// The main error type for Tapis operations.
#[derive(Error, Debug)]
pub enum TapisError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The model artifact could not be fetched or parsed.
    #[error("Artifact unavailable: {0}")]
    ArtifactUnavailable(String),

    /// The model artifact was fetched but violates the schema invariants.
    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TapisError.
pub type Result<T> = std::result::Result<T, TapisError>;

impl TapisError {
    /// Create a new artifact-unavailable error.
    pub fn artifact_unavailable<S: Into<String>>(msg: S) -> Self {
        TapisError::ArtifactUnavailable(msg.into())
    }

    /// Create a new malformed-artifact error.
    pub fn malformed_artifact<S: Into<String>>(msg: S) -> Self {
        TapisError::MalformedArtifact(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TapisError::Other(msg.into())
    }
}
