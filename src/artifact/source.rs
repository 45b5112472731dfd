//! Pluggable artifact sources.
//!
//! The classifier does not care where the artifact comes from, only that a
//! single read returns the parsed bundle or fails. A file source covers the
//! static-deployment case; a memory source covers tests and embedding the
//! artifact directly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::schema::ModelArtifact;
use crate::error::{Result, TapisError};

/// Trait for artifact backends.
pub trait ArtifactSource: Send + Sync {
    /// Load and parse the model artifact.
    fn load(&self) -> Result<ModelArtifact>;

    /// Human-readable description of the backend, for log messages.
    fn describe(&self) -> String;
}

/// Loads the artifact from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileArtifactSource {
    path: PathBuf,
}

impl FileArtifactSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileArtifactSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSource for FileArtifactSource {
    fn load(&self) -> Result<ModelArtifact> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            TapisError::artifact_unavailable(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            TapisError::artifact_unavailable(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves an already-parsed artifact from memory.
#[derive(Clone, Debug)]
pub struct MemoryArtifactSource {
    artifact: ModelArtifact,
}

impl MemoryArtifactSource {
    /// Create a new memory source holding the given artifact.
    pub fn new(artifact: ModelArtifact) -> Self {
        MemoryArtifactSource { artifact }
    }
}

impl ArtifactSource for MemoryArtifactSource {
    fn load(&self) -> Result<ModelArtifact> {
        Ok(self.artifact.clone())
    }

    fn describe(&self) -> String {
        "in-memory artifact".to_string()
    }
}
