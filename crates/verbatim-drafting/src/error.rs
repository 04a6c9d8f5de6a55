//! Error types for the drafting stages

use thiserror::Error;
use verbatim_domain::{CollaboratorError, WorkflowError};

/// Errors that can occur while extracting key points or generating a draft
#[derive(Error, Debug)]
pub enum DraftingError {
    /// A stage was run without its inputs
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Key-point extraction failed
    #[error("Failed to extract key points: {0}")]
    Extraction(CollaboratorError),

    /// Draft generation failed; there is no local fallback
    #[error("Failed to generate draft: {0}. Please try again.")]
    Generation(CollaboratorError),

    /// Snapshot written by an unknown format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshotVersion {
        /// Version found in the snapshot
        found: u32,
        /// Version this build reads
        expected: u32,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DraftingError {
    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            DraftingError::Extraction(e) | DraftingError::Generation(e) => {
                !matches!(e, CollaboratorError::InvalidRequest(_))
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for DraftingError {
    fn from(e: serde_json::Error) -> Self {
        DraftingError::Serialization(e.to_string())
    }
}
