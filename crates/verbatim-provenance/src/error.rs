//! Error types for the provenance engine

use thiserror::Error;

/// Errors that can occur while verifying quotes or exporting provenance
///
/// Verification itself degrades instead of failing: collaborator errors
/// never surface here, they fall back to local matching.
#[derive(Error, Debug)]
pub enum ProvenanceError {
    /// Quotes and match results were not parallel sequences
    #[error("Report assembly mismatch: {quotes} quotes but {matches} match results")]
    LengthMismatch {
        /// Number of quotes supplied
        quotes: usize,
        /// Number of match results supplied
        matches: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing to the export sink failed
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProvenanceError {
    fn from(e: serde_json::Error) -> Self {
        ProvenanceError::Serialization(e.to_string())
    }
}
