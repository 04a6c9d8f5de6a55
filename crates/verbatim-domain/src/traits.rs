//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{SupportingSource, Tone};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors crossing a collaborator seam
///
/// Every collaborator failure is recoverable by the caller: verification
/// falls back to local matching, generation surfaces a retry prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollaboratorError {
    /// The service could not be reached or answered with an error status
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// The service answered with output that could not be interpreted
    #[error("Invalid collaborator response: {0}")]
    InvalidResponse(String),

    /// The call did not complete in time
    #[error("Collaborator timed out after {0}s")]
    Timeout(u64),

    /// The request was rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Answer from an external quote-verification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalVerdict {
    /// Whether the quote was found in the source materials
    pub found: bool,

    /// Name of the source the service attributes the quote to
    #[serde(default)]
    pub source: String,

    /// Surrounding context reported by the service
    #[serde(default)]
    pub snippet: String,
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (verbatim-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate text completion
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model behind this provider, recorded for auditing
    fn model_name(&self) -> &str;
}

/// Trait for an external quote-verification strategy
///
/// Implemented by the application layer (verbatim-provenance). Callers
/// must treat any error as "fall back to local matching for this quote".
#[async_trait]
pub trait QuoteVerifier: Send + Sync {
    /// Check a single quote against the transcript and supporting sources
    async fn verify_quote(
        &self,
        quote: &str,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<ExternalVerdict, CollaboratorError>;
}

/// Trait for extracting key points from a transcript
///
/// Implemented by the application layer (verbatim-drafting)
#[async_trait]
pub trait KeyPointExtractor: Send + Sync {
    /// Produce the key points of an interview transcript
    async fn extract_key_points(
        &self,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<Vec<String>, CollaboratorError>;
}

/// Trait for synthesizing a draft from key points
///
/// Implemented by the application layer (verbatim-drafting)
#[async_trait]
pub trait DraftGenerator: Send + Sync {
    /// Generate draft text in the given tone
    async fn generate_draft(
        &self,
        key_points: &[String],
        tone: Tone,
        custom_prompt: Option<&str>,
    ) -> Result<String, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_defaults_missing_fields() {
        let verdict: ExternalVerdict = serde_json::from_str(r#"{"found": false}"#).unwrap();
        assert!(!verdict.found);
        assert!(verdict.source.is_empty());
        assert!(verdict.snippet.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CollaboratorError::Timeout(20).to_string(),
            "Collaborator timed out after 20s"
        );
    }
}
