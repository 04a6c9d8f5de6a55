//! Verbatim LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `verbatim-domain`.
//! Key-point extraction, draft generation and the LLM-backed quote check all
//! speak to a model through that one trait.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use verbatim_llm::MockProvider;
//! use verbatim_domain::traits::LlmProvider;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use verbatim_domain::traits::LlmProvider;
use verbatim_domain::CollaboratorError;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Output was cut off by the model's token limit
    #[error("Response truncated by token limit")]
    Truncated,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider could not be configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<LlmError> for CollaboratorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::InvalidResponse(msg) => CollaboratorError::InvalidResponse(msg),
            LlmError::Truncated => CollaboratorError::InvalidResponse(
                "Draft too long - try with fewer key points".to_string(),
            ),
            other => CollaboratorError::Unavailable(other.to_string()),
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Prompts are matched by substring, so a test can key a response on the quote
/// or key point it expects to appear in the prompt.
///
/// # Examples
///
/// ```
/// use verbatim_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("breakthrough", r#"{"found": true}"#);
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, Option<String>)>>>,
    call_count: Arc<Mutex<usize>>,
    model_name: String,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            model_name: "mock".to_string(),
        }
    }

    /// Respond with `response` whenever the prompt contains `needle`
    ///
    /// Earlier registrations win when several needles match.
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push((needle.into(), Some(response.into())));
        }
    }

    /// Fail whenever the prompt contains `needle`
    pub fn add_error(&mut self, needle: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push((needle.into(), None));
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|count| *count).unwrap_or(0)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        if let Ok(mut count) = self.call_count.lock() {
            *count = 0;
        }
    }

    fn lookup(&self, prompt: &str) -> Option<Option<String>> {
        let responses = self.responses.lock().ok()?;
        responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }

        match self.lookup(prompt) {
            Some(Some(response)) => Ok(response),
            Some(None) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
