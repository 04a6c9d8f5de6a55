//! LLM-backed quote verification strategy

use crate::parser::parse_verdict;
use crate::prompt::VerificationPromptBuilder;
use async_trait::async_trait;
use tracing::debug;
use verbatim_domain::traits::{LlmProvider, QuoteVerifier};
use verbatim_domain::{CollaboratorError, ExternalVerdict, SupportingSource};

/// Asks a language model whether a quote appears in the source materials
///
/// Plug into [`Verifier::with_external`](crate::Verifier::with_external);
/// every failure here is absorbed by the verifier's local fallback.
pub struct LlmQuoteVerifier<L: LlmProvider> {
    llm: L,
}

impl<L: LlmProvider> LlmQuoteVerifier<L> {
    /// Create a verifier over an LLM provider
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.llm
    }
}

#[async_trait]
impl<L: LlmProvider> QuoteVerifier for LlmQuoteVerifier<L> {
    async fn verify_quote(
        &self,
        quote: &str,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<ExternalVerdict, CollaboratorError> {
        let prompt = VerificationPromptBuilder::new(quote, transcript, sources).build();

        let response = self
            .llm
            .generate(&prompt)
            .await
            .map_err(|e| CollaboratorError::Unavailable(e.to_string()))?;

        debug!(model = self.llm.model_name(), chars = response.len(), "Verification response");

        parse_verdict(&response)
    }
}
