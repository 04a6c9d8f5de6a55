//! Verification pipeline
//!
//! Draft → Quote Extractor → Quote Matcher (over the Source Corpus Index,
//! optionally asking an external service first) → Report Assembler.

use crate::config::VerifierConfig;
use crate::error::ProvenanceError;
use crate::index::SourceIndex;
use crate::matcher::{LocalMatcher, MatchMethod, MatchResult};
use crate::quotes::QuoteExtractor;
use crate::report::VerificationReport;
use crate::snippet::SnippetBuilder;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use verbatim_domain::traits::QuoteVerifier;
use verbatim_domain::{CollaboratorError, ExternalVerdict, Quote, SupportingSource, WorkflowState};

/// Runs a verification pass over a draft
///
/// Without an external service every quote is matched locally. With one,
/// each quote is sent to it under a per-call timeout; any failure for a
/// quote falls back to local matching for that quote alone.
pub struct Verifier {
    config: VerifierConfig,
    extractor: QuoteExtractor,
    matcher: LocalMatcher,
    external: Option<Arc<dyn QuoteVerifier>>,
}

impl Verifier {
    /// Create a verifier using local matching only
    pub fn new(config: VerifierConfig) -> Result<Self, ProvenanceError> {
        config.validate().map_err(ProvenanceError::Config)?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: VerifierConfig) -> Self {
        Self {
            extractor: QuoteExtractor::new(config.delimiters.clone()),
            matcher: LocalMatcher::new(SnippetBuilder::new(config.snippet_margin_chars)),
            external: None,
            config,
        }
    }

    /// Consult an external verification service before local matching
    pub fn with_external(mut self, external: Arc<dyn QuoteVerifier>) -> Self {
        self.external = Some(external);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify a draft with local matching only
    pub fn verify_local(
        &self,
        draft: &str,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<VerificationReport, ProvenanceError> {
        let quotes = self.extractor.extract(draft);
        let index = SourceIndex::build(transcript, sources);

        let matches = quotes
            .iter()
            .map(|quote| self.matcher.match_quote(quote, &index))
            .collect();

        VerificationReport::assemble(quotes, matches)
    }

    /// Verify every quote in a draft
    ///
    /// External calls run up to `max_concurrency` at a time; results are
    /// put back in draft order before assembly. Dropping the returned
    /// future stops further calls from being issued.
    pub async fn verify(
        &self,
        draft: &str,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<VerificationReport, ProvenanceError> {
        let quotes = self.extractor.extract(draft);
        let index = SourceIndex::build(transcript, sources);

        info!(
            quotes = quotes.len(),
            sources = sources.len(),
            external = self.external.is_some(),
            "Starting quote verification"
        );

        let matches: Vec<MatchResult> = match &self.external {
            Some(external) if index.is_searchable() => {
                let external = external.as_ref();
                let index = &index;

                let mut results: Vec<(usize, MatchResult)> = stream::iter(quotes.iter().enumerate())
                    .map(|(position, quote)| async move {
                        let result = self
                            .check_external(external, quote, index, transcript, sources)
                            .await;
                        (position, result)
                    })
                    .buffer_unordered(self.config.max_concurrency)
                    .collect()
                    .await;

                results.sort_by_key(|(position, _)| *position);
                results.into_iter().map(|(_, result)| result).collect()
            }
            _ => quotes
                .iter()
                .map(|quote| self.matcher.match_quote(quote, &index))
                .collect(),
        };

        for (quote, result) in quotes.iter().zip(&matches) {
            debug!(
                quote = %quote.text,
                verified = result.is_verified(),
                source = result.source_label(),
                method = ?result.method(),
                "Quote checked"
            );
        }

        let report = VerificationReport::assemble(quotes, matches)?;
        let summary = report.summary();

        info!(
            total = summary.total,
            verified = summary.verified,
            unverified = summary.unverified,
            "Quote verification complete"
        );

        Ok(report)
    }

    /// Verify the draft held in a workflow state
    ///
    /// A state without a draft yields an empty report.
    pub async fn verify_state(&self, state: &WorkflowState) -> Result<VerificationReport, ProvenanceError> {
        let draft = state.draft.as_deref().unwrap_or_default();
        self.verify(draft, &state.transcript, &state.supporting_sources)
            .await
    }

    async fn check_external(
        &self,
        external: &dyn QuoteVerifier,
        quote: &Quote,
        index: &SourceIndex,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> MatchResult {
        let call = external.verify_quote(&quote.text, transcript, sources);

        let outcome = match timeout(self.config.external_timeout(), call).await {
            Ok(Ok(verdict)) => self.interpret(quote, verdict, index),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(CollaboratorError::Timeout(self.config.external_timeout_secs)),
        };

        outcome.unwrap_or_else(|e| {
            warn!(quote = %quote.text, error = %e, "External verification failed, using local match");
            self.matcher.match_quote(quote, index)
        })
    }

    /// Turn an external verdict into a match result
    ///
    /// A negative verdict is cross-checked locally, so a verbatim match is
    /// never reported as missing. A positive verdict must name a member of
    /// the index that has text, otherwise the call counts as failed. If the
    /// quote does not occur in the named member, local attribution wins.
    fn interpret(
        &self,
        quote: &Quote,
        verdict: ExternalVerdict,
        index: &SourceIndex,
    ) -> Result<MatchResult, CollaboratorError> {
        if !verdict.found {
            let local = self.matcher.match_quote(quote, index);
            if local.is_verified() {
                debug!(quote = %quote.text, "External service missed a verbatim match");
            }
            return Ok(local);
        }

        let entry = index.resolve_label(&verdict.source).ok_or_else(|| {
            CollaboratorError::InvalidResponse(format!("Unknown source '{}'", verdict.source))
        })?;

        if !entry.is_searchable() {
            return Err(CollaboratorError::InvalidResponse(format!(
                "Source '{}' has no text to match against",
                entry.reference().label()
            )));
        }

        let Some(located) = self.matcher.locate(quote, entry) else {
            debug!(
                quote = %quote.text,
                source = entry.reference().label(),
                "Quote not in the named source, using local match"
            );
            return Ok(self.matcher.match_quote(quote, index));
        };

        let snippet = Some(verdict.snippet.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| located.text.clone());

        Ok(MatchResult::verified(
            entry.reference().clone(),
            Some(snippet),
            Some(located.location_hint()),
            MatchMethod::External,
        ))
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::from_valid_config(VerifierConfig::default())
    }
}
