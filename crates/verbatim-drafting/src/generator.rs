//! LLM-backed key-point extraction and draft generation

use crate::chunking::TranscriptChunker;
use crate::config::DraftingConfig;
use crate::error::DraftingError;
use crate::parser::parse_key_points;
use crate::prompt::{DraftPromptBuilder, KeyPointPromptBuilder};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{debug, info};
use verbatim_domain::traits::{DraftGenerator, KeyPointExtractor, LlmProvider};
use verbatim_domain::{CollaboratorError, SupportingSource, Tone};

/// Call the model once under the configured timeout
async fn generate_with_timeout<L>(
    llm: &L,
    prompt: &str,
    config: &DraftingConfig,
) -> Result<String, CollaboratorError>
where
    L: LlmProvider,
    L::Error: Into<CollaboratorError>,
{
    debug!(model = llm.model_name(), prompt_chars = prompt.len(), "Calling LLM");

    timeout(config.generation_timeout(), llm.generate(prompt))
        .await
        .map_err(|_| CollaboratorError::Timeout(config.generation_timeout_secs))?
        .map_err(Into::into)
}

/// Extracts key points from a transcript with a language model
///
/// Long transcripts are chunked; key points from each chunk are merged in
/// order, de-duplicated and capped.
pub struct LlmKeyPointExtractor<L: LlmProvider> {
    llm: L,
    config: DraftingConfig,
    chunker: TranscriptChunker,
}

impl<L> LlmKeyPointExtractor<L>
where
    L: LlmProvider,
    L::Error: Into<CollaboratorError>,
{
    /// Create a new extractor
    pub fn new(llm: L, config: DraftingConfig) -> Result<Self, DraftingError> {
        config.validate().map_err(DraftingError::Config)?;
        Ok(Self {
            chunker: TranscriptChunker::new(config.max_chunk_size),
            llm,
            config,
        })
    }
}

#[async_trait]
impl<L> KeyPointExtractor for LlmKeyPointExtractor<L>
where
    L: LlmProvider,
    L::Error: Into<CollaboratorError>,
{
    async fn extract_key_points(
        &self,
        transcript: &str,
        sources: &[SupportingSource],
    ) -> Result<Vec<String>, CollaboratorError> {
        let length = transcript.chars().count();
        if length > self.config.max_transcript_chars {
            return Err(CollaboratorError::InvalidRequest(format!(
                "Transcript too long: {} chars (max: {})",
                length, self.config.max_transcript_chars
            )));
        }

        let chunks = self.chunker.chunk(transcript);
        info!(chunks = chunks.len(), chars = length, "Extracting key points");

        let mut key_points: Vec<String> = Vec::new();
        for (position, chunk) in chunks.iter().enumerate() {
            let prompt = KeyPointPromptBuilder::new(chunk, sources).build();
            let response = generate_with_timeout(&self.llm, &prompt, &self.config).await?;

            let parsed = parse_key_points(&response, self.config.max_key_points);
            debug!(chunk = position + 1, key_points = parsed.len(), "Chunk processed");

            for point in parsed {
                if !key_points.contains(&point) {
                    key_points.push(point);
                }
            }
        }

        if key_points.is_empty() {
            return Err(CollaboratorError::InvalidResponse(
                "No key points found in response".to_string(),
            ));
        }

        key_points.truncate(self.config.max_key_points);
        info!(key_points = key_points.len(), "Key points extracted");
        Ok(key_points)
    }
}

/// Generates a draft article from key points with a language model
pub struct LlmDraftGenerator<L: LlmProvider> {
    llm: L,
    config: DraftingConfig,
}

impl<L> LlmDraftGenerator<L>
where
    L: LlmProvider,
    L::Error: Into<CollaboratorError>,
{
    /// Create a new generator
    pub fn new(llm: L, config: DraftingConfig) -> Result<Self, DraftingError> {
        config.validate().map_err(DraftingError::Config)?;
        Ok(Self { llm, config })
    }
}

#[async_trait]
impl<L> DraftGenerator for LlmDraftGenerator<L>
where
    L: LlmProvider,
    L::Error: Into<CollaboratorError>,
{
    async fn generate_draft(
        &self,
        key_points: &[String],
        tone: Tone,
        custom_prompt: Option<&str>,
    ) -> Result<String, CollaboratorError> {
        if key_points.is_empty() {
            return Err(CollaboratorError::InvalidRequest(
                "Key points are required".to_string(),
            ));
        }

        info!(tone = %tone, key_points = key_points.len(), "Generating draft");

        let prompt = DraftPromptBuilder::new(key_points, tone)
            .with_custom_prompt(custom_prompt)
            .build();
        let draft = generate_with_timeout(&self.llm, &prompt, &self.config).await?;

        let draft = draft.trim();
        if draft.is_empty() {
            return Err(CollaboratorError::InvalidResponse(
                "Empty draft returned".to_string(),
            ));
        }

        info!(words = draft.split_whitespace().count(), "Draft generated");
        Ok(draft.to_string())
    }
}
