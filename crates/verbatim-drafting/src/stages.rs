//! Stage handlers
//!
//! Each handler takes the workflow state by mutable reference, checks the
//! stage's inputs, calls its collaborator and records the outcome. A failed
//! call leaves the draft and key points untouched; the chosen tone and
//! custom prompt are recorded before drafting so a retry can reuse them.

use crate::error::DraftingError;
use tracing::{info, warn};
use verbatim_domain::traits::{DraftGenerator, KeyPointExtractor};
use verbatim_domain::{Tone, WorkflowState};

/// Extract key points from the transcript, replacing any existing ones
///
/// Returns the number of key points extracted.
pub async fn extract_key_points(
    state: &mut WorkflowState,
    extractor: &dyn KeyPointExtractor,
) -> Result<usize, DraftingError> {
    let transcript = state.require_transcript()?;

    let key_points = extractor
        .extract_key_points(transcript, &state.supporting_sources)
        .await
        .map_err(|e| {
            warn!(error = %e, "Key-point extraction failed");
            DraftingError::Extraction(e)
        })?;

    let count = key_points.len();
    state.set_key_points(key_points);
    info!(key_points = count, "Key points ready for review");
    Ok(count)
}

/// Generate a draft from the reviewed key points in the chosen tone
///
/// The tone and custom prompt are recorded even if generation fails, so a
/// retry only needs the call repeated.
pub async fn generate_draft(
    state: &mut WorkflowState,
    generator: &dyn DraftGenerator,
    tone: Tone,
    custom_prompt: Option<String>,
) -> Result<(), DraftingError> {
    state.tone = Some(tone);
    state.custom_prompt = custom_prompt.filter(|p| !p.trim().is_empty());

    let (key_points, tone) = state.require_generation_inputs()?;

    let draft = generator
        .generate_draft(key_points, tone, state.custom_prompt.as_deref())
        .await
        .map_err(|e| {
            warn!(error = %e, "Draft generation failed");
            DraftingError::Generation(e)
        })?;

    state.set_draft(draft);
    info!(tone = %tone, "Draft ready");
    Ok(())
}
