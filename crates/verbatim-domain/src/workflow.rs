//! Workflow state handed between editorial stages
//!
//! A project moves through four stages: setup (transcript and sources),
//! key-point review, draft generation, and review/export. Each stage reads
//! and writes this one typed struct instead of loose key-value storage.

use crate::{SupportingSource, Tone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text used for a key point added without content
pub const NEW_KEY_POINT_PLACEHOLDER: &str = "New key point - click edit to modify";

/// Errors from workflow state transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// No transcript has been provided
    #[error("Missing transcript: paste an interview transcript to continue")]
    MissingTranscript,

    /// Draft generation was requested without key points
    #[error("Key points are required")]
    MissingKeyPoints,

    /// Draft generation was requested without choosing a tone
    #[error("A tone must be selected before generating a draft")]
    MissingTone,

    /// Review was requested before a draft exists
    #[error("No draft has been generated yet")]
    MissingDraft,

    /// Key point index outside the current list
    #[error("Key point {index} does not exist ({len} key points)")]
    KeyPointOutOfRange {
        /// Requested 0-based index
        index: usize,
        /// Current number of key points
        len: usize,
    },
}

/// Stage of the editorial workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Transcript and supporting sources are being collected
    #[default]
    Setup,
    /// Key points have been extracted and are under review
    KeyPoints,
    /// A tone has been chosen and a draft generated
    Drafting,
    /// The draft is being verified and exported
    Review,
}

impl WorkflowStage {
    /// 1-based step number for display
    pub fn step(&self) -> usize {
        match self {
            WorkflowStage::Setup => 1,
            WorkflowStage::KeyPoints => 2,
            WorkflowStage::Drafting => 3,
            WorkflowStage::Review => 4,
        }
    }

    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Setup => "setup",
            WorkflowStage::KeyPoints => "key_points",
            WorkflowStage::Drafting => "drafting",
            WorkflowStage::Review => "review",
        }
    }
}

/// Typed workflow state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Current stage
    #[serde(default)]
    pub stage: WorkflowStage,

    /// Interview transcript text
    #[serde(default)]
    pub transcript: String,

    /// Supporting sources in the order they were added
    #[serde(default)]
    pub supporting_sources: Vec<SupportingSource>,

    /// Reviewed key points, in display order
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Selected tone
    #[serde(default)]
    pub tone: Option<Tone>,

    /// Optional extra direction for the writer
    #[serde(default)]
    pub custom_prompt: Option<String>,

    /// Current draft text
    #[serde(default)]
    pub draft: Option<String>,
}

impl WorkflowState {
    /// Start a project from a transcript
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            ..Self::default()
        }
    }

    /// Add a supporting source; order of addition is preserved
    pub fn add_source(&mut self, source: SupportingSource) {
        self.supporting_sources.push(source);
    }

    /// Check the transcript is present before key-point extraction
    pub fn require_transcript(&self) -> Result<&str, WorkflowError> {
        if self.transcript.trim().is_empty() {
            return Err(WorkflowError::MissingTranscript);
        }
        Ok(&self.transcript)
    }

    /// Check key points and tone are present before draft generation
    pub fn require_generation_inputs(&self) -> Result<(&[String], Tone), WorkflowError> {
        if self.key_points.is_empty() {
            return Err(WorkflowError::MissingKeyPoints);
        }
        let tone = self.tone.ok_or(WorkflowError::MissingTone)?;
        Ok((&self.key_points, tone))
    }

    /// Check a draft is present before review
    pub fn require_draft(&self) -> Result<&str, WorkflowError> {
        self.draft.as_deref().ok_or(WorkflowError::MissingDraft)
    }

    /// Replace the key points with a fresh extraction
    pub fn set_key_points(&mut self, key_points: Vec<String>) {
        self.key_points = key_points;
        self.stage = WorkflowStage::KeyPoints;
    }

    /// Store a generated or hand-edited draft
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = Some(draft.into());
        self.stage = WorkflowStage::Drafting;
    }

    /// Move to the review stage
    pub fn begin_review(&mut self) -> Result<(), WorkflowError> {
        self.require_draft()?;
        self.stage = WorkflowStage::Review;
        Ok(())
    }

    /// Replace the text of a key point
    pub fn edit_key_point(&mut self, index: usize, text: impl Into<String>) -> Result<(), WorkflowError> {
        self.check_index(index)?;
        self.key_points[index] = text.into();
        Ok(())
    }

    /// Remove a key point, returning its text
    pub fn delete_key_point(&mut self, index: usize) -> Result<String, WorkflowError> {
        self.check_index(index)?;
        Ok(self.key_points.remove(index))
    }

    /// Swap a key point with the one above it; no-op for the first
    pub fn move_key_point_up(&mut self, index: usize) -> Result<(), WorkflowError> {
        self.check_index(index)?;
        if index > 0 {
            self.key_points.swap(index, index - 1);
        }
        Ok(())
    }

    /// Swap a key point with the one below it; no-op for the last
    pub fn move_key_point_down(&mut self, index: usize) -> Result<(), WorkflowError> {
        self.check_index(index)?;
        if index + 1 < self.key_points.len() {
            self.key_points.swap(index, index + 1);
        }
        Ok(())
    }

    /// Append a key point, using the placeholder when no text is given
    pub fn add_key_point(&mut self, text: Option<String>) {
        let text = text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| NEW_KEY_POINT_PLACEHOLDER.to_string());
        self.key_points.push(text);
    }

    /// Discard everything and return to setup
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_index(&self, index: usize) -> Result<(), WorkflowError> {
        if index >= self.key_points.len() {
            return Err(WorkflowError::KeyPointOutOfRange {
                index,
                len: self.key_points.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_points() -> WorkflowState {
        let mut state = WorkflowState::new("transcript");
        state.set_key_points(vec!["a".into(), "b".into(), "c".into()]);
        state
    }

    #[test]
    fn test_require_transcript() {
        assert_eq!(
            WorkflowState::new("   ").require_transcript(),
            Err(WorkflowError::MissingTranscript)
        );
        assert!(WorkflowState::new("hello").require_transcript().is_ok());
    }

    #[test]
    fn test_generation_guards() {
        let mut state = WorkflowState::new("t");
        assert_eq!(
            state.require_generation_inputs().unwrap_err(),
            WorkflowError::MissingKeyPoints
        );
        state.add_key_point(Some("point".into()));
        assert_eq!(
            state.require_generation_inputs().unwrap_err(),
            WorkflowError::MissingTone
        );
        state.tone = Some(Tone::Analytical);
        let (points, tone) = state.require_generation_inputs().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(tone, Tone::Analytical);
    }

    #[test]
    fn test_reorder_key_points() {
        let mut state = state_with_points();
        state.move_key_point_up(0).unwrap();
        assert_eq!(state.key_points, vec!["a", "b", "c"]);

        state.move_key_point_up(2).unwrap();
        assert_eq!(state.key_points, vec!["a", "c", "b"]);

        state.move_key_point_down(2).unwrap();
        assert_eq!(state.key_points, vec!["a", "c", "b"]);

        state.move_key_point_down(0).unwrap();
        assert_eq!(state.key_points, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_edit_delete_add() {
        let mut state = state_with_points();
        state.edit_key_point(1, "B").unwrap();
        assert_eq!(state.delete_key_point(0).unwrap(), "a");
        state.add_key_point(None);
        assert_eq!(state.key_points, vec!["B", "c", NEW_KEY_POINT_PLACEHOLDER]);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut state = state_with_points();
        assert_eq!(
            state.delete_key_point(3),
            Err(WorkflowError::KeyPointOutOfRange { index: 3, len: 3 })
        );
        assert!(state.move_key_point_down(9).is_err());
    }

    #[test]
    fn test_stage_progression_and_reset() {
        let mut state = state_with_points();
        assert_eq!(state.stage, WorkflowStage::KeyPoints);
        assert_eq!(state.begin_review(), Err(WorkflowError::MissingDraft));

        state.set_draft("draft");
        state.begin_review().unwrap();
        assert_eq!(state.stage, WorkflowStage::Review);
        assert_eq!(state.stage.step(), 4);

        state.reset();
        assert_eq!(state, WorkflowState::default());
    }

    #[test]
    fn test_state_serializes_with_defaults() {
        let state: WorkflowState = serde_json::from_str(r#"{"transcript": "hi"}"#).unwrap();
        assert_eq!(state.stage, WorkflowStage::Setup);
        assert!(state.supporting_sources.is_empty());
        assert!(state.tone.is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: reordering never adds, drops or alters key points
        #[test]
        fn test_moves_preserve_key_points(
            points in proptest::collection::vec("[a-z]{1,8}", 1..8),
            moves in proptest::collection::vec((any::<bool>(), 0usize..8), 0..16),
        ) {
            let mut state = WorkflowState::new("transcript");
            state.set_key_points(points.clone());

            for (up, index) in moves {
                let result = if up {
                    state.move_key_point_up(index)
                } else {
                    state.move_key_point_down(index)
                };
                prop_assert_eq!(result.is_ok(), index < points.len());
            }

            let mut before = points.clone();
            let mut after = state.key_points.clone();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
