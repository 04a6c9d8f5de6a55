//! Prompt construction for key-point extraction and draft generation

use verbatim_domain::{SupportingSource, Tone};

const KEY_POINT_INSTRUCTIONS: &str = "You are an expert at extracting key points from interview transcripts. \
Extract 5-10 clear, concise bullet points that capture the most important insights, quotes, and themes \
from the transcript. Each bullet point should be specific and actionable for article writing.";

const KEY_POINT_REQUEST: &str = "Return 5-10 bullet points that would be most valuable for writing an article. \
Focus on unique insights, important quotes, and main themes. Start each bullet point with \"- \".";

const ARTICLE_STRUCTURE: &str = "Structure your article with:
1. A compelling headline
2. An engaging introduction
3. 3-4 main sections with subheadings
4. A strong conclusion

Make sure to incorporate direct quotes where appropriate and reference supporting sources when relevant.";

const ARTICLE_REQUEST: &str = "The article should be approximately 800-1200 words and include relevant quotes \
and insights from the key points. Make it engaging and informative for readers.";

/// Builds the key-point extraction prompt for one transcript chunk
pub struct KeyPointPromptBuilder<'a> {
    transcript: &'a str,
    sources: &'a [SupportingSource],
}

impl<'a> KeyPointPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(transcript: &'a str, sources: &'a [SupportingSource]) -> Self {
        Self { transcript, sources }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(KEY_POINT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Please extract the key points from this interview transcript:\n\n");
        prompt.push_str(self.transcript);
        prompt.push('\n');

        if !self.sources.is_empty() {
            prompt.push_str("\nSupporting Sources:\n");
            for (position, source) in self.sources.iter().enumerate() {
                prompt.push_str(&format!("{}. {}\n", position + 1, source.label()));
            }
        }

        prompt.push('\n');
        prompt.push_str(KEY_POINT_REQUEST);
        prompt
    }
}

/// Builds the draft generation prompt
pub struct DraftPromptBuilder<'a> {
    key_points: &'a [String],
    tone: Tone,
    custom_prompt: Option<&'a str>,
}

impl<'a> DraftPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(key_points: &'a [String], tone: Tone) -> Self {
        Self {
            key_points,
            tone,
            custom_prompt: None,
        }
    }

    /// Add extra direction from the writer; blank text is ignored
    pub fn with_custom_prompt(mut self, custom_prompt: Option<&'a str>) -> Self {
        self.custom_prompt = custom_prompt.map(str::trim).filter(|p| !p.is_empty());
        self
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("You are an expert article writer. ");
        prompt.push_str(self.tone.instruction());
        prompt.push_str("\n\n");
        prompt.push_str(ARTICLE_STRUCTURE);

        if let Some(custom) = self.custom_prompt {
            prompt.push_str("\n\nAdditional instructions: ");
            prompt.push_str(custom);
        }

        prompt.push_str("\n\nPlease write a comprehensive article based on these key points:\n\n");
        for (position, point) in self.key_points.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", position + 1, point));
        }

        prompt.push('\n');
        prompt.push_str(ARTICLE_REQUEST);
        prompt
    }
}
