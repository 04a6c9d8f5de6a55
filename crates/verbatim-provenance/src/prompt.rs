//! Prompt construction for LLM-backed quote verification

use verbatim_domain::SupportingSource;

const FACT_CHECK_INSTRUCTIONS: &str = r#"You are a fact-checker. Your job is to verify if a quote appears in the provided source materials. Return a JSON response with: {"found": boolean, "source": string, "snippet": string}. If found, provide the source name and a snippet of surrounding context (50-100 words). If not found, set found to false."#;

const OUTPUT_FORMAT_REMINDER: &str = "Respond with the JSON object only, no commentary.";

/// Builds the fact-checking prompt for one quote
pub struct VerificationPromptBuilder<'a> {
    quote: &'a str,
    transcript: &'a str,
    sources: &'a [SupportingSource],
}

impl<'a> VerificationPromptBuilder<'a> {
    /// Create a prompt builder for a quote and its candidate sources
    pub fn new(quote: &'a str, transcript: &'a str, sources: &'a [SupportingSource]) -> Self {
        Self {
            quote,
            transcript,
            sources,
        }
    }

    /// Source materials block
    ///
    /// Supporting sources are numbered from 1 in the order they were added,
    /// matching the `SUPPORTING SOURCE N` labels the index resolves.
    pub fn materials(&self) -> String {
        let mut materials = String::new();

        if !self.transcript.trim().is_empty() {
            materials.push_str("TRANSCRIPT:\n");
            materials.push_str(self.transcript);
            materials.push_str("\n\n");
        }

        for (position, source) in self.sources.iter().enumerate() {
            materials.push_str(&format!(
                "SUPPORTING SOURCE {} ({}): {}\n",
                position + 1,
                source.kind,
                source.label()
            ));
            if let Some(content) = source.content.as_deref().filter(|_| source.has_content()) {
                materials.push_str(content);
                materials.push('\n');
            }
            materials.push('\n');
        }

        materials
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(FACT_CHECK_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Please verify if this quote appears in the source materials:\n\n");
        prompt.push_str(&format!("QUOTE TO VERIFY: \"{}\"\n\n", self.quote));

        prompt.push_str("SOURCE MATERIALS:\n");
        prompt.push_str(&self.materials());

        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt
    }
}
