//! Provenance Exporter
//!
//! Assembles the self-contained audit record for a finished workflow run
//! and hands it to a writer. Apart from the timestamp, the output is a pure
//! function of the workflow state and the report.

use crate::error::ProvenanceError;
use crate::report::VerificationReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;
use verbatim_domain::{SourceId, SourceKind, WorkflowState};

/// File name used for the exported draft
pub const DRAFT_FILE_NAME: &str = "article-draft.md";

/// File name used for the exported provenance record
pub const PROVENANCE_FILE_NAME: &str = "article-provenance.json";

/// Type tag recorded for the transcript
pub const TRANSCRIPT_TYPE: &str = "interview_transcript";

/// Generation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    /// When the record was exported
    pub generated_at: DateTime<Utc>,
    /// Selected tone, empty when none was chosen
    pub tone: String,
    /// Whitespace-separated words in the draft
    pub word_count: usize,
}

/// The transcript as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Full transcript text
    pub content: String,
    /// Always `interview_transcript`
    #[serde(rename = "type")]
    pub kind: String,
}

/// A supporting source as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingSourceRecord {
    /// Internal identifier
    pub id: SourceId,
    /// Display name
    pub name: String,
    /// URL or file
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// Locator value
    pub value: String,
    /// 1-based display index in the order sources were added
    pub index: usize,
}

/// Corpus section of the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesRecord {
    /// The interview transcript
    pub transcript: TranscriptRecord,
    /// Supporting sources, enumerated
    pub supporting_sources: Vec<SupportingSourceRecord>,
}

/// One verified or unverified quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote text
    pub text: String,
    /// Whether it was found
    pub verified: bool,
    /// Matched source label, or "Not Found"
    pub source: String,
    /// Context around the match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// The draft as exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    /// Draft text
    pub content: String,
    /// Characters (Unicode scalar values) in the draft
    pub character_count: usize,
}

/// The exportable audit artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    /// Generation metadata
    pub metadata: RecordMetadata,
    /// Source corpus
    pub sources: SourcesRecord,
    /// Reviewed key points
    pub key_points: Vec<String>,
    /// Per-quote verification detail in draft order
    pub quotes: Vec<QuoteRecord>,
    /// The draft itself
    pub draft: DraftRecord,
}

impl ProvenanceRecord {
    /// Build the record from a workflow state and its verification report
    ///
    /// A state without a draft exports an empty draft.
    pub fn assemble(
        state: &WorkflowState,
        report: &VerificationReport,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let draft = state.draft.clone().unwrap_or_default();

        let supporting_sources = state
            .supporting_sources
            .iter()
            .enumerate()
            .map(|(position, source)| SupportingSourceRecord {
                id: source.id,
                name: source.name.clone(),
                kind: source.kind,
                value: source.value.clone(),
                index: position + 1,
            })
            .collect();

        let quotes = report
            .entries()
            .iter()
            .map(|entry| QuoteRecord {
                text: entry.quote.text.clone(),
                verified: entry.result.is_verified(),
                source: entry.result.source_label().to_string(),
                snippet: entry.result.snippet().map(str::to_string),
            })
            .collect();

        Self {
            metadata: RecordMetadata {
                generated_at,
                tone: state.tone.map(|t| t.as_str().to_string()).unwrap_or_default(),
                word_count: draft.split_whitespace().count(),
            },
            sources: SourcesRecord {
                transcript: TranscriptRecord {
                    content: state.transcript.clone(),
                    kind: TRANSCRIPT_TYPE.to_string(),
                },
                supporting_sources,
            },
            key_points: state.key_points.clone(),
            quotes,
            draft: DraftRecord {
                character_count: draft.chars().count(),
                content: draft,
            },
        }
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String, ProvenanceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported record
    pub fn from_json(json: &str) -> Result<Self, ProvenanceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Assemble the provenance record, stamping it now, and write it as JSON
pub fn export_provenance<W: Write>(
    state: &WorkflowState,
    report: &VerificationReport,
    writer: &mut W,
) -> Result<ProvenanceRecord, ProvenanceError> {
    let record = ProvenanceRecord::assemble(state, report, Utc::now());
    writer.write_all(record.to_json()?.as_bytes())?;
    writer.flush()?;

    info!(
        quotes = record.quotes.len(),
        words = record.metadata.word_count,
        "Provenance record exported"
    );

    Ok(record)
}

/// Write the draft as Markdown
pub fn export_markdown<W: Write>(draft: &str, writer: &mut W) -> Result<(), ProvenanceError> {
    writer.write_all(draft.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{MatchMethod, MatchResult};
    use chrono::TimeZone;
    use verbatim_domain::{Quote, SourceRef, SupportingSource, Tone};

    fn state() -> WorkflowState {
        let mut state = WorkflowState::new("The engineer said we ship on Fridays.");
        state.add_source(SupportingSource::url("https://example.com/a"));
        state.add_source(SupportingSource::file("memo.txt").with_content("memo body"));
        state.set_key_points(vec!["Friday releases".into()]);
        state.tone = Some(Tone::Analytical);
        state.set_draft("As noted,  \"we ship on Fridays\"\nremains the policy.");
        state
    }

    fn report() -> VerificationReport {
        VerificationReport::assemble(
            vec![Quote::new("we ship on Fridays", 10), Quote::new("not in any source", 40)],
            vec![
                MatchResult::verified(
                    SourceRef::Transcript,
                    Some("...said we ship on Fridays.".into()),
                    Some("line 1".into()),
                    MatchMethod::Local,
                ),
                MatchResult::not_found(MatchMethod::Local),
            ],
        )
        .unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_contents() {
        let record = ProvenanceRecord::assemble(&state(), &report(), fixed_time());

        assert_eq!(record.metadata.tone, "analytical");
        assert_eq!(record.metadata.word_count, 9);
        assert_eq!(record.sources.transcript.kind, TRANSCRIPT_TYPE);
        assert_eq!(record.sources.supporting_sources[0].index, 1);
        assert_eq!(record.sources.supporting_sources[1].index, 2);
        assert_eq!(record.quotes[0].source, "Interview Transcript");
        assert_eq!(record.quotes[1].source, "Not Found");
        assert!(record.quotes[1].snippet.is_none());
        assert_eq!(record.key_points, vec!["Friday releases"]);
    }

    #[test]
    fn test_json_field_names() {
        let record = ProvenanceRecord::assemble(&state(), &report(), fixed_time());
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert!(json["metadata"]["generatedAt"].is_string());
        assert_eq!(json["metadata"]["wordCount"], 9);
        assert_eq!(json["sources"]["transcript"]["type"], "interview_transcript");
        assert_eq!(json["sources"]["supportingSources"][0]["type"], "url");
        assert_eq!(json["sources"]["supportingSources"][1]["index"], 2);
        assert!(json["quotes"][1].get("snippet").is_none());
        assert!(json["draft"]["characterCount"].is_number());
    }

    #[test]
    fn test_deterministic_for_same_timestamp() {
        let a = ProvenanceRecord::assemble(&state(), &report(), fixed_time()).to_json().unwrap();
        let b = ProvenanceRecord::assemble(&state(), &report(), fixed_time()).to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_character_count_uses_chars() {
        let mut state = state();
        state.set_draft("Café “quoted”");
        let record = ProvenanceRecord::assemble(&state, &VerificationReport::default(), fixed_time());
        assert_eq!(record.draft.character_count, 13);
        assert_eq!(record.metadata.word_count, 2);
    }

    #[test]
    fn test_missing_draft_and_tone() {
        let state = WorkflowState::new("transcript");
        let record = ProvenanceRecord::assemble(&state, &VerificationReport::default(), fixed_time());
        assert_eq!(record.draft.content, "");
        assert_eq!(record.draft.character_count, 0);
        assert_eq!(record.metadata.word_count, 0);
        assert_eq!(record.metadata.tone, "");
    }

    #[test]
    fn test_export_round_trip() {
        let report = report();
        let mut sink = Vec::new();
        let written = export_provenance(&state(), &report, &mut sink).unwrap();

        let parsed = ProvenanceRecord::from_json(std::str::from_utf8(&sink).unwrap()).unwrap();
        assert_eq!(parsed, written);
        assert_eq!(parsed.quotes.len(), report.summary().total);
        assert_eq!(parsed.draft.character_count, parsed.draft.content.chars().count());
    }

    #[test]
    fn test_export_markdown() {
        let mut sink = Vec::new();
        export_markdown("# Headline\n\nBody", &mut sink).unwrap();
        assert_eq!(sink, b"# Headline\n\nBody");
    }
}
