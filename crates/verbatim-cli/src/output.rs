//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use verbatim_domain::WorkflowState;
use verbatim_provenance::VerificationReport;

/// Quote text longer than this is cut in tables.
const QUOTE_COLUMN_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a verification report.
    pub fn format_report(&self, report: &VerificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => {
                let summary = report.summary();
                Ok(format!("{}/{}", summary.verified, summary.total))
            }
        }
    }

    fn format_report_table(&self, report: &VerificationReport) -> String {
        if report.is_empty() {
            return self.colorize("No quotations found in the draft.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Quote", "Status", "Source", "Location"]);

        for (position, entry) in report.entries().iter().enumerate() {
            let result = &entry.result;
            let status = if result.is_verified() {
                self.colorize("verified", "green")
            } else {
                self.colorize("not found", "red")
            };
            builder.push_record([
                (position + 1).to_string(),
                truncate(&entry.quote.text, QUOTE_COLUMN_CHARS),
                status,
                result.source_label().to_string(),
                result.location_hint().unwrap_or("-").to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = report.summary();
        let line = format!(
            "{} quote(s): {} verified, {} not found",
            summary.total, summary.verified, summary.unverified
        );
        let line = if summary.unverified == 0 {
            self.success(&line)
        } else {
            self.warning(&line)
        };

        format!("{}\n{}", table, line)
    }

    /// Format the verified snippets, one block per quote.
    pub fn format_snippets(&self, report: &VerificationReport) -> String {
        report
            .verified()
            .filter_map(|entry| {
                let snippet = entry.result.snippet()?;
                Some(format!(
                    "{} {}\n  {}",
                    self.colorize(&format!("\"{}\"", entry.quote.text), "cyan"),
                    self.colorize(&format!("({})", entry.result.source_label()), "magenta"),
                    snippet
                ))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format the key-point list with 1-based numbers.
    pub fn format_key_points(&self, key_points: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(key_points)?),
            OutputFormat::Quiet => Ok(key_points.join("\n")),
            OutputFormat::Table => {
                if key_points.is_empty() {
                    return Ok(self.colorize("No key points yet.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Key Point"]);
                for (position, point) in key_points.iter().enumerate() {
                    builder.push_record([(position + 1).to_string(), point.clone()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a short project summary.
    pub fn format_project(&self, state: &WorkflowState) -> Result<String> {
        let transcript_chars = state.transcript.chars().count();
        let draft_words = state
            .draft
            .as_deref()
            .map(|d| d.split_whitespace().count())
            .unwrap_or(0);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "stage": state.stage.as_str(),
                "transcriptCharacters": transcript_chars,
                "supportingSources": state.supporting_sources.len(),
                "keyPoints": state.key_points.len(),
                "tone": state.tone.map(|t| t.as_str()),
                "draftWords": draft_words,
            }))?),
            OutputFormat::Quiet => Ok(state.stage.as_str().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Stage", "Transcript", "Sources", "Key Points", "Draft"]);
                builder.push_record([
                    format!("{}/4 {}", state.stage.step(), state.stage.as_str()),
                    format!("{} chars", transcript_chars),
                    state.supporting_sources.len().to_string(),
                    state.key_points.len().to_string(),
                    format!("{} words", draft_words),
                ]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = table.to_string();
                for (position, source) in state.supporting_sources.iter().enumerate() {
                    let note = if source.has_content() { "" } else { " (reference only)" };
                    out.push_str(&format!(
                        "\n  {}. [{}] {}{}",
                        position + 1,
                        source.kind.as_str(),
                        source.label(),
                        note
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Format the paths written by an export.
    pub fn exported(&self, draft: &Path, provenance: &Path) -> String {
        format!(
            "{}\n  {}\n  {}",
            self.success("Exported"),
            draft.display(),
            provenance.display()
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Cut text to `max` characters, marking the cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
