//! Source module - members of the verification corpus

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label surfaced for the interview transcript
pub const TRANSCRIPT_LABEL: &str = "Interview Transcript";

/// Label surfaced for a quote that was checked and not found in any source
///
/// Distinct from an empty string, which downstream consumers read as
/// "not yet checked".
pub const NOT_FOUND_LABEL: &str = "Not Found";

/// Unique identifier for a supporting source based on UUIDv7
///
/// UUIDv7 keeps identifiers sortable by creation time, which mirrors the
/// order sources were added to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(uuid::Uuid);

impl SourceId {
    /// Generate a new UUIDv7-based SourceId
    ///
    /// # Examples
    ///
    /// ```
    /// use verbatim_domain::SourceId;
    ///
    /// let a = SourceId::new();
    /// let b = SourceId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create a SourceId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }

    /// Parse a SourceId from its hyphenated string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid source id: {}", e))
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of supporting source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A web link
    Url,
    /// An uploaded document
    File,
}

impl SourceKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Url => "url",
            SourceKind::File => "file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source added alongside the transcript
///
/// The textual body may be missing (a bare URL that was never fetched, a
/// file whose text was never extracted). Such a source is identity-only:
/// it is listed in citations but can never be the match for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingSource {
    /// Stable identifier
    pub id: SourceId,

    /// URL or file
    pub kind: SourceKind,

    /// Display name (file name, or the URL itself)
    pub name: String,

    /// Locator value (the URL, or the file name)
    pub value: String,

    /// Extracted text body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SupportingSource {
    /// Create a URL source with no fetched content
    pub fn url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            id: SourceId::new(),
            kind: SourceKind::Url,
            name: url.clone(),
            value: url,
            content: None,
        }
    }

    /// Create a file source with no extracted content
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: SourceId::new(),
            kind: SourceKind::File,
            name: name.clone(),
            value: name,
            content: None,
        }
    }

    /// Attach the source's text body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Whether this source has text that quotes can be matched against
    pub fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .map_or(false, |c| !c.trim().is_empty())
    }

    /// Human-readable label: the URL for links, the name for files
    pub fn label(&self) -> &str {
        match self.kind {
            SourceKind::Url => &self.value,
            SourceKind::File if self.name.is_empty() => "Document",
            SourceKind::File => &self.name,
        }
    }
}

/// Reference to the corpus member a quote was matched in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRef {
    /// The interview transcript
    Transcript,

    /// A supporting source
    Supporting {
        /// Identifier of the source
        id: SourceId,
        /// 1-based position in the order sources were added
        index: usize,
        /// Display label at the time of matching
        label: String,
    },
}

impl SourceRef {
    /// Label shown to readers of the report
    pub fn label(&self) -> &str {
        match self {
            SourceRef::Transcript => TRANSCRIPT_LABEL,
            SourceRef::Supporting { label, .. } => label,
        }
    }

    /// Whether this reference points at the transcript
    pub fn is_transcript(&self) -> bool {
        matches!(self, SourceRef::Transcript)
    }
}
