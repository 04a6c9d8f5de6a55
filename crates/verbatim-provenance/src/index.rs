//! Source Corpus Index
//!
//! Holds case-folded copies of the transcript and every supporting source,
//! in precedence order: the transcript first, then supporting sources in
//! the order they were added. Matching is exact substring containment on
//! the folded text; offsets are mapped back to the original text so that
//! snippets keep their original casing.

use std::ops::Range;
use verbatim_domain::{SourceId, SourceRef, SupportingSource};

/// Text with a case-insensitive search basis
///
/// `origins[i]` is the byte offset, in the original text, of the character
/// that produced folded byte `i`. Lowercasing can change byte lengths
/// (`İ` folds to two characters), so offsets cannot be shared directly.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    original: String,
    folded: String,
    origins: Vec<usize>,
}

impl NormalizedText {
    /// Fold a text for matching, keeping the original alongside
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        let mut folded = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());

        for (offset, c) in original.char_indices() {
            for lower in c.to_lowercase() {
                let before = folded.len();
                folded.push(lower);
                origins.extend(std::iter::repeat(offset).take(folded.len() - before));
            }
        }

        Self {
            original,
            folded,
            origins,
        }
    }

    /// The text as supplied
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether the text has nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.original.trim().is_empty()
    }

    /// Byte range of the first case-insensitive occurrence of `needle` in
    /// the original text
    pub fn find(&self, needle: &str) -> Option<Range<usize>> {
        let needle = fold(needle);
        if needle.is_empty() {
            return None;
        }

        let start = self.folded.find(&needle)?;
        let last = start + needle.len() - 1;

        let original_start = self.origins[start];
        let last_char_start = self.origins[last];
        let last_char_len = self.original[last_char_start..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);

        Some(original_start..last_char_start + last_char_len)
    }
}

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Key used to address one member of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKey {
    /// The interview transcript
    Transcript,
    /// A supporting source by identifier
    Supporting(SourceId),
}

/// One member of the corpus
#[derive(Debug, Clone)]
pub struct IndexedSource {
    reference: SourceRef,
    aliases: Vec<String>,
    text: Option<NormalizedText>,
}

impl IndexedSource {
    /// Reference recorded on a match in this source
    pub fn reference(&self) -> &SourceRef {
        &self.reference
    }

    /// Searchable text, or `None` for identity-only members
    pub fn text(&self) -> Option<&NormalizedText> {
        self.text.as_ref()
    }

    /// Whether quotes can be matched against this member
    pub fn is_searchable(&self) -> bool {
        self.text.is_some()
    }

    fn key(&self) -> SourceKey {
        match &self.reference {
            SourceRef::Transcript => SourceKey::Transcript,
            SourceRef::Supporting { id, .. } => SourceKey::Supporting(*id),
        }
    }
}

/// Case-insensitive index over the transcript and supporting sources
///
/// The index owns its copies of the source text; the caller's transcript
/// and sources are never modified.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    entries: Vec<IndexedSource>,
}

impl SourceIndex {
    /// Build the index
    ///
    /// A blank transcript and sources without a text body are indexed as
    /// identity-only members: they are listed but never matched.
    pub fn build(transcript: &str, sources: &[SupportingSource]) -> Self {
        let mut entries = Vec::with_capacity(sources.len() + 1);

        let transcript = NormalizedText::new(transcript);
        entries.push(IndexedSource {
            reference: SourceRef::Transcript,
            aliases: Vec::new(),
            text: (!transcript.is_blank()).then_some(transcript),
        });

        for (position, source) in sources.iter().enumerate() {
            let text = source
                .content
                .as_deref()
                .filter(|_| source.has_content())
                .map(NormalizedText::new);

            let mut aliases = vec![fold(source.name.trim()), fold(source.value.trim())];
            aliases.push(fold(source.label()));
            aliases.retain(|a| !a.is_empty());
            aliases.dedup();

            entries.push(IndexedSource {
                reference: SourceRef::Supporting {
                    id: source.id,
                    index: position + 1,
                    label: source.label().to_string(),
                },
                aliases,
                text,
            });
        }

        Self { entries }
    }

    /// Every member in precedence order, including identity-only ones
    pub fn sources(&self) -> &[IndexedSource] {
        &self.entries
    }

    /// Members that can match, in precedence order
    pub fn searchable(&self) -> impl Iterator<Item = &IndexedSource> {
        self.entries.iter().filter(|e| e.is_searchable())
    }

    /// Whether any member has text to search
    pub fn is_searchable(&self) -> bool {
        self.entries.iter().any(IndexedSource::is_searchable)
    }

    /// Look up a member by key
    pub fn get(&self, key: SourceKey) -> Option<&IndexedSource> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Byte range of `needle` within one member's original text
    ///
    /// `None` when the member is unknown, identity-only, or does not
    /// contain the needle.
    pub fn find_occurrence(&self, key: SourceKey, needle: &str) -> Option<Range<usize>> {
        self.get(key)?.text()?.find(needle)
    }

    /// Resolve a free-text source label, as reported by an external
    /// service, to a member of the index
    ///
    /// Tried in order: an exact (case-insensitive) name or value,
    /// `SUPPORTING SOURCE N`, anything mentioning "transcript", and a label
    /// that contains a source's value.
    pub fn resolve_label(&self, label: &str) -> Option<&IndexedSource> {
        let wanted = fold(label.trim());
        if wanted.is_empty() {
            return None;
        }

        let supporting = || self.entries.iter().skip(1);

        if let Some(entry) = supporting().find(|e| e.aliases.iter().any(|a| *a == wanted)) {
            return Some(entry);
        }

        if let Some(n) = supporting_source_number(&wanted) {
            if let Some(entry) = self.entries.get(n).filter(|_| n > 0) {
                return Some(entry);
            }
        }

        if wanted.contains("transcript") {
            return self.get(SourceKey::Transcript);
        }

        supporting().find(|e| e.aliases.iter().any(|a| wanted.contains(a.as_str())))
    }
}

/// Parse the `N` out of "supporting source N ..."
fn supporting_source_number(label: &str) -> Option<usize> {
    const MARKER: &str = "supporting source";
    let rest = &label[label.find(MARKER)? + MARKER.len()..];
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> Vec<SupportingSource> {
        vec![
            SupportingSource::url("https://example.com/report"),
            SupportingSource::file("memo.txt").with_content("The Board approved the merger."),
        ]
    }

    #[test]
    fn test_case_insensitive_find_keeps_original_offsets() {
        let text = NormalizedText::new("Then she said WE SHIP ON FRIDAYS.");
        let range = text.find("we ship on fridays").unwrap();
        assert_eq!(&text.original()[range], "WE SHIP ON FRIDAYS");
    }

    #[test]
    fn test_find_with_multibyte_text() {
        let text = NormalizedText::new("Ärger im Büro: Die Übernahme ist geplatzt.");
        let range = text.find("die übernahme").unwrap();
        assert_eq!(&text.original()[range], "Die Übernahme");
    }

    #[test]
    fn test_find_across_length_changing_fold() {
        // 'İ' lowercases to two characters
        let text = NormalizedText::new("xİstanbul calling");
        let range = text.find("calling").unwrap();
        assert_eq!(&text.original()[range], "calling");
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(NormalizedText::new("anything").find("").is_none());
    }

    #[test]
    fn test_identity_only_members_are_listed_not_searched() {
        let sources = sources();
        let index = SourceIndex::build("", &sources);

        assert_eq!(index.sources().len(), 3);
        assert_eq!(index.searchable().count(), 1);
        assert!(index.is_searchable());
        assert!(index
            .find_occurrence(SourceKey::Supporting(sources[0].id), "example")
            .is_none());
        assert!(index
            .find_occurrence(SourceKey::Supporting(sources[1].id), "board approved")
            .is_some());
    }

    #[test]
    fn test_blank_corpus_is_not_searchable() {
        let index = SourceIndex::build("  \n ", &[SupportingSource::url("https://a.example")]);
        assert!(!index.is_searchable());
        assert!(index.find_occurrence(SourceKey::Transcript, "anything").is_none());
    }

    #[test]
    fn test_precedence_order() {
        let index = SourceIndex::build("transcript text", &sources());
        let refs: Vec<_> = index.sources().iter().map(|e| e.reference().clone()).collect();
        assert!(refs[0].is_transcript());
        assert!(matches!(refs[2], SourceRef::Supporting { index: 2, .. }));
    }

    #[test]
    fn test_resolve_label() {
        let sources = sources();
        let index = SourceIndex::build("transcript text", &sources);

        let resolved = |label: &str| index.resolve_label(label).map(|e| e.reference().clone());

        assert_eq!(resolved("Interview Transcript"), Some(SourceRef::Transcript));
        assert_eq!(resolved("MEMO.TXT").unwrap().label(), "memo.txt");
        assert_eq!(
            resolved("SUPPORTING SOURCE 1 (url): https://example.com/report")
                .unwrap()
                .label(),
            "https://example.com/report"
        );
        assert_eq!(resolved("Supporting Source 2").unwrap().label(), "memo.txt");
        assert_eq!(resolved("from memo.txt, page 2").unwrap().label(), "memo.txt");
        assert!(resolved("Supporting Source 9").is_none());
        assert!(resolved("Wikipedia").is_none());
        assert!(resolved("").is_none());
    }

    #[test]
    fn test_source_named_like_transcript_resolves_to_itself() {
        let sources = vec![
            SupportingSource::file("transcript-notes.txt").with_content("Notes from the call."),
        ];
        let index = SourceIndex::build("Host: hello there.", &sources);

        let resolved = |label: &str| index.resolve_label(label).map(|e| e.reference().clone());

        assert_eq!(
            resolved("transcript-notes.txt").unwrap().label(),
            "transcript-notes.txt"
        );
        assert_eq!(
            resolved("SUPPORTING SOURCE 1 (file): transcript-notes.txt")
                .unwrap()
                .label(),
            "transcript-notes.txt"
        );
        assert_eq!(resolved("Interview Transcript"), Some(SourceRef::Transcript));
        assert_eq!(resolved("TRANSCRIPT"), Some(SourceRef::Transcript));
    }
}
