//! Quote Matcher
//!
//! Local substring policy: the transcript is checked first, then supporting
//! sources in the order they were added. The first member containing the
//! quote wins, so a quote found in several supporting sources resolves to
//! the earliest-added one.

use crate::index::{IndexedSource, SourceIndex};
use crate::snippet::{Snippet, SnippetBuilder};
use serde::Serialize;
use verbatim_domain::source::NOT_FOUND_LABEL;
use verbatim_domain::{Quote, SourceRef};

/// How a result was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Local case-insensitive substring search
    Local,
    /// Verdict from the external verification service
    External,
    /// Nothing in the corpus to compare against
    EmptyCorpus,
}

/// Outcome of matching one quote against the corpus
///
/// Fields are private so that a snippet or location hint can only exist on
/// a verified result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_source: Option<SourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_hint: Option<String>,
    method: MatchMethod,
}

impl MatchResult {
    /// A quote located in `source`
    pub fn verified(
        source: SourceRef,
        snippet: Option<String>,
        location_hint: Option<String>,
        method: MatchMethod,
    ) -> Self {
        Self {
            verified: true,
            matched_source: Some(source),
            snippet,
            location_hint,
            method,
        }
    }

    /// A quote located locally, with its snippet
    pub fn located(source: SourceRef, snippet: Snippet) -> Self {
        let hint = snippet.location_hint();
        Self::verified(source, Some(snippet.text), Some(hint), MatchMethod::Local)
    }

    /// A quote that was checked and not found
    pub fn not_found(method: MatchMethod) -> Self {
        Self {
            verified: false,
            matched_source: None,
            snippet: None,
            location_hint: None,
            method,
        }
    }

    /// Whether the quote was substantiated
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Corpus member the quote was found in
    pub fn matched_source(&self) -> Option<&SourceRef> {
        self.matched_source.as_ref()
    }

    /// Context around the match
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    /// Approximate position of the match, e.g. "line 3"
    pub fn location_hint(&self) -> Option<&str> {
        self.location_hint.as_deref()
    }

    /// How the result was reached
    pub fn method(&self) -> MatchMethod {
        self.method
    }

    /// Label for reports: the matched source, or "Not Found"
    pub fn source_label(&self) -> &str {
        self.matched_source
            .as_ref()
            .map_or(NOT_FOUND_LABEL, SourceRef::label)
    }
}

/// Deterministic local matching strategy
///
/// Holds no state between calls; matching the same quote against the same
/// index always gives the same result.
#[derive(Debug, Clone, Default)]
pub struct LocalMatcher {
    snippets: SnippetBuilder,
}

impl LocalMatcher {
    /// Create a matcher producing snippets with the given builder
    pub fn new(snippets: SnippetBuilder) -> Self {
        Self { snippets }
    }

    /// Match one quote
    ///
    /// An index with no searchable text yields an unverified result without
    /// any comparison.
    pub fn match_quote(&self, quote: &Quote, index: &SourceIndex) -> MatchResult {
        if !index.is_searchable() {
            return MatchResult::not_found(MatchMethod::EmptyCorpus);
        }

        index
            .searchable()
            .find_map(|entry| {
                self.locate(quote, entry)
                    .map(|snippet| MatchResult::located(entry.reference().clone(), snippet))
            })
            .unwrap_or_else(|| MatchResult::not_found(MatchMethod::Local))
    }

    /// Snippet for the quote within one member, if it occurs there
    pub fn locate(&self, quote: &Quote, entry: &IndexedSource) -> Option<Snippet> {
        let text = entry.text()?;
        let range = text.find(&quote.text)?;
        Some(self.snippets.build(text.original(), range.start, range.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbatim_domain::SupportingSource;

    fn quote(text: &str) -> Quote {
        Quote::new(text, 0)
    }

    #[test]
    fn test_transcript_precedence() {
        let sources =
            vec![SupportingSource::file("notes.txt").with_content("we ship on Fridays, always")];
        let index = SourceIndex::build("Yes, we ship on Fridays.", &sources);

        let result = LocalMatcher::default().match_quote(&quote("we ship on Fridays"), &index);
        assert!(result.is_verified());
        assert_eq!(result.matched_source(), Some(&SourceRef::Transcript));
        assert_eq!(result.source_label(), "Interview Transcript");
        assert_eq!(result.method(), MatchMethod::Local);
    }

    #[test]
    fn test_first_added_source_wins() {
        let first = SupportingSource::file("a.txt").with_content("It was a breakthrough moment.");
        let second = SupportingSource::file("b.txt").with_content("A breakthrough moment indeed.");
        let first_id = first.id;
        let index = SourceIndex::build("unrelated", &[first, second]);

        let result = LocalMatcher::default().match_quote(&quote("breakthrough moment"), &index);
        match result.matched_source() {
            Some(SourceRef::Supporting { id, index, .. }) => {
                assert_eq!(*id, first_id);
                assert_eq!(*index, 1);
            }
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn test_identity_only_source_never_matches() {
        let sources = vec![SupportingSource::url("https://example.com/breakthrough-moment")];
        let index = SourceIndex::build("transcript", &sources);

        let result =
            LocalMatcher::default().match_quote(&quote("example.com/breakthrough-moment"), &index);
        assert!(!result.is_verified());
        assert_eq!(result.source_label(), NOT_FOUND_LABEL);
    }

    #[test]
    fn test_not_found_has_no_snippet() {
        let index = SourceIndex::build("The committee met on Tuesday.", &[]);
        let result = LocalMatcher::default().match_quote(&quote("a total disaster"), &index);

        assert!(!result.is_verified());
        assert!(result.snippet().is_none());
        assert!(result.location_hint().is_none());
        assert!(result.matched_source().is_none());
        assert_eq!(result.method(), MatchMethod::Local);
    }

    #[test]
    fn test_empty_corpus_skips_comparison() {
        let index = SourceIndex::build("   ", &[]);
        let result = LocalMatcher::default().match_quote(&quote("a disaster."), &index);
        assert_eq!(result, MatchResult::not_found(MatchMethod::EmptyCorpus));
    }

    #[test]
    fn test_snippet_and_hint_on_match() {
        let index = SourceIndex::build("Intro.\nThe CEO said WE SHIP ON FRIDAYS today.", &[]);
        let result = LocalMatcher::new(SnippetBuilder::new(8))
            .match_quote(&quote("we ship on fridays"), &index);

        assert_eq!(result.snippet(), Some("...EO said WE SHIP ON FRIDAYS today."));
        assert_eq!(result.location_hint(), Some("line 2"));
    }
}
