//! Quote extraction from draft text
//!
//! An explicit scan over the draft rather than a single pattern: each
//! opening delimiter is paired with the nearest valid closing delimiter of
//! the same pair, and the scan resumes after the closer.

use crate::config::DelimiterPair;
use tracing::debug;
use verbatim_domain::quote::MIN_QUOTE_CHARS;
use verbatim_domain::Quote;

/// Scans drafts for quoted spans
#[derive(Debug, Clone)]
pub struct QuoteExtractor {
    delimiters: Vec<DelimiterPair>,
}

impl QuoteExtractor {
    /// Create an extractor recognising the given delimiter pairs
    pub fn new(delimiters: Vec<DelimiterPair>) -> Self {
        Self { delimiters }
    }

    /// Extract quotes in draft order
    ///
    /// Unterminated quotes produce nothing. When an asymmetric opener
    /// (`“`) is followed by another opener of the same pair before it is
    /// closed, the outer one is skipped and the inner span is used.
    pub fn extract(&self, draft: &str) -> Vec<Quote> {
        let chars: Vec<(usize, char)> = draft.char_indices().collect();
        let mut quotes = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let Some(pair) = self.opening_pair(&chars, i) else {
                i += 1;
                continue;
            };

            let Some(close) = self.find_close(&chars, i, pair) else {
                i += 1;
                continue;
            };

            let (open_offset, open_char) = chars[i];
            let inner = &draft[open_offset + open_char.len_utf8()..chars[close].0];
            let quote = Quote::new(inner.trim(), open_offset);

            if quote.meets_threshold(MIN_QUOTE_CHARS) {
                quotes.push(quote);
            } else {
                debug!(span = %quote.text, "Skipping short quoted span");
            }

            i = close + 1;
        }

        quotes
    }

    /// The pair whose opener sits at position `i`, if any
    fn opening_pair(&self, chars: &[(usize, char)], i: usize) -> Option<DelimiterPair> {
        let c = chars[i].1;
        self.delimiters
            .iter()
            .find(|pair| pair.open == c && (!pair.word_boundary || is_opening_edge(chars, i)))
            .copied()
    }

    /// Position of the nearest closer for the opener at `open`
    fn find_close(&self, chars: &[(usize, char)], open: usize, pair: DelimiterPair) -> Option<usize> {
        for j in open + 1..chars.len() {
            let c = chars[j].1;
            if c == pair.close && (!pair.word_boundary || is_closing_edge(chars, j)) {
                return Some(j);
            }
            if !pair.is_symmetric() && c == pair.open {
                return None;
            }
        }
        None
    }
}

impl Default for QuoteExtractor {
    fn default() -> Self {
        Self::new(crate::config::default_delimiters())
    }
}

/// An opener must not follow a word character and must be followed by text
fn is_opening_edge(chars: &[(usize, char)], i: usize) -> bool {
    let after_word = i > 0 && chars[i - 1].1.is_alphanumeric();
    let followed_by_text = chars
        .get(i + 1)
        .map_or(false, |(_, c)| !c.is_whitespace());
    !after_word && followed_by_text
}

/// A closer must not be followed by a word character
fn is_closing_edge(chars: &[(usize, char)], j: usize) -> bool {
    chars.get(j + 1).map_or(true, |(_, c)| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(draft: &str) -> Vec<String> {
        QuoteExtractor::default()
            .extract(draft)
            .into_iter()
            .map(|q| q.text)
            .collect()
    }

    #[test]
    fn test_no_delimiters_no_quotes() {
        assert!(texts("Plain prose without any quotation at all.").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_short_spans_are_dropped() {
        assert_eq!(
            texts(r#"He said "hi" and "this is a real quote""#),
            vec!["this is a real quote"]
        );
    }

    #[test]
    fn test_threshold_boundary() {
        // exactly ten characters is kept, nine is dropped
        assert_eq!(texts(r#"a "0123456789" b"#), vec!["0123456789"]);
        assert!(texts(r#"a "012345678" b"#).is_empty());
    }

    #[test]
    fn test_text_is_trimmed_and_offset_recorded() {
        let quotes = QuoteExtractor::default().extract(r#"So: "  we ship on Fridays  ""#);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "we ship on Fridays");
        assert_eq!(quotes[0].start, 4);
    }

    #[test]
    fn test_curly_quotes() {
        assert_eq!(
            texts("She called it \u{201C}a remarkable turnaround\u{201D} today."),
            vec!["a remarkable turnaround"]
        );
        assert_eq!(
            texts("He said \u{2018}we don\u{2019}t ship on Fridays\u{2019} flatly."),
            vec!["we don\u{2019}t ship on Fridays"]
        );
    }

    #[test]
    fn test_apostrophes_are_not_delimiters() {
        assert_eq!(
            texts("It's clear: 'users never read manuals' and that's final."),
            vec!["users never read manuals"]
        );
        assert!(texts("Don't worry, it's fine, they're here.").is_empty());
    }

    #[test]
    fn test_unterminated_quote_produces_nothing() {
        assert!(texts(r#"The draft ends with "an open quotation that never"#).is_empty());
        assert_eq!(
            texts("\u{201C}dangling opener then \"a complete quotation\""),
            vec!["a complete quotation"]
        );
    }

    #[test]
    fn test_nested_openers_skip_outer() {
        assert_eq!(
            texts("\u{201C}outer start \u{201C}the inner quotation\u{201D} tail\u{201D}"),
            vec!["the inner quotation"]
        );
    }

    #[test]
    fn test_inner_quotes_stay_inside_outer_span() {
        assert_eq!(
            texts(r#"He wrote "the team said 'ship it' loudly" later"#),
            vec!["the team said 'ship it' loudly"]
        );
    }

    #[test]
    fn test_order_is_draft_order() {
        let quotes = QuoteExtractor::default()
            .extract(r#""first quotation here" then "second quotation here""#);
        assert_eq!(quotes.len(), 2);
        assert!(quotes[0].start < quotes[1].start);
        assert_eq!(quotes[1].text, "second quotation here");
    }

    #[test]
    fn test_custom_delimiters() {
        let extractor = QuoteExtractor::new(vec![DelimiterPair::new('\u{AB}', '\u{BB}')]);
        let quotes = extractor.extract("Il a dit \u{AB} nous livrons le vendredi \u{BB}.");
        assert_eq!(quotes[0].text, "nous livrons le vendredi");
        assert!(extractor.extract(r#""ignored straight quotes here""#).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::default_delimiters;
    use proptest::prelude::*;

    fn is_delimiter(c: char) -> bool {
        default_delimiters()
            .iter()
            .any(|pair| pair.open == c || pair.close == c)
    }

    proptest! {
        /// Property: a draft with no delimiter characters yields no quotes
        #[test]
        fn test_undelimited_draft_has_no_quotes(draft in "\\PC{0,200}") {
            let draft: String = draft.chars().filter(|c| !is_delimiter(*c)).collect();
            prop_assert!(QuoteExtractor::default().extract(&draft).is_empty());
        }

        /// Property: every extracted span meets the length threshold
        #[test]
        fn test_extracted_spans_meet_threshold(
            draft in "[a-z0-9 .,\n\"'\u{201C}\u{201D}\u{2018}\u{2019}]{0,200}",
        ) {
            for quote in QuoteExtractor::default().extract(&draft) {
                prop_assert!(quote.char_len() >= MIN_QUOTE_CHARS);
                prop_assert_eq!(quote.text.trim(), quote.text.as_str());
            }
        }
    }
}
