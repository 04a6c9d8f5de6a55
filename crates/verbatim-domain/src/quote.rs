//! Quote module - delimited spans lifted from a draft

use serde::{Deserialize, Serialize};

/// Minimum length of a quotation, in characters after trimming.
///
/// Spans strictly shorter than this are emphasis or inline terms
/// (`"hi"`, `'API'`) rather than quotations that need provenance.
/// A span of exactly this length is kept.
pub const MIN_QUOTE_CHARS: usize = 10;

/// A quoted span found in a draft
///
/// Quotes are immutable once extracted; the matcher and report refer to
/// them, they never rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted text with delimiters stripped and surrounding whitespace trimmed
    pub text: String,

    /// Byte offset of the opening delimiter within the draft
    pub start: usize,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }

    /// Length of the quote text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the quote is long enough to need provenance
    pub fn meets_threshold(&self, min_chars: usize) -> bool {
        self.char_len() >= min_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        let quote = Quote::new("naïve café", 0);
        assert_eq!(quote.char_len(), 10);
        assert!(quote.text.len() > 10);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(Quote::new("a disaster", 0).meets_threshold(MIN_QUOTE_CHARS));
        assert!(!Quote::new("a disaste", 0).meets_threshold(MIN_QUOTE_CHARS));
    }
}
