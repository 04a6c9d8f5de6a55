//! Snippet Builder: bounded context around a located match

use serde::{Deserialize, Serialize};

/// Marker added where a snippet was cut short of the source text
pub const ELLIPSIS: &str = "...";

/// Excerpt of source text around a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Context window, with ellipsis markers where truncated
    pub text: String,

    /// 1-based line of the match start within the source text
    pub line: usize,
}

impl Snippet {
    /// Approximate location for human navigation
    pub fn location_hint(&self) -> String {
        format!("line {}", self.line)
    }
}

/// Builds context windows of a fixed margin on each side of a match
#[derive(Debug, Clone, Copy)]
pub struct SnippetBuilder {
    margin: usize,
}

impl SnippetBuilder {
    /// Create a builder keeping `margin` characters either side of a match
    pub fn new(margin: usize) -> Self {
        Self { margin }
    }

    /// Margin in characters
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Extract the snippet for a match of `len` bytes at byte `offset`
    ///
    /// Offsets past the end of the text are clamped and offsets inside a
    /// multi-byte character are moved back to its start, so this never
    /// reads out of bounds.
    pub fn build(&self, source: &str, offset: usize, len: usize) -> Snippet {
        let start = floor_char_boundary(source, offset);
        let end = floor_char_boundary(source, offset.saturating_add(len)).max(start);

        let window_start = source[..start]
            .char_indices()
            .rev()
            .take(self.margin)
            .last()
            .map_or(start, |(i, _)| i);
        let window_end = source[end..]
            .char_indices()
            .nth(self.margin)
            .map_or(source.len(), |(i, _)| end + i);

        let mut text = String::with_capacity(window_end - window_start + 2 * ELLIPSIS.len());
        if window_start > 0 {
            text.push_str(ELLIPSIS);
        }
        text.push_str(&source[window_start..window_end]);
        if window_end < source.len() {
            text.push_str(ELLIPSIS);
        }

        Snippet {
            text,
            line: source[..start].matches('\n').count() + 1,
        }
    }
}

impl Default for SnippetBuilder {
    fn default() -> Self {
        Self::new(50)
    }
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
