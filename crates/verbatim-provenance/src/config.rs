//! Configuration for quote verification

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A pair of characters that open and close a quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    /// Opening delimiter
    pub open: char,

    /// Closing delimiter
    pub close: char,

    /// Only treat the delimiters as quotation marks at word edges
    ///
    /// Needed for characters that double as apostrophes (`don't`, `don’t`):
    /// an opener must not follow a letter or digit, a closer must not be
    /// followed by one.
    #[serde(default)]
    pub word_boundary: bool,
}

impl DelimiterPair {
    /// Create a pair that is recognised anywhere
    pub const fn new(open: char, close: char) -> Self {
        Self {
            open,
            close,
            word_boundary: false,
        }
    }

    /// Create a pair that is only recognised at word edges
    pub const fn at_word_edges(open: char, close: char) -> Self {
        Self {
            open,
            close,
            word_boundary: true,
        }
    }

    /// Whether the same character opens and closes
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Straight and typographic double and single quotes
pub fn default_delimiters() -> Vec<DelimiterPair> {
    vec![
        DelimiterPair::new('"', '"'),
        DelimiterPair::new('\u{201C}', '\u{201D}'),
        DelimiterPair::at_word_edges('\'', '\''),
        DelimiterPair::at_word_edges('\u{2018}', '\u{2019}'),
    ]
}

/// Configuration for the Verifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Characters of context kept on each side of a match in a snippet
    pub snippet_margin_chars: usize,

    /// Maximum time for one external verification call (seconds)
    pub external_timeout_secs: u64,

    /// Quotes checked against the external service at once (1 = sequential)
    pub max_concurrency: usize,

    /// Recognised quotation delimiter pairs
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<DelimiterPair>,
}

impl VerifierConfig {
    /// Get the external call timeout as a Duration
    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.snippet_margin_chars == 0 {
            return Err("snippet_margin_chars must be greater than 0".to_string());
        }
        if self.external_timeout_secs == 0 {
            return Err("external_timeout_secs must be greater than 0".to_string());
        }
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be greater than 0".to_string());
        }
        if self.delimiters.is_empty() {
            return Err("at least one delimiter pair is required".to_string());
        }
        for pair in &self.delimiters {
            if pair.open.is_alphanumeric() || pair.open.is_whitespace()
                || pair.close.is_alphanumeric() || pair.close.is_whitespace()
            {
                return Err(format!(
                    "delimiter pair ({:?}, {:?}) must not be a letter, digit or space",
                    pair.open, pair.close
                ));
            }
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    /// Default configuration: 50-character snippets, 20s per external call,
    /// four quotes in flight
    fn default() -> Self {
        Self {
            snippet_margin_chars: 50,
            external_timeout_secs: 20,
            max_concurrency: 4,
            delimiters: default_delimiters(),
        }
    }
}

impl VerifierConfig {
    /// Strict preset: one quote at a time, short external timeout
    pub fn strict() -> Self {
        Self {
            snippet_margin_chars: 50,
            external_timeout_secs: 10,
            max_concurrency: 1,
            delimiters: default_delimiters(),
        }
    }

    /// Lenient preset: wider snippets, patient external calls, wider fan-out
    pub fn lenient() -> Self {
        Self {
            snippet_margin_chars: 100,
            external_timeout_secs: 60,
            max_concurrency: 8,
            delimiters: default_delimiters(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
