//! Tone module - editorial direction for generated drafts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone of a generated draft
///
/// Each tone carries a fixed style instruction handed to the text
/// generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Authoritative, objective business writing
    #[default]
    Professional,

    /// Friendly, speaks directly to the reader
    Conversational,

    /// Data-driven, focused on implications
    Analytical,

    /// Narrative, vivid and emotional
    Storytelling,
}

impl Tone {
    /// All tones, in display order
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Conversational,
        Tone::Analytical,
        Tone::Storytelling,
    ];

    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Analytical => "analytical",
            Tone::Storytelling => "storytelling",
        }
    }

    /// Parse a tone from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "conversational" => Some(Tone::Conversational),
            "analytical" => Some(Tone::Analytical),
            "storytelling" => Some(Tone::Storytelling),
            _ => None,
        }
    }

    /// Style instruction given to the writer
    pub fn instruction(&self) -> &'static str {
        match self {
            Tone::Professional => {
                "Write in a professional, authoritative tone suitable for business publications. \
                 Use clear, direct language and maintain objectivity."
            }
            Tone::Conversational => {
                "Write in a friendly, conversational tone as if speaking directly to the reader. \
                 Use accessible language and personal pronouns."
            }
            Tone::Analytical => {
                "Write in an analytical, data-driven tone. Focus on insights, implications, \
                 and logical conclusions. Use precise language."
            }
            Tone::Storytelling => {
                "Write in an engaging, narrative style that tells a story. Use vivid \
                 descriptions and create emotional connections with readers."
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tone: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.as_str()), Some(tone));
        }
        assert_eq!(Tone::parse("  Analytical "), Some(Tone::Analytical));
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_instructions_are_distinct() {
        let mut seen: Vec<&str> = Tone::ALL.iter().map(|t| t.instruction()).collect();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
