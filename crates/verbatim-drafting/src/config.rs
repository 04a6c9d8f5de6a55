//! Configuration for the drafting stages

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for key-point extraction and draft generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingConfig {
    /// Longest transcript accepted for extraction (characters)
    pub max_transcript_chars: usize,

    /// Transcript chunk size sent to the model in one call (characters)
    pub max_chunk_size: usize,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Key points kept after merging and de-duplication
    pub max_key_points: usize,
}

impl DraftingConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_transcript_chars == 0 {
            return Err("max_transcript_chars must be greater than 0".to_string());
        }
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.max_chunk_size > self.max_transcript_chars {
            return Err("max_chunk_size cannot exceed max_transcript_chars".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.max_key_points == 0 {
            return Err("max_key_points must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for DraftingConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_transcript_chars: 50_000,
            max_chunk_size: 10_000,
            generation_timeout_secs: 120,
            max_key_points: 10,
        }
    }
}

impl DraftingConfig {
    /// Aggressive preset: shorter timeouts, smaller chunks for faster processing
    pub fn aggressive() -> Self {
        Self {
            max_transcript_chars: 20_000,
            max_chunk_size: 5_000,
            generation_timeout_secs: 60,
            max_key_points: 7,
        }
    }

    /// Lenient preset: longer timeouts, larger chunks for better quality
    pub fn lenient() -> Self {
        Self {
            max_transcript_chars: 100_000,
            max_chunk_size: 20_000,
            generation_timeout_secs: 300,
            max_key_points: 15,
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
