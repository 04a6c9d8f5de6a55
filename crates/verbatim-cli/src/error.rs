//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Verification or export error
    #[error(transparent)]
    Provenance(#[from] verbatim_provenance::ProvenanceError),

    /// Key-point or draft stage error
    #[error(transparent)]
    Drafting(#[from] verbatim_drafting::DraftingError),

    /// Workflow precondition not met
    #[error(transparent)]
    Workflow(#[from] verbatim_domain::WorkflowError),

    /// LLM provider could not be set up
    #[error("LLM error: {0}")]
    Llm(#[from] verbatim_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No project in the working directory
    #[error("No project found at {0}. Use 'init' command first.")]
    NoProject(String),
}
