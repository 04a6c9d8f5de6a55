//! Verbatim Drafting
//!
//! The workflow stages that call a text generation service: key-point
//! extraction from the interview transcript and tone-directed draft
//! generation from the reviewed key points.
//!
//! # Architecture
//!
//! ```text
//! WorkflowState → stages::extract_key_points → KeyPointExtractor → key points
//! WorkflowState → stages::generate_draft     → DraftGenerator    → draft
//! ```
//!
//! The collaborators are the domain traits; `LlmKeyPointExtractor` and
//! `LlmDraftGenerator` implement them over any `LlmProvider`. Generation
//! has no local fallback, so failures surface as retryable errors.
//!
//! # Example Usage
//!
//! ```
//! use verbatim_drafting::{stages, DraftingConfig, LlmKeyPointExtractor};
//! use verbatim_domain::WorkflowState;
//! use verbatim_llm::MockProvider;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("- The company started in a garage");
//! let extractor = LlmKeyPointExtractor::new(llm, DraftingConfig::default())?;
//!
//! let mut state = WorkflowState::new("Jane: We started in a garage.");
//! stages::extract_key_points(&mut state, &extractor).await?;
//!
//! assert_eq!(state.key_points, vec!["The company started in a garage"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod chunking;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod snapshot;
pub mod stages;

// Re-exports
pub use chunking::TranscriptChunker;
pub use config::DraftingConfig;
pub use error::DraftingError;
pub use generator::{LlmDraftGenerator, LlmKeyPointExtractor};
pub use parser::parse_key_points;
