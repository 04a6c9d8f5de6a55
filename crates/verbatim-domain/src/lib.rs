//! Verbatim Domain Layer
//!
//! This crate contains the core value types and collaborator seams for Verbatim.
//! It keeps its dependencies minimal and defines the fundamental concepts that
//! every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **Quote**: A delimited span of a draft claimed to originate from a source
//! - **Supporting Source**: A URL or file added alongside the interview transcript
//! - **Source Reference**: Which corpus member a verified quote was found in
//! - **Tone**: The editorial direction used when generating a draft
//! - **Workflow State**: Typed state handed from one workflow stage to the next
//!
//! ## Architecture
//!
//! - Pure value types and state transitions only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for every external collaborator (LLM, verification,
//!   key-point extraction, draft generation)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod quote;
pub mod source;
pub mod tone;
pub mod traits;
pub mod workflow;

// Re-exports for convenience
pub use quote::Quote;
pub use source::{SourceId, SourceKind, SourceRef, SupportingSource};
pub use tone::Tone;
pub use traits::{CollaboratorError, ExternalVerdict};
pub use workflow::{WorkflowError, WorkflowStage, WorkflowState};
