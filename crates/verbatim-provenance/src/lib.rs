//! Verbatim Provenance Engine
//!
//! Ties every quoted sentence in a draft back to the source passage it came
//! from.
//!
//! # Overview
//!
//! Given a draft and a corpus (the interview transcript plus any supporting
//! sources), the engine finds every quoted span, decides whether the corpus
//! substantiates it, and records where: matched source, surrounding snippet
//! and an approximate line number. The result can be exported as a
//! self-contained provenance record.
//!
//! # Architecture
//!
//! ```text
//! Draft → QuoteExtractor → Quote → LocalMatcher / QuoteVerifier → MatchResult
//!                                        ↑
//!                                   SourceIndex
//! MatchResult → VerificationReport → ProvenanceRecord
//! ```
//!
//! # Key Features
//!
//! - **Delimiter scanning**: straight and typographic quotes, configurable pairs
//! - **Case-insensitive matching**: original casing kept for snippets
//! - **Transcript precedence**: the transcript wins, then sources in the order added
//! - **Pluggable external check**: an injected `QuoteVerifier` with per-call
//!   timeout and per-quote fallback to local matching
//! - **Draft-order reports**: verified/unverified partitions and counts
//!
//! # Example Usage
//!
//! ```
//! use verbatim_provenance::{Verifier, VerifierConfig};
//!
//! let verifier = Verifier::new(VerifierConfig::default()).unwrap();
//! let report = verifier
//!     .verify_local(
//!         r#"As noted, "we ship on Fridays" remains the policy."#,
//!         r#"The engineer said "we ship on Fridays" during the call."#,
//!         &[],
//!     )
//!     .unwrap();
//!
//! assert_eq!(report.summary().verified, 1);
//! assert_eq!(report.entries()[0].result.source_label(), "Interview Transcript");
//! ```

#![warn(missing_docs)]

pub mod collaborator;
pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod matcher;
pub mod parser;
pub mod prompt;
pub mod quotes;
pub mod report;
pub mod snippet;
pub mod verifier;


// Re-exports
pub use collaborator::LlmQuoteVerifier;
pub use config::{DelimiterPair, VerifierConfig};
pub use error::ProvenanceError;
pub use export::{export_markdown, export_provenance, ProvenanceRecord};
pub use index::{SourceIndex, SourceKey};
pub use matcher::{LocalMatcher, MatchMethod, MatchResult};
pub use quotes::QuoteExtractor;
pub use report::{QuoteVerification, ReportSummary, VerificationReport};
pub use snippet::{Snippet, SnippetBuilder};
pub use verifier::Verifier;
