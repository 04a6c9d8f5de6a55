//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use crate::state::ProjectFile;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use verbatim_provenance::{LlmQuoteVerifier, VerificationReport, Verifier};

/// Execute the verify command.
pub async fn execute_verify(
    args: VerifyArgs,
    project: &ProjectFile,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let verifier = build_verifier(config, args.llm)?;
    let report = verify_project(project, &verifier, args.draft.as_deref()).await?;

    println!("{}", formatter.format_report(&report)?);

    if formatter.format() == OutputFormat::Table {
        let snippets = formatter.format_snippets(&report);
        if !snippets.is_empty() {
            println!();
            println!("{}", snippets);
        }
    }

    Ok(())
}

/// Build the verifier from config, with the language model check when asked.
pub fn build_verifier(config: &Config, use_llm: bool) -> Result<Verifier> {
    let verifier = Verifier::new(config.verification.clone())?;
    if !use_llm {
        return Ok(verifier);
    }

    let provider = config.llm.provider()?;
    Ok(verifier.with_external(Arc::new(LlmQuoteVerifier::new(provider))))
}

/// Verify the project draft, or a draft file against the project sources.
///
/// Verifying the project draft moves the project to review.
pub async fn verify_project(
    project: &ProjectFile,
    verifier: &Verifier,
    draft_file: Option<&Path>,
) -> Result<VerificationReport> {
    let mut state = project.load()?;

    if let Some(path) = draft_file {
        let draft = fs::read_to_string(path)?;
        return Ok(verifier
            .verify(&draft, &state.transcript, &state.supporting_sources)
            .await?);
    }

    state.require_draft()?;
    let report = verifier.verify_state(&state).await?;
    state.begin_review()?;
    project.save(&state)?;
    Ok(report)
}
