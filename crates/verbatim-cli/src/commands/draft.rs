//! Draft commands implementation.

use crate::cli::DraftCommand;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::state::ProjectFile;
use std::fs;
use verbatim_domain::traits::DraftGenerator;
use verbatim_domain::{Tone, WorkflowState};
use verbatim_drafting::{stages, LlmDraftGenerator};

/// Execute a draft subcommand.
pub async fn execute_draft(
    command: DraftCommand,
    project: &ProjectFile,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut state = project.load()?;

    match command {
        DraftCommand::Generate { tone, prompt } => {
            let generator = LlmDraftGenerator::new(config.llm.provider()?, config.drafting.clone())?;
            let tone = Tone::from(tone);
            println!(
                "{}",
                formatter.info(&format!("Writing a {} draft...", tone))
            );

            if let Err(e) = generate(&mut state, &generator, tone, prompt, project).await {
                println!("{}", formatter.error(&e.to_string()));
                return Err(e);
            }

            let words = state
                .draft
                .as_deref()
                .map(|d| d.split_whitespace().count())
                .unwrap_or(0);
            println!(
                "{}",
                formatter.success(&format!("Draft generated ({} words)", words))
            );
            println!(
                "{}",
                formatter.info("Run 'verify' to check the quotations")
            );
        }
        DraftCommand::Set { file } => {
            let draft = fs::read_to_string(&file)?;
            state.set_draft(draft);
            project.save(&state)?;
            println!(
                "{}",
                formatter.success(&format!("Draft replaced from {}", file.display()))
            );
        }
        DraftCommand::Show => {
            println!("{}", state.require_draft()?);
        }
    }

    Ok(())
}

/// Generate a draft and save the project.
///
/// The project is saved even when generation fails so the chosen tone and
/// prompt are kept for a retry.
pub async fn generate(
    state: &mut WorkflowState,
    generator: &dyn DraftGenerator,
    tone: Tone,
    custom_prompt: Option<String>,
    project: &ProjectFile,
) -> Result<()> {
    let result = stages::generate_draft(state, generator, tone, custom_prompt).await;
    project.save(state)?;
    Ok(result?)
}
