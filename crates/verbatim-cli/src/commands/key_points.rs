//! Key-point commands implementation.

use crate::cli::KeyPointsCommand;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::state::ProjectFile;
use verbatim_domain::traits::KeyPointExtractor;
use verbatim_domain::WorkflowState;
use verbatim_drafting::{stages, LlmKeyPointExtractor};

/// Execute a key-point subcommand.
pub async fn execute_key_points(
    command: KeyPointsCommand,
    project: &ProjectFile,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut state = project.load()?;

    match command {
        KeyPointsCommand::List => {}
        KeyPointsCommand::Extract => {
            let extractor =
                LlmKeyPointExtractor::new(config.llm.provider()?, config.drafting.clone())?;
            println!("{}", formatter.info("Analyzing interview..."));

            let count = extract(&mut state, &extractor, project).await?;
            println!(
                "{}",
                formatter.success(&format!("Extracted {} key point(s)", count))
            );
        }
        edit => {
            let message = apply_edit(&mut state, edit)?;
            project.save(&state)?;
            println!("{}", formatter.success(&message));
        }
    }

    println!("{}", formatter.format_key_points(&state.key_points)?);
    Ok(())
}

/// Run extraction and save the new key points.
pub async fn extract(
    state: &mut WorkflowState,
    extractor: &dyn KeyPointExtractor,
    project: &ProjectFile,
) -> Result<usize> {
    let count = stages::extract_key_points(state, extractor).await?;
    project.save(state)?;
    Ok(count)
}

/// Apply a review edit, taking 1-based numbers. Returns a confirmation message.
pub fn apply_edit(state: &mut WorkflowState, command: KeyPointsCommand) -> Result<String> {
    let len = state.key_points.len();

    let message = match command {
        KeyPointsCommand::Edit { index, text } => {
            state.edit_key_point(to_index(index, len)?, text)?;
            format!("Key point {} updated", index)
        }
        KeyPointsCommand::Delete { index } => {
            let removed = state.delete_key_point(to_index(index, len)?)?;
            format!("Deleted: {}", removed)
        }
        KeyPointsCommand::Up { index } => {
            state.move_key_point_up(to_index(index, len)?)?;
            format!("Key point {} moved up", index)
        }
        KeyPointsCommand::Down { index } => {
            state.move_key_point_down(to_index(index, len)?)?;
            format!("Key point {} moved down", index)
        }
        KeyPointsCommand::Add { text } => {
            state.add_key_point(text);
            format!("Key point {} added", state.key_points.len())
        }
        KeyPointsCommand::Extract | KeyPointsCommand::List => {
            return Err(CliError::InvalidInput(
                "Not a key-point edit".to_string(),
            ))
        }
    };

    Ok(message)
}

/// Convert a displayed number to a list index.
fn to_index(number: usize, len: usize) -> Result<usize> {
    if number == 0 || number > len {
        return Err(CliError::InvalidInput(format!(
            "Key point {} does not exist ({} key points)",
            number, len
        )));
    }
    Ok(number - 1)
}
