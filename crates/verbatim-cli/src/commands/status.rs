//! Status command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::state::ProjectFile;

/// Execute the status command.
pub fn execute_status(project: &ProjectFile, formatter: &Formatter) -> Result<()> {
    let state = project.load()?;
    println!("{}", formatter.format_project(&state)?);
    Ok(())
}
