//! Reset command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::state::ProjectFile;

/// Execute the reset command.
pub fn execute_reset(project: &ProjectFile, formatter: &Formatter) -> Result<()> {
    if project.remove()? {
        println!("{}", formatter.success("Project discarded. Run 'init' to start over."));
    } else {
        println!("{}", formatter.info("No project to reset"));
    }
    Ok(())
}
