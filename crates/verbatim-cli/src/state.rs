//! Project state persisted between commands.

use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use verbatim_domain::WorkflowState;
use verbatim_drafting::snapshot;

/// The versioned snapshot file holding a project's workflow state.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
}

impl ProjectFile {
    /// Use the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a project has been initialised here.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the project state.
    pub fn load(&self) -> Result<WorkflowState> {
        if !self.exists() {
            return Err(CliError::NoProject(self.path.display().to_string()));
        }

        let json = fs::read_to_string(&self.path)?;
        let state = snapshot::decode(&json)?;
        debug!(path = %self.path.display(), stage = state.stage.as_str(), "Project loaded");
        Ok(state)
    }

    /// Write the project state.
    pub fn save(&self, state: &WorkflowState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, snapshot::encode(state)?)?;
        debug!(path = %self.path.display(), stage = state.stage.as_str(), "Project saved");
        Ok(())
    }

    /// Delete the snapshot. Returns false if there was nothing to delete.
    pub fn remove(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file = ProjectFile::new(dir.path().join("state.json"));

        let mut state = WorkflowState::new("Jane: We ship on Fridays.");
        state.set_key_points(vec!["Fridays".into()]);
        file.save(&state).unwrap();

        assert!(file.exists());
        assert_eq!(file.load().unwrap(), state);
    }

    #[test]
    fn test_missing_project() {
        let dir = tempdir().unwrap();
        let file = ProjectFile::new(dir.path().join("state.json"));
        assert!(matches!(file.load(), Err(CliError::NoProject(_))));
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let file = ProjectFile::new(dir.path().join("state.json"));

        assert!(!file.remove().unwrap());
        file.save(&WorkflowState::new("t")).unwrap();
        assert!(file.remove().unwrap());
        assert!(!file.exists());
    }
}
