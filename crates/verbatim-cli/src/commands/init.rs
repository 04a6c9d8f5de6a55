//! Init command implementation.

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::state::ProjectFile;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use verbatim_domain::{SupportingSource, WorkflowState};

/// Execute the init command.
pub fn execute_init(args: InitArgs, project: &ProjectFile, formatter: &Formatter) -> Result<()> {
    let state = create_project(args, project)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Project created at {}",
            project.path().display()
        ))
    );
    println!("{}", formatter.format_project(&state)?);

    let reference_only = state
        .supporting_sources
        .iter()
        .filter(|s| !s.has_content())
        .count();
    if reference_only > 0 {
        println!(
            "{}",
            formatter.info(&format!(
                "{} source(s) have no text and will be cited but never matched",
                reference_only
            ))
        );
    }

    Ok(())
}

/// Build the initial workflow state and save it.
pub fn create_project(args: InitArgs, project: &ProjectFile) -> Result<WorkflowState> {
    if project.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "A project already exists at {}; pass --force to replace it",
            project.path().display()
        )));
    }

    let transcript = fs::read_to_string(&args.transcript)?;
    let mut state = WorkflowState::new(transcript);
    state.require_transcript()?;

    for url in args.source_urls {
        state.add_source(SupportingSource::url(url));
    }
    for path in &args.source_files {
        state.add_source(load_source_file(path)?);
    }

    project.save(&state)?;
    info!(
        transcript_chars = state.transcript.chars().count(),
        sources = state.supporting_sources.len(),
        "Project created"
    );

    Ok(state)
}

/// Read a supporting file; files without readable text are kept for citation only.
fn load_source_file(path: &Path) -> Result<SupportingSource> {
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "Source file not found: {}",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let source = SupportingSource::file(name);

    match fs::read_to_string(path) {
        Ok(text) if !text.trim().is_empty() => Ok(source.with_content(text)),
        Ok(_) => Ok(source),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "No text extracted from source file");
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use verbatim_domain::WorkflowError;

    fn args(transcript: PathBuf) -> InitArgs {
        InitArgs {
            transcript,
            source_urls: vec![],
            source_files: vec![],
            force: false,
        }
    }

    #[test]
    fn test_create_project_with_sources() {
        let dir = tempdir().unwrap();
        let transcript = dir.path().join("interview.txt");
        fs::write(&transcript, "Jane: We ship on Fridays.").unwrap();
        let memo = dir.path().join("memo.txt");
        fs::write(&memo, "Release notes for Friday.").unwrap();
        let scan = dir.path().join("scan.pdf");
        fs::write(&scan, b"\xFF\xFE\x00\x9F").unwrap();

        let project = ProjectFile::new(dir.path().join("state.json"));
        let mut init = args(transcript);
        init.source_urls = vec!["https://example.com/a".into()];
        init.source_files = vec![memo, scan];

        let state = create_project(init, &project).unwrap();

        assert_eq!(state.supporting_sources.len(), 3);
        assert_eq!(state.supporting_sources[0].label(), "https://example.com/a");
        assert!(!state.supporting_sources[0].has_content());
        assert_eq!(state.supporting_sources[1].label(), "memo.txt");
        assert!(state.supporting_sources[1].has_content());
        assert!(!state.supporting_sources[2].has_content());
        assert_eq!(project.load().unwrap(), state);
    }

    #[test]
    fn test_blank_transcript_is_rejected() {
        let dir = tempdir().unwrap();
        let transcript = dir.path().join("interview.txt");
        fs::write(&transcript, "  \n").unwrap();
        let project = ProjectFile::new(dir.path().join("state.json"));

        let result = create_project(args(transcript), &project);
        assert!(matches!(
            result,
            Err(CliError::Workflow(WorkflowError::MissingTranscript))
        ));
        assert!(!project.exists());
    }

    #[test]
    fn test_existing_project_needs_force() {
        let dir = tempdir().unwrap();
        let transcript = dir.path().join("interview.txt");
        fs::write(&transcript, "Jane: hello").unwrap();
        let project = ProjectFile::new(dir.path().join("state.json"));

        create_project(args(transcript.clone()), &project).unwrap();
        assert!(matches!(
            create_project(args(transcript.clone()), &project),
            Err(CliError::InvalidInput(_))
        ));

        let mut forced = args(transcript);
        forced.force = true;
        assert!(create_project(forced, &project).is_ok());
    }

    #[test]
    fn test_missing_source_file() {
        let dir = tempdir().unwrap();
        let transcript = dir.path().join("interview.txt");
        fs::write(&transcript, "Jane: hello").unwrap();
        let project = ProjectFile::new(dir.path().join("state.json"));

        let mut init = args(transcript);
        init.source_files = vec![dir.path().join("absent.txt")];
        assert!(matches!(
            create_project(init, &project),
            Err(CliError::InvalidInput(_))
        ));
    }
}
