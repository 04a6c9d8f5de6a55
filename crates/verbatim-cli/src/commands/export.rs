//! Export command implementation.

use crate::cli::ExportArgs;
use crate::commands::verify::build_verifier;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::state::ProjectFile;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use verbatim_provenance::export::{DRAFT_FILE_NAME, PROVENANCE_FILE_NAME};
use verbatim_provenance::{export_markdown, export_provenance, ProvenanceRecord, Verifier};

/// Files written by an export.
#[derive(Debug)]
pub struct ExportedFiles {
    /// Markdown draft
    pub draft: PathBuf,
    /// Provenance JSON
    pub provenance: PathBuf,
    /// Record written to the provenance file
    pub record: ProvenanceRecord,
}

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    project: &ProjectFile,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let verifier = build_verifier(config, args.llm)?;
    let exported = export_project(project, &verifier, &args.out).await?;

    println!(
        "{}",
        formatter.exported(&exported.draft, &exported.provenance)
    );

    let unverified = exported.record.quotes.iter().filter(|q| !q.verified).count();
    if unverified > 0 {
        println!(
            "{}",
            formatter.warning(&format!(
                "{} quote(s) could not be verified; see {}",
                unverified,
                exported.provenance.display()
            ))
        );
    }

    Ok(())
}

/// Verify the project draft and write the draft and provenance files to `out`.
pub async fn export_project(
    project: &ProjectFile,
    verifier: &Verifier,
    out: &Path,
) -> Result<ExportedFiles> {
    let mut state = project.load()?;
    let draft = state.require_draft()?;
    let report = verifier.verify_state(&state).await?;

    fs::create_dir_all(out)?;

    let draft_path = out.join(DRAFT_FILE_NAME);
    let mut writer = BufWriter::new(File::create(&draft_path)?);
    export_markdown(draft, &mut writer)?;

    let provenance_path = out.join(PROVENANCE_FILE_NAME);
    let mut writer = BufWriter::new(File::create(&provenance_path)?);
    let record = export_provenance(&state, &report, &mut writer)?;

    state.begin_review()?;
    project.save(&state)?;

    Ok(ExportedFiles {
        draft: draft_path,
        provenance: provenance_path,
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::tempdir;
    use verbatim_domain::{SupportingSource, Tone, WorkflowError, WorkflowState};

    #[tokio::test]
    async fn test_export_writes_both_files() {
        let dir = tempdir().unwrap();
        let project = ProjectFile::new(dir.path().join("state.json"));

        let mut state = WorkflowState::new("CEO: We ship on Fridays because customers plan around it.");
        state.add_source(SupportingSource::url("https://example.com/profile"));
        state.set_key_points(vec!["Fridays".into()]);
        state.tone = Some(Tone::Professional);
        state.set_draft("# Fridays\n\nThe CEO said \"we ship on Fridays\" and \"nobody works weekends\".");
        project.save(&state).unwrap();

        let out = dir.path().join("out");
        let verifier = build_verifier(&Config::default(), false).unwrap();
        let exported = export_project(&project, &verifier, &out).await.unwrap();

        let markdown = fs::read_to_string(&exported.draft).unwrap();
        assert_eq!(markdown, state.draft.clone().unwrap());

        let json = fs::read_to_string(&exported.provenance).unwrap();
        let record = ProvenanceRecord::from_json(&json).unwrap();
        assert_eq!(record.quotes.len(), 2);
        assert!(record.quotes[0].verified);
        assert_eq!(record.quotes[0].source, "Interview Transcript");
        assert_eq!(record.metadata.tone, "professional");
        assert_eq!(record.sources.supporting_sources.len(), 1);
        assert_eq!(record.quotes[1].source, "Not Found");
    }

    #[tokio::test]
    async fn test_export_requires_draft() {
        let dir = tempdir().unwrap();
        let project = ProjectFile::new(dir.path().join("state.json"));
        project.save(&WorkflowState::new("Jane: hello")).unwrap();

        let verifier = build_verifier(&Config::default(), false).unwrap();
        let result = export_project(&project, &verifier, dir.path()).await;
        assert!(matches!(
            result,
            Err(CliError::Workflow(WorkflowError::MissingDraft))
        ));
        assert!(!dir.path().join(DRAFT_FILE_NAME).exists());
    }
}
