//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use verbatim_domain::Tone;

/// Default project state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "verbatim-state.json";

/// Verbatim - Draft articles from interviews and verify every quote.
#[derive(Debug, Parser)]
#[command(name = "verbatim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERBATIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project state file
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts and bare values)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a project from a transcript and supporting sources
    Init(InitArgs),

    /// Show the project's stage and inputs
    Status,

    /// Extract and review key points
    #[command(subcommand)]
    KeyPoints(KeyPointsCommand),

    /// Generate or replace the draft
    #[command(subcommand)]
    Draft(DraftCommand),

    /// Check every quotation in the draft against the sources
    Verify(VerifyArgs),

    /// Write the draft and its provenance record
    Export(ExportArgs),

    /// Discard the project and start over
    Reset,
}

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Interview transcript (plain text)
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Supporting source URL (repeatable)
    #[arg(long = "source-url")]
    pub source_urls: Vec<String>,

    /// Supporting source file (repeatable)
    #[arg(long = "source-file")]
    pub source_files: Vec<PathBuf>,

    /// Overwrite an existing project
    #[arg(long)]
    pub force: bool,
}

/// Key-point subcommands. Indices are 1-based.
#[derive(Debug, Subcommand)]
pub enum KeyPointsCommand {
    /// Extract key points from the transcript
    Extract,

    /// List the current key points
    List,

    /// Replace the text of a key point
    Edit {
        /// Key point number
        index: usize,
        /// New text
        text: String,
    },

    /// Delete a key point
    Delete {
        /// Key point number
        index: usize,
    },

    /// Move a key point up one place
    Up {
        /// Key point number
        index: usize,
    },

    /// Move a key point down one place
    Down {
        /// Key point number
        index: usize,
    },

    /// Append a key point
    Add {
        /// Text (a placeholder is used when omitted)
        text: Option<String>,
    },
}

/// Draft subcommands.
#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Generate a draft from the key points
    Generate {
        /// Writing tone
        #[arg(short, long, value_enum, default_value = "professional")]
        tone: ToneArg,

        /// Extra direction for the writer
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Replace the draft with the contents of a file
    Set {
        /// Markdown file holding the edited draft
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the current draft
    Show,
}

/// Arguments for the verify command.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Ask the language model to check quotes, falling back to local matching
    #[arg(long)]
    pub llm: bool,

    /// Verify this file instead of the project draft
    #[arg(long)]
    pub draft: Option<PathBuf>,
}

/// Arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Ask the language model to check quotes, falling back to local matching
    #[arg(long)]
    pub llm: bool,
}

/// Tone options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToneArg {
    /// Formal and authoritative
    Professional,
    /// Friendly and engaging
    Conversational,
    /// Data-driven and objective
    Analytical,
    /// Narrative style
    Storytelling,
}

impl From<ToneArg> for Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Professional => Tone::Professional,
            ToneArg::Conversational => Tone::Conversational,
            ToneArg::Analytical => Tone::Analytical,
            ToneArg::Storytelling => Tone::Storytelling,
        }
    }
}
