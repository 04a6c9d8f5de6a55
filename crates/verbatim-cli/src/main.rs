//! Verbatim CLI - Draft articles from interviews and verify every quote.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use verbatim_cli::commands;
use verbatim_cli::{Cli, Command, Config, Formatter, ProjectFile};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> verbatim_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config file must load; the default one falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable config file");
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let project = ProjectFile::new(cli.state);

    match cli.command {
        Command::Init(args) => commands::execute_init(args, &project, &formatter)?,
        Command::Status => commands::execute_status(&project, &formatter)?,
        Command::KeyPoints(command) => {
            commands::execute_key_points(command, &project, &config, &formatter).await?
        }
        Command::Draft(command) => {
            commands::execute_draft(command, &project, &config, &formatter).await?
        }
        Command::Verify(args) => {
            commands::execute_verify(args, &project, &config, &formatter).await?
        }
        Command::Export(args) => {
            commands::execute_export(args, &project, &config, &formatter).await?
        }
        Command::Reset => commands::execute_reset(&project, &formatter)?,
    }

    Ok(())
}

/// Log to stderr. RUST_LOG wins; otherwise -v raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
