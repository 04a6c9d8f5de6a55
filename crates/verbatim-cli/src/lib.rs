//! Verbatim CLI library.
//!
//! This library provides the core functionality for the Verbatim command-line interface,
//! including configuration management, project state, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod state;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use state::ProjectFile;
