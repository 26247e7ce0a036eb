//! # Tablero CLI Module
//!
//! This module implements the CLI interface for Tablero.
//!
//! ## Available Commands
//!
//! - `show` - Load the dataset and print the table (default)
//! - `upload` - Upload a spreadsheet, then print the refreshed table
//! - `download` - Save the spreadsheet export to a file

mod commands;

use crate::config::ClientConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablero_core::TableroError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Tablero - registros upload and browsing client
///
/// Uploads spreadsheets to a registros backend and shows the resulting
/// dataset as a table.
#[derive(Parser, Debug)]
#[command(name = "tablero")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "TABLERO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides configuration and TABLERO_URL)
    #[arg(short = 'u', long, global = true)]
    pub url: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the dataset and print it
    Show,

    /// Upload a spreadsheet and print the refreshed dataset
    Upload {
        /// File to upload (omit to submit with no file selected)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Download the dataset as a spreadsheet
    Download {
        /// Output file path
        #[arg(short, long, default_value = "registros.xlsx")]
        output: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// A failed command.
///
/// Errors raised inside the page controller have already been shown by its
/// notifier; everything else still has to be reported once by the caller.
#[derive(Debug)]
pub enum CommandError {
    Shown(TableroError),
    Unreported(TableroError),
}

impl CommandError {
    pub fn error(&self) -> &TableroError {
        match self {
            Self::Shown(e) | Self::Unreported(e) => e,
        }
    }

    /// The error, if the user has not seen it yet.
    pub fn unreported(&self) -> Option<&TableroError> {
        match self {
            Self::Shown(_) => None,
            Self::Unreported(e) => Some(e),
        }
    }
}

impl From<TableroError> for CommandError {
    fn from(error: TableroError) -> Self {
        Self::Unreported(error)
    }
}

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CommandError> {
    let config = ClientConfig::load(cli.config.as_deref())?.with_url_override(cli.url);
    let json_mode = cli.json_mode;

    if !cli.quiet && !json_mode {
        eprintln!("Tablero v{} -> {}", env!("CARGO_PKG_VERSION"), config.base_url);
    }

    match cli.command {
        Some(Commands::Upload { file }) => cmd_upload(&config, json_mode, file).await,
        Some(Commands::Download { output }) => cmd_download(&config, &output).await,
        Some(Commands::Show) | None => cmd_show(&config, json_mode).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_errors_are_not_reported_again() {
        let shown = CommandError::Shown(TableroError::IoError("disk".to_string()));
        assert!(shown.unreported().is_none());
        assert_eq!(shown.error().to_string(), "I/O error: disk");
    }

    #[test]
    fn plain_errors_are_reported_once() {
        let err: CommandError = TableroError::UploadRejected("X".to_string()).into();
        assert!(matches!(
            err.unreported(),
            Some(TableroError::UploadRejected(text)) if text == "X"
        ));
    }
}
