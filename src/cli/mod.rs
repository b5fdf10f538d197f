//! CLI module for lexkind
//!
//! ## Commands
//!
//! - `reference [--output PATH]` - Render the registry as a Markdown reference
//! - `list [--json]` - List every token kind with its flags
//! - `show <NAME>` - Print one kind's metadata
//! - `lookup <SPELLING>` - Resolve a fixed spelling to its kind
//! - `check` - Derive and validate the registry
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod reference;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the lexkind token kind registry
#[derive(Parser, Debug)]
#[command(name = "lexkind")]
#[command(version = VERSION)]
#[command(about = "Inspect the lexkind token kind registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the registry as a Markdown reference
    Reference {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List every token kind with its flags
    List {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Print one kind's metadata
    Show {
        /// Registry name, e.g. `OpenParen`
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Resolve a fixed spelling to its kind
    Lookup {
        /// Exact spelling, e.g. `=>` or `while`
        #[arg(value_name = "SPELLING")]
        spelling: String,
    },

    /// Derive and validate the registry
    Check,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Reference { output } => commands::write_reference(output.as_deref()),
        Command::List { json } => commands::print(&commands::list(json)?),
        Command::Show { name } => commands::print(&commands::show(&name)?),
        Command::Lookup { spelling } => commands::print(&commands::lookup(&spelling)?),
        Command::Check => commands::print(&commands::check()?),
    }
}
