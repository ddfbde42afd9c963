//! CLI module for the TinyAda syntax checker
//!
//! This module provides the command-line interface for the front end.
//!
//! ## Commands
//!
//! - `<file>` - Check a single file (default action)
//! - `check <file>...` - Check one or more files
//! - `lex <file>` - Print the token stream of a file
//!
//! ## Design
//!
//! Arguments are parsed with clap derive. Commands report failure through `CliResult<T>`;
//! `run()` alone turns that into a process exit status.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use tinyada_syntax::RecognizerConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A command failure: what to print on stderr and which status to exit with.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Printed verbatim; empty means print nothing
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Shorthand for [`ExitCode::FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax checker for TinyAda source files
#[derive(Parser, Debug)]
#[command(name = "tinyada")]
#[command(version = VERSION)]
#[command(about = "Syntax checker for TinyAda source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check files against the TinyAda grammar
    Check {
        /// Source files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Stop at the first syntax error
        #[arg(long)]
        fail_fast: bool,
        /// Do not report tokens after the end of the subprogram body
        #[arg(long)]
        allow_trailing: bool,
        /// Echo the source with line numbers before the diagnostics
        #[arg(long)]
        listing: bool,
    },

    /// Print the token stream of a file (debug)
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse the command line, run the command and exit with its status.
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

fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check {
            files,
            fail_fast,
            allow_trailing,
            listing,
        }) => {
            let config = RecognizerConfig::new()
                .with_fail_fast(fail_fast)
                .with_end_of_input_check(!allow_trailing);
            commands::check_files(&files, &config, listing)
        }
        Some(Command::Lex { file }) => commands::lex_file(&file.to_string_lossy()),
        None => {
            if let Some(file) = cli.file {
                commands::check_files(&[file], &RecognizerConfig::default(), false)
            } else {
                // Bare `tinyada`: clap has nothing to run
                Err(CliError::new("", ExitCode::FAILURE))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
