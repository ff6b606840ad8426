//! CLI module for the C-minus front end
//!
//! ## Commands
//!
//! - `cminus [FILE]` - Compile FILE (default `input.txt`) into the current directory
//! - `compile <file> [-o DIR]` - Write the five listings into DIR
//! - `check <file>` - Render every diagnostic against the source
//! - `test [path]` - Run on-disk fixtures
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `fixture_runner` - Fixture discovery and comparison
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod fixture_runner;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_INPUT_FILE, OutputConfig};
use crate::version::CMINUS_VERSION;
use cminus_syntax::lexer::{DEFAULT_COMMENT_PREVIEW_LEN, ScanOptions};

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
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and predictive parser for the C-minus teaching language
#[derive(Parser, Debug)]
#[command(name = "cminus")]
#[command(version = CMINUS_VERSION)]
#[command(about = "Scanner and predictive parser for the C-minus teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to compile into the current directory (default: input.txt)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only and print the token and lexical error listings (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the tree and syntax error listings (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Characters of an unterminated comment kept in its diagnostic
    #[arg(long = "comment-preview", value_name = "N", global = true, default_value_t = DEFAULT_COMMENT_PREVIEW_LEN)]
    pub comment_preview: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the token, symbol, error and parse tree listings
    Compile {
        /// Source file to compile
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output directory
        #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Report every lexical and syntax error with source context
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run fixture directories and compare listings
    Test {
        /// Directory to search for fixtures
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
    },
}

impl Cli {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions::new().with_comment_preview_len(self.comment_preview)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
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
    let options = cli.scan_options();

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file, &options);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, &options);
    }

    match cli.command {
        Some(Command::Compile { file, out_dir }) => {
            let config = OutputConfig::new().with_out_dir(out_dir).with_scan_options(options);
            commands::compile_file(&file, &config)
        }
        Some(Command::Check { file }) => commands::check_file(&file, &options),
        Some(Command::Test {
            path,
            verbose,
            stop_on_fail,
        }) => fixture_runner::run_fixtures(&path, verbose, stop_on_fail, &options),
        None => {
            let file = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
            let config = OutputConfig::new().with_scan_options(options);
            commands::compile_file(&file, &config)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
