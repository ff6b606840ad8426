//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report};

use crate::artifacts::Artifacts;
use crate::config::OutputConfig;
use cminus_syntax::diagnostics::export_syntax_errors;
use cminus_syntax::lexer::{self, ScanOptions};
use cminus_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Largest source file accepted, in bytes.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate the output directory to prevent path traversal attacks.
///
/// This function ensures:
/// - The path doesn't contain `..` components
/// - Absolute paths are allowed but logged
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    for component in out_dir.components() {
        if let std::path::Component::ParentDir = component {
            return Err(CliError::failure(format!(
                "Output directory '{}' contains path traversal (..)",
                out_dir.display()
            )));
        }
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

/// Read source file contents.
///
/// ## Errors
/// - The file is missing or unreadable
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MiB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Compile a file and write the five listings.
///
/// Syntax and lexical errors are part of the output, not a failure: the run succeeds as long as
/// the input was readable and every listing was written.
pub fn compile_file(file_path: &Path, config: &OutputConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    validate_output_dir(&config.out_dir)?;

    let artifacts = Artifacts::compile(&source, &config.scan);
    let written = artifacts
        .write_to(config)
        .map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;

    println!(
        "Compiled {} ({} lexical error(s), {} syntax error(s)); wrote {} file(s) to {}",
        file_path.display(),
        artifacts.lexical_error_count,
        artifacts.syntax_error_count,
        written.len(),
        config.out_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and print the token and lexical error listings.
pub fn lex_file(file_path: &Path, options: &ScanOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (_, session) = lexer::lex_with_options(&source, *options);

    print!("{}", session.tokens.export());
    println!();
    print!("{}", session.errors.export());
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the parse tree and syntax error listing.
pub fn parse_file(file_path: &Path, options: &ScanOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let outcome = parser::parse_with_options(&source, *options);

    println!("{}", outcome.tree);
    println!();
    println!("{}", export_syntax_errors(&outcome.syntax_errors));
    Ok(ExitCode::SUCCESS)
}

/// Render every lexical and syntax diagnostic against the source.
pub fn check_file(file_path: &Path, options: &ScanOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let outcome = parser::parse_with_options(&source, *options);
    let name = file_path.display().to_string();

    let mut msg = String::new();
    for error in outcome.session.errors.iter() {
        msg.push_str(&render_diagnostic(error.clone(), &name, &source));
    }
    for error in &outcome.syntax_errors {
        msg.push_str(&render_diagnostic(error.clone(), &name, &source));
    }

    if msg.is_empty() {
        println!("✓ No lexical or syntax errors in {}", name);
        return Ok(ExitCode::SUCCESS);
    }

    let count = outcome.session.errors.len() + outcome.syntax_errors.len();
    msg.push_str(&format!("{} error(s) found in {}", count, name));
    Err(CliError::failure(msg))
}

fn render_diagnostic<E>(error: E, name: &str, source: &str) -> String
where
    E: Diagnostic + Send + Sync + 'static,
{
    let report = Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{:?}\n", report)
}
