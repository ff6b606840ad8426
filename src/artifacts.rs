//! The five text listings produced by one compile run.
//!
//! ## Notes
//! - Token, lexical error and symbol listings end every line with `\n`; the parse tree and syntax
//!   error listings have no trailing newline.
//! - Rendering is pure; only [`Artifacts::write_to`] touches the filesystem.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::OutputConfig;
use cminus_syntax::diagnostics::export_syntax_errors;
use cminus_syntax::lexer::ScanOptions;
use cminus_syntax::parser::{self, ParseOutcome};

/// Failure while writing listings to disk.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot create output directory `{}`: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Rendered listings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub tokens: String,
    pub lexical_errors: String,
    pub symbol_table: String,
    pub parse_tree: String,
    pub syntax_errors: String,
    pub lexical_error_count: usize,
    pub syntax_error_count: usize,
}

impl Artifacts {
    /// Run the front end over `source` and render every listing.
    pub fn compile(source: &str, options: &ScanOptions) -> Self {
        Self::from_outcome(&parser::parse_with_options(source, *options))
    }

    pub fn from_outcome(outcome: &ParseOutcome) -> Self {
        Self {
            tokens: outcome.session.tokens.export(),
            lexical_errors: outcome.session.errors.export(),
            symbol_table: outcome.session.symbols.export(),
            parse_tree: outcome.tree.render(),
            syntax_errors: export_syntax_errors(&outcome.syntax_errors),
            lexical_error_count: outcome.session.errors.len(),
            syntax_error_count: outcome.syntax_errors.len(),
        }
    }

    /// Whether any lexical or syntax error was recorded.
    pub fn has_errors(&self) -> bool {
        self.lexical_error_count + self.syntax_error_count > 0
    }

    /// `(file name, contents)` pairs: tokens, lexical errors, symbols, parse tree, syntax errors.
    pub fn entries<'a>(&'a self, config: &'a OutputConfig) -> [(&'a str, &'a str); 5] {
        [
            (config.tokens_file.as_str(), self.tokens.as_str()),
            (config.lexical_errors_file.as_str(), self.lexical_errors.as_str()),
            (config.symbol_table_file.as_str(), self.symbol_table.as_str()),
            (config.parse_tree_file.as_str(), self.parse_tree.as_str()),
            (config.syntax_errors_file.as_str(), self.syntax_errors.as_str()),
        ]
    }

    /// Write every listing into `config.out_dir`, creating it if needed.
    ///
    /// ## Returns
    /// - The written paths, in [`Artifacts::entries`] order.
    ///
    /// ## Errors
    /// - [`ArtifactError`] naming the first directory or file that could not be written.
    pub fn write_to(&self, config: &OutputConfig) -> Result<Vec<PathBuf>, ArtifactError> {
        fs::create_dir_all(&config.out_dir).map_err(|source| ArtifactError::CreateDir {
            path: config.out_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(5);
        for (name, contents) in self.entries(config) {
            let path = config.path_for(name);
            fs::write(&path, contents).map_err(|source| ArtifactError::Io {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }

        tracing::info!(
            out_dir = %config.out_dir.display(),
            lexical_errors = self.lexical_error_count,
            syntax_errors = self.syntax_error_count,
            "wrote artifacts"
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_program_listings() {
        let artifacts = Artifacts::compile("int x;\nvoid main(void) { x = 1; }", &ScanOptions::default());
        assert!(!artifacts.has_errors());
        assert_eq!(
            artifacts.tokens,
            "1.\t(KEYWORD, int) (ID, x) (SYMBOL, ;) \n\
             2.\t(KEYWORD, void) (ID, main) (SYMBOL, () (KEYWORD, void) (SYMBOL, )) (SYMBOL, {) (ID, x) (SYMBOL, =) (NUM, 1) (SYMBOL, ;) (SYMBOL, }) \n"
        );
        assert_eq!(artifacts.lexical_errors, "No lexical errors found.\n");
        assert_eq!(
            artifacts.symbol_table,
            "1.\tbreak\n2.\telse\n3.\tfor\n4.\tif\n5.\tint\n6.\treturn\n7.\tvoid\n8.\tmain\n9.\tx\n"
        );
        assert_eq!(artifacts.syntax_errors, "No syntax errors found.");
        assert!(!artifacts.parse_tree.ends_with('\n'));
    }

    #[test]
    fn mixed_errors_are_counted() {
        let artifacts = Artifacts::compile("int 007; int 12ab; x @ y; abc@def; /* never closed", &ScanOptions::default());
        assert_eq!(artifacts.lexical_error_count, 5);
        assert_eq!(artifacts.syntax_error_count, 8);
        assert_eq!(
            artifacts.lexical_errors,
            "1.\t(007, Malformed number)\n\
             1.\t(12ab, Malformed number)\n\
             1.\t(@, Illegal character)\n\
             1.\t(@, Illegal character)\n\
             1.\t(/* neve..., Open comment at EOF)\n"
        );
    }

    #[test]
    fn entries_follow_config_names() {
        let artifacts = Artifacts::compile("", &ScanOptions::default());
        let config = OutputConfig::new().with_syntax_errors_file("parse_errors.txt");
        let names: Vec<&str> = artifacts.entries(&config).iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["tokens.txt", "lexical_errors.txt", "symbol_table.txt", "parse_tree.txt", "parse_errors.txt"]
        );
    }
}
