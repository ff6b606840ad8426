//! Output configuration for compile runs
//!
//! Where the five listings go and what they are called, plus the scanner options used to produce
//! them.

use std::path::{Path, PathBuf};

use cminus_syntax::lexer::ScanOptions;

/// Default artifact file names.
pub const TOKENS_FILE: &str = "tokens.txt";
pub const LEXICAL_ERRORS_FILE: &str = "lexical_errors.txt";
pub const SYMBOL_TABLE_FILE: &str = "symbol_table.txt";
pub const PARSE_TREE_FILE: &str = "parse_tree.txt";
pub const SYNTAX_ERRORS_FILE: &str = "syntax_errors.txt";

/// Default input file compiled when the CLI gets no arguments.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory the listings are written into
    pub out_dir: PathBuf,
    pub tokens_file: String,
    pub lexical_errors_file: String,
    pub symbol_table_file: String,
    pub parse_tree_file: String,
    pub syntax_errors_file: String,
    /// Scanner policy for the run
    pub scan: ScanOptions,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            tokens_file: TOKENS_FILE.to_string(),
            lexical_errors_file: LEXICAL_ERRORS_FILE.to_string(),
            symbol_table_file: SYMBOL_TABLE_FILE.to_string(),
            parse_tree_file: PARSE_TREE_FILE.to_string(),
            syntax_errors_file: SYNTAX_ERRORS_FILE.to_string(),
            scan: ScanOptions::default(),
        }
    }
}

impl OutputConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_tokens_file(mut self, name: impl Into<String>) -> Self {
        self.tokens_file = name.into();
        self
    }

    pub fn with_lexical_errors_file(mut self, name: impl Into<String>) -> Self {
        self.lexical_errors_file = name.into();
        self
    }

    pub fn with_symbol_table_file(mut self, name: impl Into<String>) -> Self {
        self.symbol_table_file = name.into();
        self
    }

    pub fn with_parse_tree_file(mut self, name: impl Into<String>) -> Self {
        self.parse_tree_file = name.into();
        self
    }

    pub fn with_syntax_errors_file(mut self, name: impl Into<String>) -> Self {
        self.syntax_errors_file = name.into();
        self
    }

    /// Set the scanner options
    pub fn with_scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    /// Full path of an artifact file inside the output directory.
    pub fn path_for(&self, name: impl AsRef<Path>) -> PathBuf {
        self.out_dir.join(name)
    }
}
