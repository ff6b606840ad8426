//! Diagnostic sinks fed by the scanner: token, symbol, and lexical error tables.
//!
//! All three are append-only and export to deterministic text formats:
//!
//! - tokens: `<line>.\t<rendered tokens, space separated> \n` per line that produced tokens
//! - symbols: `<n>.\t<symbol>\n`, keywords (alphabetical) then identifiers (case-insensitive)
//! - errors: `<line>.\t(<lexeme>, <message>)\n` per error, or a fixed "no errors" line

use std::collections::BTreeMap;

use crate::diagnostics::LexicalError;
use crate::lexer::Token;
use cminus_core::errors;
use cminus_core::lang::keywords;

// ============================================================================
// Token table
// ============================================================================

/// Rendered tokens grouped by source line, in recognition order within each line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    lines: BTreeMap<usize, Vec<String>>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token under its line. The end-of-input sentinel is ignored.
    pub fn record(&mut self, token: &Token) {
        if token.is_end() {
            return;
        }
        self.lines.entry(token.line).or_default().push(token.render());
    }

    /// Lines in ascending order with their rendered tokens.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.lines.iter().map(|(line, tokens)| (*line, tokens.as_slice()))
    }

    /// Total number of recorded tokens.
    pub fn len(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn export(&self) -> String {
        let mut out = String::new();
        for (line, tokens) in self.lines() {
            out.push_str(&format!("{}.\t{} \n", line, tokens.join(" ")));
        }
        out
    }
}

// ============================================================================
// Symbol table
// ============================================================================

/// Unique symbols: reserved words preloaded, then identifiers in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table preloaded with every reserved word.
    pub fn new() -> Self {
        Self {
            symbols: keywords::KEYWORDS.iter().map(|k| k.canonical.to_string()).collect(),
        }
    }

    /// Insert `name` unless already present.
    ///
    /// ## Returns
    /// - `true` if the symbol was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.symbols.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s == name)
    }

    /// Symbols in insertion order (keywords first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Export order: keywords sorted alphabetically, then identifiers sorted case-insensitively.
    ///
    /// ## Notes
    /// - The identifier sort is stable, so `Foo` and `foo` keep their discovery order.
    pub fn export(&self) -> String {
        let (mut reserved, mut idents): (Vec<&str>, Vec<&str>) = self.iter().partition(|s| keywords::is_keyword(s));
        reserved.sort_unstable();
        idents.sort_by_key(|s| s.to_lowercase());

        let mut out = String::new();
        for (index, symbol) in reserved.iter().chain(idents.iter()).enumerate() {
            out.push_str(&format!("{}.\t{}\n", index + 1, symbol));
        }
        out
    }
}

// ============================================================================
// Error table
// ============================================================================

/// Lexical errors in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTable {
    errors: Vec<LexicalError>,
}

impl ErrorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: LexicalError) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexicalError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn export(&self) -> String {
        if self.errors.is_empty() {
            return format!("{}\n", errors::NO_LEXICAL_ERRORS);
        }
        let mut out = String::new();
        for error in &self.errors {
            out.push_str(&format!("{}.\t{}\n", error.line, error.entry()));
        }
        out
    }
}
