//! Token types for the C-minus scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for operators and punctuation
//!
//! ## Notes
//! - Every token keeps its lexeme verbatim, so rendering never has to go back to the source.
//! - The parser compares tokens by [`Token::class`], not by kind.

use std::fmt;

use crate::span::Span;
use cminus_core::lang::keywords::{self, KeywordId};
use cminus_core::lang::symbols::SymbolId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Lookahead class for identifiers.
pub const ID_CLASS: &str = "ID";
/// Lookahead class for numeric literals.
pub const NUM_CLASS: &str = "NUM";
/// Lookahead class and lexeme for the end-of-input sentinel.
pub const END_MARKER: &str = "$";

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Keyword(KeywordId),
    Symbol(SymbolId),
    EndOfInput,
}

impl TokenKind {
    /// Label used in the token listing (`NUM`, `ID`, `KEYWORD`, `SYMBOL`).
    ///
    /// ## Returns
    /// - `None` for the end-of-input sentinel, which is never listed.
    pub fn label(self) -> Option<&'static str> {
        match self {
            TokenKind::Number => Some("NUM"),
            TokenKind::Identifier => Some("ID"),
            TokenKind::Keyword(_) => Some("KEYWORD"),
            TokenKind::Symbol(_) => Some("SYMBOL"),
            TokenKind::EndOfInput => None,
        }
    }
}

/// A token with its kind, lexeme, source line and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// The end-of-input sentinel at byte offset `pos`.
    pub fn end_of_input(line: usize, pos: usize) -> Self {
        Self::new(TokenKind::EndOfInput, END_MARKER, line, Span::new(pos, pos))
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Class used to index FIRST/FOLLOW/PREDICT tables.
    ///
    /// Keywords and symbols compare by their literal text; identifiers, numbers and the
    /// end marker compare by class marker.
    pub fn class(&self) -> &str {
        match self.kind {
            TokenKind::Number => NUM_CLASS,
            TokenKind::Identifier => ID_CLASS,
            TokenKind::Keyword(_) | TokenKind::Symbol(_) => &self.lexeme,
            TokenKind::EndOfInput => END_MARKER,
        }
    }

    /// Render as `(KIND, lexeme)`; the end marker renders verbatim.
    pub fn render(&self) -> String {
        match self.kind.label() {
            Some(label) => format!("({}, {})", label, self.lexeme),
            None => self.lexeme.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
