//! Lexical and syntax diagnostics.
//!
//! Both error types are plain records appended once and never revised. They implement
//! [`miette::Diagnostic`] so the CLI can render them against the source, while the text
//! listings use the fixed formats produced by [`crate::tables`] and [`export_syntax_errors`].

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::grammar::NonTerminal;
use crate::span::Span;
use cminus_core::errors;

// ============================================================================
// Lexical errors
// ============================================================================

/// Category of a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalErrorKind {
    InvalidChar,
    MalformedNumber,
    UnclosedComment,
    StrayClosingComment,
    InvalidIdentifierStart,
}

impl LexicalErrorKind {
    /// Canonical message written to the error listing.
    pub fn message(self) -> &'static str {
        match self {
            LexicalErrorKind::InvalidChar => errors::ILLEGAL_CHARACTER_MSG,
            LexicalErrorKind::MalformedNumber => errors::MALFORMED_NUMBER_MSG,
            LexicalErrorKind::UnclosedComment => errors::UNCLOSED_COMMENT_MSG,
            LexicalErrorKind::StrayClosingComment => errors::STRAY_CLOSING_COMMENT_MSG,
            LexicalErrorKind::InvalidIdentifierStart => errors::INVALID_IDENTIFIER_START_MSG,
        }
    }
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A lexical error reported by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}: `{lexeme}`")]
#[diagnostic(code(cminus::lexical))]
pub struct LexicalError {
    pub line: usize,
    pub lexeme: String,
    pub kind: LexicalErrorKind,
    #[label("rejected here")]
    pub span: Span,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            line,
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }

    /// Listing entry without the line prefix: `(<lexeme>, <message>)`.
    pub fn entry(&self) -> String {
        format!("({}, {})", self.lexeme, self.kind.message())
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

/// Category of a syntax error, with its detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A nonterminal was skipped because the lookahead is in its FOLLOW set.
    MissingNonterminal(NonTerminal),
    /// An expected terminal was absent; the mismatched token was kept.
    MissingTerminal(&'static str),
    /// A token (by lookahead class) was discarded.
    IllegalToken(String),
    /// Input ran out while a rule or terminal was still pending.
    UnexpectedEof,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::MissingNonterminal(nt) => write!(f, "missing {}", nt),
            SyntaxErrorKind::MissingTerminal(t) => write!(f, "missing {}", t),
            SyntaxErrorKind::IllegalToken(class) => write!(f, "illegal {}", class),
            SyntaxErrorKind::UnexpectedEof => f.write_str(errors::UNEXPECTED_EOF_MSG),
        }
    }
}

/// A syntax error reported by the parser, located at the current lookahead token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("#{line} : syntax error, {kind}")]
#[diagnostic(code(cminus::syntax))]
pub struct SyntaxError {
    pub line: usize,
    pub kind: SyntaxErrorKind,
    #[label("at this token")]
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize, span: Span) -> Self {
        Self { line, kind, span }
    }
}

/// Render the syntax error listing.
///
/// ## Returns
/// - One error per line in detection order, joined with `\n` and without a trailing newline, or
///   the fixed "no errors" literal.
pub fn export_syntax_errors(errors: &[SyntaxError]) -> String {
    if errors.is_empty() {
        return errors::NO_SYNTAX_ERRORS.to_string();
    }
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
