//! Per-run diagnostic state.
//!
//! A [`Session`] bundles the three sinks the scanner writes into. One is created for each
//! scan/parse run; the scanner owns it while running and hands it back when done.

use crate::diagnostics::LexicalError;
use crate::lexer::{Token, TokenKind};
use crate::tables::{ErrorTable, SymbolTable, TokenTable};

/// Token, symbol, and lexical error tables for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub tokens: TokenTable,
    pub symbols: SymbolTable,
    pub errors: ErrorTable,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recognized token: listed under its line, and identifiers enter the symbol table.
    pub fn record_token(&mut self, token: &Token) {
        self.tokens.record(token);
        if token.kind == TokenKind::Identifier {
            self.symbols.insert(&token.lexeme);
        }
    }

    pub fn record_error(&mut self, error: LexicalError) {
        self.errors.push(error);
    }
}
