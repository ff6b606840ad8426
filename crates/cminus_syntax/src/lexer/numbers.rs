//! Numeric literal scanning.
//!
//! Literals are unsigned decimal digit runs. A run directly followed by a letter is consumed
//! together with the rest of the word and rejected as one malformed number; so is any
//! multi-digit run with a leading zero.

use super::{Scanner, Token, TokenKind, is_ident_continue};
use crate::diagnostics::LexicalErrorKind;

impl Scanner<'_> {
    pub(super) fn scan_number(&mut self, start: usize) -> Option<Token> {
        let line = self.line;
        self.consume_while(|c| c.is_ascii_digit());

        if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.consume_while(is_ident_continue);
            self.report(LexicalErrorKind::MalformedNumber, start, line);
            return None;
        }

        let digits = &self.source[start..self.current_pos];
        if digits.len() > 1 && digits.starts_with('0') {
            self.report(LexicalErrorKind::MalformedNumber, start, line);
            return None;
        }

        Some(self.emit(TokenKind::Number, start))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    #[test]
    fn malformed_number_consumes_whole_word() {
        let (tokens, session) = lex("3x_9 + 1");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["+", "1"]);
        assert_eq!(session.errors.iter().next().map(|e| e.lexeme.as_str()), Some("3x_9"));
    }

    #[test]
    fn zero_prefixed_runs_are_rejected_but_zero_is_not() {
        let (tokens, session) = lex("0 00 10 010");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["0", "10"]);
        let rejected: Vec<&str> = session.errors.iter().map(|e| e.lexeme.as_str()).collect();
        assert_eq!(rejected, vec!["00", "010"]);
    }
}
