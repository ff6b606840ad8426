//! Scanner for the C-minus language
//!
//! Produces tokens on demand, one per [`Scanner::next_token`] call, and records every token and
//! every lexical error into the run's [`Session`] as a side effect.
//!
//! Handles:
//! - Keywords and identifiers (ASCII letters, digits, underscore)
//! - Decimal number literals (leading-zero and letter-suffix rules)
//! - Symbols, with `==` taking priority over `=`
//! - Line (`//`) and block (`/* */`) comments
//! - Panic-mode recovery: malformed lexemes are reported and skipped, never fatal
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, lookahead classes)
//! - `numbers` - Numeric literal scanning
//! - `comments` - Comment skipping and unclosed/stray comment reporting

mod comments;
mod numbers;
pub mod tokens;

pub use tokens::{END_MARKER, ID_CLASS, NUM_CLASS, Token, TokenKind, keyword_id};

use crate::diagnostics::{LexicalError, LexicalErrorKind};
use crate::session::Session;
use crate::span::Span;
use cminus_core::lang::symbols;

// ============================================================================
// OPTIONS
// ============================================================================

/// Default number of characters kept from an unclosed block comment.
pub const DEFAULT_COMMENT_PREVIEW_LEN: usize = 7;

/// Tunable scanner policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Characters of an unclosed block comment (counting the opening `/*`) kept before the `...` marker.
    pub comment_preview_len: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            comment_preview_len: DEFAULT_COMMENT_PREVIEW_LEN,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unclosed-comment preview length.
    pub fn with_comment_preview_len(mut self, len: usize) -> Self {
        self.comment_preview_len = len;
        self
    }
}

// ============================================================================
// SCANNER STATE
// ============================================================================

/// Scanner for C-minus source code.
///
/// Holds a cursor into the source plus a 1-based line counter that advances on every `\n`
/// consumed, including newlines inside comments.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    options: ScanOptions,
    session: Session,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with default options and a fresh session.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'a str, options: ScanOptions) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            options,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Finish scanning and take ownership of the recorded tables.
    pub fn into_session(self) -> Session {
        self.session
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Produce the next token.
    ///
    /// ## Returns
    /// - The next recognized token, or the end-of-input sentinel (lexeme `$`) once the input is
    ///   exhausted. Calling again after the sentinel keeps returning the sentinel.
    ///
    /// ## Notes
    /// - Malformed lexemes are reported to the session and skipped; this never fails.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(c) = self.peek() else {
                return Token::end_of_input(self.line, self.current_pos);
            };
            let start = self.current_pos;

            if is_whitespace(c) {
                self.advance();
                continue;
            }

            if c.is_ascii_digit() {
                match self.scan_number(start) {
                    Some(token) => return token,
                    None => continue,
                }
            }

            if is_ident_start(c) {
                match self.scan_identifier(start) {
                    Some(token) => return token,
                    None => continue,
                }
            }

            match (c, self.peek_next()) {
                ('/', Some('/')) => {
                    self.skip_line_comment();
                    continue;
                }
                ('/', Some('*')) => {
                    self.skip_block_comment(start);
                    continue;
                }
                ('*', Some('/')) => {
                    self.skip_stray_closing_comment(start);
                    continue;
                }
                _ => {}
            }

            if let Some(token) = self.scan_symbol(start) {
                return token;
            }

            self.scan_illegal_run(start);
        }
    }

    // ========================================================================
    // Token and error recording
    // ========================================================================

    /// Emit the text consumed since `start` as a token and record it.
    fn emit(&mut self, kind: TokenKind, start: usize) -> Token {
        let token = Token::new(
            kind,
            &self.source[start..self.current_pos],
            self.line,
            Span::new(start, self.current_pos),
        );
        self.session.record_token(&token);
        token
    }

    /// Report the text consumed since `start` as a lexical error.
    fn report(&mut self, kind: LexicalErrorKind, start: usize, line: usize) {
        let lexeme = self.source[start..self.current_pos].to_string();
        self.report_lexeme(kind, lexeme, start, line);
    }

    fn report_lexeme(&mut self, kind: LexicalErrorKind, lexeme: String, start: usize, line: usize) {
        tracing::debug!(line, lexeme = %lexeme, ?kind, "lexical error");
        let span = Span::new(start, self.current_pos);
        self.session.record_error(LexicalError::new(kind, lexeme, line, span));
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) -> Option<Token> {
        self.consume_while(is_ident_continue);

        if !self.peek().is_some_and(is_illegal) {
            let kind = self.word_kind(start);
            return Some(self.emit(kind, start));
        }

        let line = self.line;
        if self.ident_follows_illegal_run() {
            // Keep the word; the illegal run alone becomes the error.
            let kind = self.word_kind(start);
            let token = self.emit(kind, start);
            let run_start = self.current_pos;
            self.consume_while(is_illegal);
            self.report(LexicalErrorKind::InvalidChar, run_start, line);
            return Some(token);
        }

        self.consume_while(is_illegal);
        self.report(LexicalErrorKind::InvalidChar, start, line);
        None
    }

    fn word_kind(&self, start: usize) -> TokenKind {
        match keyword_id(&self.source[start..self.current_pos]) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Identifier,
        }
    }

    /// Whether an identifier-start character sits right after the illegal run at the cursor.
    fn ident_follows_illegal_run(&self) -> bool {
        self.source[self.current_pos..]
            .chars()
            .find(|c| !is_illegal(*c))
            .is_some_and(is_ident_start)
    }

    // ========================================================================
    // Symbols and illegal runs
    // ========================================================================

    fn scan_symbol(&mut self, start: usize) -> Option<Token> {
        let c = self.peek()?;

        if let Some(next) = self.peek_next() {
            let pair = &self.source[start..start + c.len_utf8() + next.len_utf8()];
            if let Some(id) = symbols::from_str(pair) {
                self.advance();
                self.advance();
                return Some(self.emit(TokenKind::Symbol(id), start));
            }
        }

        let id = symbols::from_char(c)?;
        self.advance();
        Some(self.emit(TokenKind::Symbol(id), start))
    }

    fn scan_illegal_run(&mut self, start: usize) {
        let line = self.line;
        let Some(first) = self.advance() else {
            return;
        };
        self.consume_while(is_illegal);

        let kind = if first.is_alphabetic() && !first.is_ascii() {
            LexicalErrorKind::InvalidIdentifierStart
        } else {
            LexicalErrorKind::InvalidChar
        };
        self.report(kind, start, line);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yield real tokens, stopping at end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that can never begin or continue a valid lexeme.
fn is_illegal(c: char) -> bool {
    !is_whitespace(c) && !is_ident_continue(c) && !symbols::is_symbol_start(c)
}

/// Scan a whole source string.
///
/// ## Returns
/// - Every real token in order (the end sentinel excluded) plus the filled session.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (Vec<Token>, Session) {
    lex_with_options(source, ScanOptions::default())
}

/// Like [`lex`], with explicit scanner options.
pub fn lex_with_options(source: &str, options: ScanOptions) -> (Vec<Token>, Session) {
    let mut scanner = Scanner::with_options(source, options);
    let tokens: Vec<Token> = scanner.by_ref().collect();
    (tokens, scanner.into_session())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cminus_core::lang::keywords::KeywordId;
    use cminus_core::lang::symbols::SymbolId;

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    fn error_entries(session: &Session) -> Vec<(usize, String, LexicalErrorKind)> {
        session
            .errors
            .iter()
            .map(|e| (e.line, e.lexeme.clone(), e.kind))
            .collect()
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let (tokens, session) = lex("int x; If");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::Int));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Symbol(SymbolId::Semicolon));
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert!(session.symbols.contains("If"));
        assert!(session.errors.is_empty());
    }

    #[test]
    fn letter_suffix_makes_one_malformed_number() {
        let (tokens, session) = lex("12ab");
        assert!(tokens.is_empty());
        assert_eq!(
            error_entries(&session),
            vec![(1, "12ab".to_string(), LexicalErrorKind::MalformedNumber)]
        );
    }

    #[test]
    fn leading_zero_rule() {
        let (tokens, session) = lex("007");
        assert!(tokens.is_empty());
        assert_eq!(
            error_entries(&session),
            vec![(1, "007".to_string(), LexicalErrorKind::MalformedNumber)]
        );

        let (tokens, session) = lex("0");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "0");
        assert!(session.errors.is_empty());
    }

    #[test]
    fn underscore_after_digits_starts_an_identifier() {
        let (tokens, session) = lex("12_x");
        assert_eq!(lexemes(&tokens), vec!["12", "_x"]);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert!(session.errors.is_empty());
    }

    #[test]
    fn block_comment_is_skipped() {
        let (tokens, session) = lex("/* x */ int");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::Int));
        assert!(session.errors.is_empty());
    }

    #[test]
    fn newlines_inside_comments_count() {
        let (tokens, _) = lex("/* a\n b\n */ x // tail\ny");
        assert_eq!(lexemes(&tokens), vec!["x", "y"]);
        assert_eq!(tokens[0].line, 3);
        assert_eq!(tokens[1].line, 4);
    }

    #[test]
    fn unclosed_comment_reports_preview_at_opening_line() {
        let (tokens, session) = lex("/* abc");
        assert!(tokens.is_empty());
        assert_eq!(
            error_entries(&session),
            vec![(1, "/* abc...".to_string(), LexicalErrorKind::UnclosedComment)]
        );

        let (tokens, session) = lex("x\n/* never closed\nat all");
        assert_eq!(lexemes(&tokens), vec!["x"]);
        assert_eq!(
            error_entries(&session),
            vec![(2, "/* neve...".to_string(), LexicalErrorKind::UnclosedComment)]
        );
    }

    #[test]
    fn comment_preview_length_is_configurable() {
        let options = ScanOptions::new().with_comment_preview_len(2);
        let (_, session) = lex_with_options("/* abc", options);
        assert_eq!(session.errors.iter().next().unwrap().lexeme, "/*...");
    }

    #[test]
    fn stray_closing_comment() {
        let (tokens, session) = lex("a */ b");
        assert_eq!(lexemes(&tokens), vec!["a", "b"]);
        assert_eq!(
            error_entries(&session),
            vec![(1, "*/".to_string(), LexicalErrorKind::StrayClosingComment)]
        );
    }

    #[test]
    fn equality_wins_over_assignment() {
        let (tokens, _) = lex("a==b=c");
        assert_eq!(lexemes(&tokens), vec!["a", "==", "b", "=", "c"]);
        assert_eq!(tokens[1].kind, TokenKind::Symbol(SymbolId::EqEq));
        assert_eq!(tokens[3].kind, TokenKind::Symbol(SymbolId::Assign));
    }

    #[test]
    fn illegal_run_between_identifiers_keeps_both() {
        let (tokens, session) = lex("abc@def");
        assert_eq!(lexemes(&tokens), vec!["abc", "def"]);
        assert_eq!(
            error_entries(&session),
            vec![(1, "@".to_string(), LexicalErrorKind::InvalidChar)]
        );
        assert_eq!(session.tokens.export(), "1.\t(ID, abc) (ID, def) \n");
    }

    #[test]
    fn illegal_suffix_without_following_identifier_swallows_word() {
        let (tokens, session) = lex("cd?; int x;");
        assert_eq!(lexemes(&tokens), vec![";", "int", "x", ";"]);
        assert_eq!(
            error_entries(&session),
            vec![(1, "cd?".to_string(), LexicalErrorKind::InvalidChar)]
        );
        assert!(!session.symbols.contains("cd"));
    }

    #[test]
    fn colon_and_bang_are_not_symbols() {
        let (tokens, session) = lex("x:y !z");
        assert_eq!(lexemes(&tokens), vec!["x", "y", "z"]);
        assert_eq!(
            error_entries(&session),
            vec![
                (1, ":".to_string(), LexicalErrorKind::InvalidChar),
                (1, "!".to_string(), LexicalErrorKind::InvalidChar),
            ]
        );
    }

    #[test]
    fn non_ascii_letter_is_invalid_identifier_start() {
        let (tokens, session) = lex("é = 1;");
        assert_eq!(lexemes(&tokens), vec!["=", "1", ";"]);
        assert_eq!(
            error_entries(&session),
            vec![(1, "é".to_string(), LexicalErrorKind::InvalidIdentifierStart)]
        );
    }

    #[test]
    fn illegal_run_is_one_error() {
        let (tokens, session) = lex("x = 1 @#$ ;");
        assert_eq!(lexemes(&tokens), vec!["x", "=", "1", ";"]);
        assert_eq!(
            error_entries(&session),
            vec![(1, "@#$".to_string(), LexicalErrorKind::InvalidChar)]
        );
    }

    #[test]
    fn only_newline_advances_lines() {
        let (tokens, _) = lex("a\nb\r\n\x0Bc\x0Cd\n\n e");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 3, 5]);
    }

    #[test]
    fn end_of_input_is_sticky() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().lexeme, "x");
        for _ in 0..3 {
            let token = scanner.next_token();
            assert!(token.is_end());
            assert_eq!(token.lexeme, "$");
            assert_eq!(token.class(), "$");
        }
        assert_eq!(scanner.session().tokens.len(), 1);
    }

    #[test]
    fn token_classes() {
        let (tokens, _) = lex("foo 42 while if <");
        let classes: Vec<&str> = tokens.iter().map(Token::class).collect();
        assert_eq!(classes, vec!["ID", "NUM", "ID", "if", "<"]);
        let rendered: Vec<String> = tokens.iter().map(Token::render).collect();
        assert_eq!(
            rendered,
            vec!["(ID, foo)", "(NUM, 42)", "(ID, while)", "(KEYWORD, if)", "(SYMBOL, <)"]
        );
    }

    #[test]
    fn spans_cover_lexemes() {
        let source = "int  count;";
        let (tokens, _) = lex(source);
        for token in &tokens {
            assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
        }
    }
}
