/// Panic-mode recovery and error reporting.
///
/// All errors are located at the current lookahead token.
impl Parser<'_> {
    fn report(&mut self, kind: SyntaxErrorKind) {
        tracing::debug!(line = self.lookahead.line, %kind, "syntax error");
        self.errors.push(SyntaxError::new(kind, self.lookahead.line, self.lookahead.span));
    }

    /// Report the lookahead as illegal and drop it.
    fn discard_illegal(&mut self) {
        let illegal = SyntaxErrorKind::IllegalToken(self.lookahead.class().to_string());
        self.report(illegal);
        self.advance();
    }

    /// Enter [`ParseState::UnexpectedEnd`], reporting it the first time only.
    fn unexpected_end(&mut self) {
        if self.state == ParseState::UnexpectedEnd {
            return;
        }
        self.report(SyntaxErrorKind::UnexpectedEof);
        self.state = ParseState::UnexpectedEnd;
    }
}
