//! Comment skipping.

use super::Scanner;
use crate::diagnostics::LexicalErrorKind;

impl Scanner<'_> {
    /// Skip a `//` comment up to, not including, the next newline.
    pub(super) fn skip_line_comment(&mut self) {
        self.consume_while(|c| c != '\n');
    }

    /// Skip a `/* ... */` comment starting at `start`.
    ///
    /// An unterminated comment swallows the rest of the input and is reported at its opening
    /// line with a shortened preview of its text.
    pub(super) fn skip_block_comment(&mut self, start: usize) {
        let line = self.line;
        self.advance(); // /
        self.advance(); // *

        loop {
            match self.peek() {
                None => {
                    let preview = self.comment_preview(start);
                    self.report_lexeme(LexicalErrorKind::UnclosedComment, preview, start, line);
                    return;
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Report a `*/` with no opening comment.
    pub(super) fn skip_stray_closing_comment(&mut self, start: usize) {
        let line = self.line;
        self.advance();
        self.advance();
        self.report(LexicalErrorKind::StrayClosingComment, start, line);
    }

    fn comment_preview(&self, start: usize) -> String {
        let mut preview: String = self.source[start..self.current_pos]
            .chars()
            .take(self.options.comment_preview_len)
            .collect();
        preview.push_str("...");
        preview
    }
}
