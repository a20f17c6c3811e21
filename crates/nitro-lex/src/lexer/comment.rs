//! Whitespace, newline, and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, newlines, and comments before the next token
    ///
    /// A `/*` with no closing `*/` anywhere ahead is not treated as a
    /// comment; the `/` is left in place and lexes as a symbol.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' => self.cursor.advance(),
                '\r' if self.cursor.peek_char(1) == '\n' => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek_char(1) == '*' && self.has_block_comment_end() => {
                    self.skip_block_comment()
                },
                _ => return,
            }
        }
    }

    /// Skips a `//` comment through its terminating newline
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        if !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment up to the first closing `*/`
    fn skip_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    /// True if a closing `*/` exists ahead of the current `/*`
    fn has_block_comment_end(&self) -> bool {
        self.cursor.remaining()[2..].contains("*/")
    }
}
