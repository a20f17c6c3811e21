//! String literal lexing.
//!
//! Strings are delimited by single or double quotes. A backslash always
//! consumes the following character, but the pair is stored verbatim: the
//! token value is the raw inner text with only the outer quotes stripped.
//! Escape decoding is left to a later pass. An unescaped newline is legal
//! inside a string; a backslash directly before a line break is not.

use nitro_util::InputError;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal delimited by `quote`
    pub(crate) fn lex_string(&mut self, quote: char) -> Result<Token, InputError> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("Unexpected character"));
            }

            let c = self.cursor.current_char();

            if c == quote {
                self.cursor.advance();
                break;
            }

            if c == '\\' {
                if self.cursor.remaining().len() < 2 {
                    return Err(self.error_here("Unexpected character"));
                }
                let escaped = self.cursor.peek_char(1);
                if escaped == '\n' || escaped == '\r' {
                    return Err(self.error_here("Unexpected character"));
                }
                content.push('\\');
                content.push(escaped);
                self.cursor.advance();
                self.cursor.advance();
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        if quote == '"' && !content.contains('\'') {
            self.handler
                .warning("Double quotes are cringe", self.token_location());
        }

        Ok(self.token(TokenKind::Str(content)))
    }
}
