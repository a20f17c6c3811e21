//! Identifier and keyword lexing.
//!
//! An identifier is a maximal non-empty run of characters that are ASCII
//! identifier characters (`[A-Za-z0-9_]`) or any non-ASCII character.
//! Whitespace, symbol characters, quotes, and control characters all
//! terminate the run. If the spelling equals a reserved word, a keyword
//! token is produced instead.

use nitro_util::InputError;

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// True if `c` can be part of an identifier
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (c as u32) >= 0x80
}

/// True if the spelling has an underscore with lowercase ASCII letters on
/// both sides
fn has_inner_snake(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[1] == b'_' && w[0].is_ascii_lowercase() && w[2].is_ascii_lowercase())
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword
    pub(crate) fn lex_identifier(&mut self) -> Result<Token, InputError> {
        while is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        if text.is_empty() {
            return Err(self.error_here("Unexpected character"));
        }

        if let Some(keyword) = keyword_from_ident(text) {
            return Ok(self.token(TokenKind::Keyword(keyword)));
        }

        if has_inner_snake(text) {
            self.handler
                .warning("Snake case is cringe", self.token_location());
        }

        Ok(self.token(TokenKind::Identifier(text.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Kw;
    use nitro_util::{FileId, Handler};

    fn lex_ident(source: &str) -> (TokenKind, Handler) {
        let handler = Handler::new();
        let kind = {
            let mut lexer = Lexer::new(FileId::DUMMY, source, &handler);
            lexer.next_token().unwrap().unwrap().kind
        };
        (kind, handler)
    }

    #[test]
    fn test_simple_identifier() {
        let (kind, _) = lex_ident("foo");
        assert_eq!(kind, TokenKind::Identifier("foo".into()));
    }

    #[test]
    fn test_identifier_with_digits() {
        let (kind, _) = lex_ident("x2");
        assert_eq!(kind, TokenKind::Identifier("x2".into()));
    }

    #[test]
    fn test_non_ascii_identifier() {
        let (kind, handler) = lex_ident("naïve");
        assert_eq!(kind, TokenKind::Identifier("naïve".into()));
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("const").0, TokenKind::Keyword(Kw::Const));
        assert_eq!(lex_ident("if").0, TokenKind::Keyword(Kw::If));
        assert_eq!(lex_ident("else").0, TokenKind::Keyword(Kw::Else));
        assert_eq!(lex_ident("while").0, TokenKind::Keyword(Kw::While));
        assert_eq!(lex_ident("do").0, TokenKind::Keyword(Kw::Do));
        assert_eq!(lex_ident("for").0, TokenKind::Keyword(Kw::For));
        assert_eq!(lex_ident("break").0, TokenKind::Keyword(Kw::Break));
        assert_eq!(lex_ident("return").0, TokenKind::Keyword(Kw::Return));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let (kind, _) = lex_ident("iffy");
        assert_eq!(kind, TokenKind::Identifier("iffy".into()));
    }

    #[test]
    fn test_snake_case_warning() {
        let (kind, handler) = lex_ident("snake_case");
        assert_eq!(kind, TokenKind::Identifier("snake_case".into()));
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(
            format!("{}", handler.diagnostics()[0].message),
            "Snake case is cringe"
        );
    }

    #[test]
    fn test_edge_underscores_do_not_warn() {
        assert_eq!(lex_ident("_leading").1.warning_count(), 0);
        assert_eq!(lex_ident("trailing_").1.warning_count(), 0);
    }

    #[test]
    fn test_uppercase_neighbors_do_not_warn() {
        assert_eq!(lex_ident("SCREAMING_CASE").1.warning_count(), 0);
        assert_eq!(lex_ident("mixed_Case").1.warning_count(), 0);
    }

    #[test]
    fn test_digit_neighbor_does_not_warn() {
        assert_eq!(lex_ident("x_1").1.warning_count(), 0);
    }
}
