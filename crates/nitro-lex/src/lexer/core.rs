//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct and its rule dispatch. Rules
//! are attempted in a fixed order at the input head: whitespace and comments
//! are skipped, control characters fail, then symbols (longest first),
//! numbers, strings, and identifiers are tried.

use nitro_util::{FileId, Handler, InputError, Location, Message};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for Nitro source code
///
/// Transforms a source string into a vector of located tokens, or fails with
/// an [`InputError`] at the first unlexable position. Style warnings are
/// reported through the handler and do not affect the token stream.
pub struct Lexer<'a> {
    /// Character cursor for source traversal
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic sink for warnings
    pub(crate) handler: &'a Handler,

    /// File the source came from
    file: FileId,

    /// Starting byte position of the current token
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based)
    token_start_line: u32,

    /// Column where the current token starts (1-based)
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code
    pub fn new(file: FileId, source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Consumes the lexer, producing the full token stream
    pub fn tokenize(mut self) -> Result<Vec<Token>, InputError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Lexes the next token, or `None` at the end of input
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, InputError> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let c = self.cursor.current_char();

        // Control characters not consumed as whitespace or newlines are
        // never part of any token.
        if (c as u32) < 0x20 {
            return Err(self.error_here("Unexpected control character"));
        }

        if let Some(token) = self.lex_symbol() {
            return Ok(Some(token));
        }

        if c.is_ascii_digit() {
            return self.lex_number().map(Some);
        }

        if c == '\'' || c == '"' {
            return self.lex_string(c).map(Some);
        }

        self.lex_identifier().map(Some)
    }

    /// Location where the current token started
    pub(crate) fn token_location(&self) -> Location {
        Location::new(self.file, self.token_start_line, self.token_start_column)
    }

    /// Builds a token of the given kind at the current token start
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_location())
    }

    /// Builds an input error at the current token start
    pub(crate) fn error_here(&self, message: impl Into<Message>) -> InputError {
        InputError::new(message, self.token_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Kw, Sym};

    fn lex(source: &str) -> Result<Vec<Token>, InputError> {
        let handler = Handler::new();
        Lexer::new(FileId::DUMMY, source, &handler).tokenize()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(kinds("").is_empty());
        assert!(kinds("   \t \n ").is_empty());
    }

    #[test]
    fn test_longest_match_equality() {
        assert_eq!(
            kinds("a == b"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Symbol(Sym::EqEq),
                TokenKind::Identifier("b".into()),
            ]
        );
    }

    #[test]
    fn test_longest_match_increment() {
        assert_eq!(
            kinds("a++"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Symbol(Sym::PlusPlus),
            ]
        );
    }

    #[test]
    fn test_longest_match_comparisons() {
        assert_eq!(
            kinds("<= < >= >"),
            vec![
                TokenKind::Symbol(Sym::LtEq),
                TokenKind::Symbol(Sym::Lt),
                TokenKind::Symbol(Sym::GtEq),
                TokenKind::Symbol(Sym::Gt),
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("const value"),
            vec![
                TokenKind::Keyword(Kw::Const),
                TokenKind::Identifier("value".into()),
            ]
        );
    }

    #[test]
    fn test_statement_tokens() {
        assert_eq!(
            kinds("i32 x = 1;"),
            vec![
                TokenKind::Identifier("i32".into()),
                TokenKind::Identifier("x".into()),
                TokenKind::Symbol(Sym::Assign),
                TokenKind::Integer(1),
                TokenKind::Symbol(Sym::Semicolon),
            ]
        );
    }

    #[test]
    fn test_locations_are_one_based() {
        let tokens = lex("a\n  b").unwrap();
        assert_eq!(tokens[0].location.line, 1);
        assert_eq!(tokens[0].location.column, 1);
        assert_eq!(tokens[1].location.line, 2);
        assert_eq!(tokens[1].location.column, 3);
    }

    #[test]
    fn test_column_resets_after_newline() {
        let tokens = lex("aa bb\ncc").unwrap();
        assert_eq!(tokens[1].location.column, 4);
        assert_eq!(tokens[2].location.line, 2);
        assert_eq!(tokens[2].location.column, 1);
    }

    #[test]
    fn test_crlf_newline() {
        let tokens = lex("a\r\nb").unwrap();
        assert_eq!(tokens[1].location.line, 2);
        assert_eq!(tokens[1].location.column, 1);
    }

    #[test]
    fn test_control_character_fails() {
        let error = lex("i32 x;\n  \u{7}").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected control character");
        assert_eq!(error.location.line, 2);
        assert_eq!(error.location.column, 3);
    }

    #[test]
    fn test_lone_carriage_return_fails() {
        let error = lex("a \r b").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected control character");
    }

    #[test]
    fn test_unexpected_character_fails() {
        // '!' only occurs inside "!=", so alone it matches nothing.
        let error = lex("a ! b").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected character");
        assert_eq!(error.location.column, 3);
    }

    #[test]
    fn test_no_bytes_lost() {
        // Every non-whitespace, non-comment byte belongs to some token.
        let source = "const u8 n = 0x1F; // tail\nwhile (n < 3) { n++; }";
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 17);
    }
}
