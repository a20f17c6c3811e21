//! Number literal lexing.
//!
//! Integers come in decimal, hexadecimal (`0x`), binary (`0b`), and octal
//! (`0o`) forms. Floats are `digits.digits` with no exponent and no
//! leading-dot form; a trailing dot with no digit after it belongs to
//! whatever follows the integer. Negative literals are the parser's job:
//! `-` always lexes as its own symbol.

use nitro_util::InputError;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit
    pub(crate) fn lex_number(&mut self) -> Result<Token, InputError> {
        if self.cursor.current_char() == '0' {
            let base = match self.cursor.peek_char(1) {
                'x' => 16,
                'b' => 2,
                'o' => 8,
                _ => 0,
            };
            // A prefix with no digit after it is not a prefixed literal;
            // the zero stands alone and the letter starts an identifier.
            if base != 0 && self.cursor.peek_char(2).is_digit(base) {
                return self.lex_prefixed_integer(base);
            }
        }

        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float = self.cursor.current_char() == '.'
            && self.cursor.peek_char(1).is_ascii_digit();

        if is_float {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }

            let text = self.cursor.slice_from(start);
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(self.token(TokenKind::Float(value))),
                _ => Err(self.error_here("Invalid number literal")),
            }
        } else {
            let text = self.cursor.slice_from(start);
            match text.parse::<i64>() {
                Ok(value) => Ok(self.token(TokenKind::Integer(value))),
                Err(_) => Err(self.error_here("Invalid number literal")),
            }
        }
    }

    /// Lexes a `0x`/`0b`/`0o` integer; the prefix has already been checked
    fn lex_prefixed_integer(&mut self, base: u32) -> Result<Token, InputError> {
        self.cursor.advance();
        self.cursor.advance();

        let digit_start = self.cursor.position();
        while self.cursor.current_char().is_digit(base) {
            self.cursor.advance();
        }

        let digits = self.cursor.slice_from(digit_start);
        match i64::from_str_radix(digits, base) {
            Ok(value) => Ok(self.token(TokenKind::Integer(value))),
            Err(_) => Err(self.error_here("Invalid number literal")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nitro_util::{FileId, Handler};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(FileId::DUMMY, source, &handler)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(kinds("42"), vec![TokenKind::Integer(42)]);
        assert_eq!(kinds("0"), vec![TokenKind::Integer(0)]);
    }

    #[test]
    fn test_hex_integer() {
        assert_eq!(kinds("0x1F"), vec![TokenKind::Integer(31)]);
        assert_eq!(kinds("0xff"), vec![TokenKind::Integer(255)]);
    }

    #[test]
    fn test_binary_integer() {
        assert_eq!(kinds("0b1010"), vec![TokenKind::Integer(10)]);
    }

    #[test]
    fn test_octal_integer() {
        assert_eq!(kinds("0o17"), vec![TokenKind::Integer(15)]);
    }

    #[test]
    fn test_float() {
        assert_eq!(kinds("42.5"), vec![TokenKind::Float(42.5)]);
        assert_eq!(kinds("0.25"), vec![TokenKind::Float(0.25)]);
    }

    #[test]
    fn test_trailing_dot_is_not_a_float() {
        // "42." lexes as the integer 42; the dot belongs to what follows.
        let handler = Handler::new();
        let mut lexer = Lexer::new(FileId::DUMMY, "42.", &handler);
        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Integer(42));
    }

    #[test]
    fn test_no_exponent_syntax() {
        // "1e9" is the integer 1 followed by the identifier "e9".
        assert_eq!(
            kinds("1e9"),
            vec![TokenKind::Integer(1), TokenKind::Identifier("e9".into())]
        );
    }

    #[test]
    fn test_prefix_without_digits() {
        // "0x" is the integer 0 followed by the identifier "x".
        assert_eq!(
            kinds("0x"),
            vec![TokenKind::Integer(0), TokenKind::Identifier("x".into())]
        );
    }

    #[test]
    fn test_uppercase_prefix_is_not_special() {
        assert_eq!(
            kinds("0X1"),
            vec![TokenKind::Integer(0), TokenKind::Identifier("X1".into())]
        );
    }

    #[test]
    fn test_integer_overflow_fails() {
        let handler = Handler::new();
        let error = Lexer::new(FileId::DUMMY, "99999999999999999999", &handler)
            .tokenize()
            .unwrap_err();
        assert_eq!(error.to_string(), "Invalid number literal");
    }
}
