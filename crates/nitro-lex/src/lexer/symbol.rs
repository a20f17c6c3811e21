//! Symbol lexing.
//!
//! Symbols are matched against the fixed table in longest-first order, so
//! two-character spellings always win over their one-character prefixes.

use crate::token::{Sym, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a symbol, if one starts at the current position
    pub(crate) fn lex_symbol(&mut self) -> Option<Token> {
        let rest = self.cursor.remaining();
        for sym in Sym::LONGEST_FIRST {
            if rest.starts_with(sym.as_str()) {
                for _ in 0..sym.as_str().len() {
                    self.cursor.advance();
                }
                return Some(self.token(TokenKind::Symbol(sym)));
            }
        }
        None
    }
}
