//! nitro-par - Parser for the Nitro language.
//!
//! Builds a typed AST from a token stream. Statements are recognized by a
//! backtracking pattern matcher with commit-on-progress semantics (see
//! [`pattern`](crate::ast)); expressions use Pratt precedence climbing.
//! The parser either returns the full program or fails with an
//! [`InputError`] at the first unrecoverable position.
//!
//! # Example
//!
//! ```
//! use nitro_lex::tokenize;
//! use nitro_par::Parser;
//! use nitro_util::{FileId, Handler};
//!
//! let handler = Handler::new();
//! let tokens = tokenize(FileId::DUMMY, "i32 x = 1 + 2;", &handler).unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//!
//! assert_eq!(program.len(), 1);
//! ```

pub mod ast;
mod expr;
mod pattern;
mod stmt;

pub use ast::{
    BinaryOp, Expression, ExpressionKind, IfBlock, Parameter, Statement, StatementKind,
};

use nitro_lex::{Kw, Sym, Token, TokenKind};
use nitro_util::{InputError, Location};

/// Recursive descent parser over a token stream
///
/// The parser owns the tokens and a cursor position. Alternatives are tried
/// in a fixed order with unbounded one-token lookahead; once a recursive
/// sub-parse has consumed input, the attempted production is committed and
/// later mismatches become hard errors.
pub struct Parser {
    /// Token stream from the lexer
    tokens: Vec<Token>,

    /// Current position in the token stream
    position: usize,
}

impl Parser {
    /// Create a new parser from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the complete top-level program
    pub fn parse(mut self) -> Result<Vec<Statement>, InputError> {
        let statements = self.parse_statements()?;
        if !self.is_at_end() {
            return Err(self.invalid_statement());
        }
        Ok(statements)
    }

    // =========================================================================
    // Token navigation
    // =========================================================================

    /// The current token, if any
    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// The kind of the token `offset` positions ahead
    pub(crate) fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.position + offset).map(|token| &token.kind)
    }

    /// Advance past the current token
    pub(crate) fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// True once every token has been consumed
    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Save the current position for backtracking
    pub(crate) fn mark(&self) -> usize {
        self.position
    }

    /// Restore a previously saved position
    pub(crate) fn reset(&mut self, mark: usize) {
        self.position = mark;
    }

    /// The location of the current token, falling back to the last token's
    /// location at the end of input
    pub(crate) fn here(&self) -> Location {
        if let Some(token) = self.current() {
            token.location
        } else if let Some(token) = self.tokens.last() {
            token.location
        } else {
            Location::DUMMY
        }
    }

    /// True if the current token is the given symbol
    pub(crate) fn check_sym(&self, sym: Sym) -> bool {
        self.check_sym_at(0, sym)
    }

    /// True if the token `offset` positions ahead is the given symbol
    pub(crate) fn check_sym_at(&self, offset: usize, sym: Sym) -> bool {
        matches!(self.peek_kind(offset), Some(TokenKind::Symbol(s)) if *s == sym)
    }

    /// True if the current token is the given keyword
    pub(crate) fn check_kw(&self, kw: Kw) -> bool {
        matches!(self.peek_kind(0), Some(TokenKind::Keyword(k)) if *k == kw)
    }

    /// True if the current token is an identifier
    pub(crate) fn check_identifier(&self) -> bool {
        matches!(self.peek_kind(0), Some(TokenKind::Identifier(_)))
    }

    /// Consume the given symbol if it is next; returns whether it was
    pub(crate) fn match_sym(&mut self, sym: Sym) -> bool {
        if self.check_sym(sym) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require the given symbol next, or fail hard
    pub(crate) fn expect_sym(&mut self, sym: Sym) -> Result<(), InputError> {
        if self.match_sym(sym) {
            Ok(())
        } else {
            Err(self.unexpected_token())
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn invalid_statement(&self) -> InputError {
        InputError::new("Invalid statement", self.here())
    }

    pub(crate) fn invalid_expression(&self) -> InputError {
        InputError::new("Invalid expression", self.here())
    }

    pub(crate) fn unexpected_token(&self) -> InputError {
        InputError::new("Unexpected token", self.here())
    }

    pub(crate) fn invalid_parameter(&self) -> InputError {
        InputError::new("Invalid parameter", self.here())
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::parse_source;
    use super::*;

    #[test]
    fn test_empty_program() {
        assert_eq!(parse_source("").unwrap(), Vec::new());
    }

    #[test]
    fn test_trailing_garbage_is_invalid_statement() {
        let error = parse_source("i32 x = 1; )").unwrap_err();
        assert_eq!(error.to_string(), "Invalid statement");
        assert_eq!(error.location.column, 12);
    }

    #[test]
    fn test_locations_attached_to_statements() {
        let program = parse_source("i32 x = 1;\n  x = 2;").unwrap();
        assert_eq!(program[0].location.line, 1);
        assert_eq!(program[1].location.line, 2);
        assert_eq!(program[1].location.column, 3);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_source("i32 x = 1 + 2 * 3;").unwrap();
        let b = parse_source("i32 x = 1 + 2 * 3;").unwrap();
        assert_eq!(a, b);
    }
}
