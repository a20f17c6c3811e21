//! Expression parsing via Pratt precedence climbing.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 0 | `==`, `!=`, `<`, `<=`, `>`, `>=` | Left |
//! | 1 | `\|` | Left |
//! | 2 | `&` | Left |
//! | 3 | `+`, `-` | Left |
//! | 4 | `*`, `/`, `%` | Left |
//!
//! `parse_binary(min_prec)` parses a primitive expression as the left-hand
//! side, then folds in operators whose precedence is at least `min_prec`,
//! recursing with `prec + 1` for the right-hand side because every operator
//! is left-associative. A binary node carries its left operand's location.

use nitro_lex::{Sym, TokenKind};
use nitro_util::InputError;

use crate::ast::{BinaryOp, Expression, ExpressionKind};
use crate::Parser;

impl Parser {
    /// Parse a required expression
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, InputError> {
        match self.try_parse_expression()? {
            Some(expression) => Ok(expression),
            None => Err(self.invalid_expression()),
        }
    }

    /// Try to parse an expression; `None` if none starts here
    pub(crate) fn try_parse_expression(&mut self) -> Result<Option<Expression>, InputError> {
        self.parse_binary(0)
    }

    /// Pratt precedence climbing over the binary operator table
    fn parse_binary(&mut self, min_prec: u8) -> Result<Option<Expression>, InputError> {
        let Some(mut left) = self.try_parse_primitive_expression()? else {
            return Ok(None);
        };

        loop {
            let Some(op) = self.peek_binary_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();

            let right = match self.parse_binary(prec + 1)? {
                Some(expression) => expression,
                None => return Err(self.invalid_expression()),
            };

            let location = left.location;
            left = Expression::new(
                ExpressionKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                location,
            );
        }

        Ok(Some(left))
    }

    /// The binary operator at the current position, if any
    fn peek_binary_op(&self) -> Option<BinaryOp> {
        match self.peek_kind(0) {
            Some(TokenKind::Symbol(sym)) => BinaryOp::from_sym(*sym),
            _ => None,
        }
    }

    /// Try the primitive expression alternatives in order: signed integer,
    /// signed float, string, call, post-increment, post-decrement, variable,
    /// parenthesized sub-expression
    fn try_parse_primitive_expression(&mut self) -> Result<Option<Expression>, InputError> {
        let location = self.here();

        // A leading minus binds to an immediately following number literal;
        // anywhere else it is not a primitive expression.
        if self.check_sym(Sym::Minus) {
            let next = self.peek_kind(1).cloned();
            return match next {
                Some(TokenKind::Integer(value)) => {
                    self.advance();
                    self.advance();
                    Ok(Some(Expression::new(
                        ExpressionKind::Integer(-value),
                        location,
                    )))
                },
                Some(TokenKind::Float(value)) => {
                    self.advance();
                    self.advance();
                    Ok(Some(Expression::new(
                        ExpressionKind::Float(-value),
                        location,
                    )))
                },
                _ => Ok(None),
            };
        }

        let Some(kind) = self.peek_kind(0).cloned() else {
            return Ok(None);
        };

        match kind {
            TokenKind::Integer(value) => {
                self.advance();
                Ok(Some(Expression::new(
                    ExpressionKind::Integer(value),
                    location,
                )))
            },
            TokenKind::Float(value) => {
                self.advance();
                Ok(Some(Expression::new(ExpressionKind::Float(value), location)))
            },
            TokenKind::Str(value) => {
                self.advance();
                Ok(Some(Expression::new(ExpressionKind::Str(value), location)))
            },
            TokenKind::Identifier(name) => {
                if self.check_sym_at(1, Sym::LParen) {
                    self.advance();
                    self.advance();
                    let arguments = self.parse_arguments()?;
                    self.expect_sym(Sym::RParen)?;
                    return Ok(Some(Expression::new(
                        ExpressionKind::Call { name, arguments },
                        location,
                    )));
                }
                if self.check_sym_at(1, Sym::PlusPlus) {
                    self.advance();
                    self.advance();
                    return Ok(Some(Expression::new(
                        ExpressionKind::Increment(name),
                        location,
                    )));
                }
                if self.check_sym_at(1, Sym::MinusMinus) {
                    self.advance();
                    self.advance();
                    return Ok(Some(Expression::new(
                        ExpressionKind::Decrement(name),
                        location,
                    )));
                }
                self.advance();
                Ok(Some(Expression::new(
                    ExpressionKind::Variable(name),
                    location,
                )))
            },
            TokenKind::Symbol(Sym::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_sym(Sym::RParen)?;
                Ok(Some(Expression::new(
                    ExpressionKind::Sub(Box::new(inner)),
                    location,
                )))
            },
            _ => Ok(None),
        }
    }
}
