//! Backtracking pattern matcher for statements.
//!
//! A pattern is an ordered list of elements: literal token specs (required
//! or optional) and recursive placeholders for expressions, argument and
//! parameter lists, statement lists, and primitive statements. Matching is
//! left to right with commit-on-progress: while only literals have matched,
//! a required-literal mismatch silently restores the start position so the
//! caller can try its next alternative; once any recursive placeholder has
//! consumed tokens, the production is committed and a later mismatch raises
//! a hard "Unexpected token" error. This rule is what turns ambiguity into
//! diagnostics instead of mis-parses.

use nitro_lex::{Kw, Sym, Token, TokenKind};
use nitro_util::InputError;

use crate::ast::{Expression, Parameter, Statement};
use crate::Parser;

/// What a literal pattern element matches
#[derive(Clone, Copy, Debug)]
pub(crate) enum TokenSpec {
    /// A specific symbol
    Sym(Sym),
    /// A specific keyword
    Kw(Kw),
    /// Any identifier
    Identifier,
}

impl TokenSpec {
    /// True if a token of this kind satisfies the spec
    fn matches(self, kind: &TokenKind) -> bool {
        match (self, kind) {
            (TokenSpec::Sym(want), TokenKind::Symbol(have)) => want == *have,
            (TokenSpec::Kw(want), TokenKind::Keyword(have)) => want == *have,
            (TokenSpec::Identifier, TokenKind::Identifier(_)) => true,
            _ => false,
        }
    }
}

/// One element of a statement pattern
pub(crate) enum PatternItem {
    /// A required literal token
    Tok(TokenSpec),
    /// An optional literal token; a mismatch matches as nothing
    OptTok(TokenSpec),
    /// A required expression
    Expression,
    /// A comma-separated argument list, possibly empty
    Arguments,
    /// A comma-separated parameter list, possibly empty
    Parameters,
    /// A greedy statement list, possibly empty
    Statements,
    /// A primitive statement terminated by the given symbol
    Primitive(Sym),
}

/// The capture produced by one pattern element
pub(crate) enum MatchPart {
    Token(Token),
    Missing,
    Expression(Expression),
    Arguments(Vec<Expression>),
    Parameters(Vec<Parameter>),
    Statements(Vec<Statement>),
    Statement(Box<Statement>),
}

/// Ordered captures of a successful match
///
/// Accessors consume parts front to back and panic on a capture of the
/// wrong shape; patterns and their destructuring live side by side, so a
/// mismatch is a bug in this crate, never an input condition.
pub(crate) struct Parts(std::vec::IntoIter<MatchPart>);

impl Parts {
    fn new(parts: Vec<MatchPart>) -> Self {
        Self(parts.into_iter())
    }

    fn next_part(&mut self) -> MatchPart {
        match self.0.next() {
            Some(part) => part,
            None => panic!("pattern capture exhausted"),
        }
    }

    /// Discard the next `n` captures
    pub(crate) fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.next_part();
        }
    }

    /// The next capture as an optional token (from an `OptTok` element)
    pub(crate) fn next_opt_token(&mut self) -> Option<Token> {
        match self.next_part() {
            MatchPart::Token(token) => Some(token),
            MatchPart::Missing => None,
            _ => panic!("pattern capture is not a token"),
        }
    }

    /// The next capture as an identifier's name
    pub(crate) fn next_ident(&mut self) -> String {
        match self.next_part() {
            MatchPart::Token(Token {
                kind: TokenKind::Identifier(name),
                ..
            }) => name,
            _ => panic!("pattern capture is not an identifier"),
        }
    }

    /// The next capture as an expression
    pub(crate) fn next_expression(&mut self) -> Expression {
        match self.next_part() {
            MatchPart::Expression(expression) => expression,
            _ => panic!("pattern capture is not an expression"),
        }
    }

    /// The next capture as an argument list
    pub(crate) fn next_arguments(&mut self) -> Vec<Expression> {
        match self.next_part() {
            MatchPart::Arguments(arguments) => arguments,
            _ => panic!("pattern capture is not an argument list"),
        }
    }

    /// The next capture as a parameter list
    pub(crate) fn next_parameters(&mut self) -> Vec<Parameter> {
        match self.next_part() {
            MatchPart::Parameters(parameters) => parameters,
            _ => panic!("pattern capture is not a parameter list"),
        }
    }

    /// The next capture as a statement list
    pub(crate) fn next_statements(&mut self) -> Vec<Statement> {
        match self.next_part() {
            MatchPart::Statements(statements) => statements,
            _ => panic!("pattern capture is not a statement list"),
        }
    }

    /// The next capture as a single statement
    pub(crate) fn next_statement(&mut self) -> Box<Statement> {
        match self.next_part() {
            MatchPart::Statement(statement) => statement,
            _ => panic!("pattern capture is not a statement"),
        }
    }
}

impl Parser {
    /// Match a pattern left to right against the token stream
    ///
    /// Returns `Ok(None)` and restores the start position when a required
    /// literal fails before the match is committed; raises "Unexpected
    /// token" when it fails after.
    pub(crate) fn match_pattern(
        &mut self,
        pattern: &[PatternItem],
    ) -> Result<Option<Parts>, InputError> {
        let start = self.mark();
        let mut parts = Vec::with_capacity(pattern.len());
        let mut committed = false;

        for item in pattern {
            match item {
                PatternItem::Tok(spec) => match self.current() {
                    Some(token) if spec.matches(&token.kind) => {
                        parts.push(MatchPart::Token(token.clone()));
                        self.advance();
                    },
                    _ if committed => return Err(self.unexpected_token()),
                    _ => {
                        self.reset(start);
                        return Ok(None);
                    },
                },
                PatternItem::OptTok(spec) => match self.current() {
                    Some(token) if spec.matches(&token.kind) => {
                        parts.push(MatchPart::Token(token.clone()));
                        self.advance();
                    },
                    _ => parts.push(MatchPart::Missing),
                },
                PatternItem::Expression => {
                    let before = self.mark();
                    let expression = self.parse_expression()?;
                    committed |= self.mark() > before;
                    parts.push(MatchPart::Expression(expression));
                },
                PatternItem::Arguments => {
                    let before = self.mark();
                    let arguments = self.parse_arguments()?;
                    committed |= self.mark() > before;
                    parts.push(MatchPart::Arguments(arguments));
                },
                PatternItem::Parameters => {
                    let before = self.mark();
                    let parameters = self.parse_parameters()?;
                    committed |= self.mark() > before;
                    parts.push(MatchPart::Parameters(parameters));
                },
                PatternItem::Statements => {
                    let before = self.mark();
                    let statements = self.parse_statements()?;
                    committed |= self.mark() > before;
                    parts.push(MatchPart::Statements(statements));
                },
                PatternItem::Primitive(terminator) => {
                    let before = self.mark();
                    match self.try_parse_primitive(*terminator)? {
                        Some(statement) => {
                            committed |= self.mark() > before;
                            parts.push(MatchPart::Statement(Box::new(statement)));
                        },
                        None if committed => return Err(self.unexpected_token()),
                        None => {
                            self.reset(start);
                            return Ok(None);
                        },
                    }
                },
            }
        }

        Ok(Some(Parts::new(parts)))
    }
}
