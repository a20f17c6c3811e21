//! Statement parsing.
//!
//! Statement alternatives are tried in a fixed order: primitive statements,
//! scope, if, while/do-while, for, break, function declaration, return.
//! Primitive statements are parametrized by their terminator symbol: `;` at
//! statement level, inherited terminators inside a for header.

use nitro_lex::{Kw, Sym};
use nitro_util::InputError;

use crate::ast::{IfBlock, Parameter, Statement, StatementKind};
use crate::pattern::PatternItem::{
    Arguments, Expression, OptTok, Parameters, Primitive, Statements, Tok,
};
use crate::pattern::{PatternItem, TokenSpec};
use crate::Parser;

/// Shorthand for a required symbol element
const fn sym(sym: Sym) -> PatternItem {
    Tok(TokenSpec::Sym(sym))
}

/// Shorthand for a required keyword element
const fn kw(kw: Kw) -> PatternItem {
    Tok(TokenSpec::Kw(kw))
}

/// Shorthand for a required identifier element
const fn ident() -> PatternItem {
    Tok(TokenSpec::Identifier)
}

impl Parser {
    /// Greedily parse statements until one fails to start
    ///
    /// The placeholder itself never raises; the enclosing pattern must then
    /// consume whatever stopped the run (normally a closing brace).
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<Statement>, InputError> {
        let mut statements = Vec::new();
        while let Some(statement) = self.try_parse_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Try each statement alternative in order
    pub(crate) fn try_parse_statement(&mut self) -> Result<Option<Statement>, InputError> {
        if self.is_at_end() {
            return Ok(None);
        }
        if let Some(statement) = self.try_parse_primitive(Sym::Semicolon)? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_scope()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_if()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_while()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_for()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_break()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_function_declaration()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.try_parse_return()? {
            return Ok(Some(statement));
        }
        Ok(None)
    }

    /// Try the primitive statement alternatives, each ending at `terminator`
    pub(crate) fn try_parse_primitive(
        &mut self,
        terminator: Sym,
    ) -> Result<Option<Statement>, InputError> {
        let location = self.here();

        // declaration: const? ident ident ;
        if let Some(mut parts) = self.match_pattern(&[
            OptTok(TokenSpec::Kw(Kw::Const)),
            ident(),
            ident(),
            sym(terminator),
        ])? {
            let constant = parts.next_opt_token().is_some();
            let type_name = parts.next_ident();
            let name = parts.next_ident();
            return Ok(Some(Statement::new(
                StatementKind::Declaration {
                    type_name,
                    name,
                    constant,
                },
                location,
            )));
        }

        // declaration with assignment: const? ident ident = expr ;
        if let Some(mut parts) = self.match_pattern(&[
            OptTok(TokenSpec::Kw(Kw::Const)),
            ident(),
            ident(),
            sym(Sym::Assign),
            Expression,
            sym(terminator),
        ])? {
            let constant = parts.next_opt_token().is_some();
            let type_name = parts.next_ident();
            let name = parts.next_ident();
            parts.skip(1);
            let value = parts.next_expression();
            return Ok(Some(Statement::new(
                StatementKind::DeclarationAssignment {
                    type_name,
                    name,
                    constant,
                    value,
                },
                location,
            )));
        }

        // assignment: ident = expr ;
        if let Some(mut parts) =
            self.match_pattern(&[ident(), sym(Sym::Assign), Expression, sym(terminator)])?
        {
            let name = parts.next_ident();
            parts.skip(1);
            let value = parts.next_expression();
            return Ok(Some(Statement::new(
                StatementKind::Assignment { name, value },
                location,
            )));
        }

        // increment: ident ++ ;
        if let Some(mut parts) =
            self.match_pattern(&[ident(), sym(Sym::PlusPlus), sym(terminator)])?
        {
            let name = parts.next_ident();
            return Ok(Some(Statement::new(
                StatementKind::Increment { name },
                location,
            )));
        }

        // decrement: ident -- ;
        if let Some(mut parts) =
            self.match_pattern(&[ident(), sym(Sym::MinusMinus), sym(terminator)])?
        {
            let name = parts.next_ident();
            return Ok(Some(Statement::new(
                StatementKind::Decrement { name },
                location,
            )));
        }

        // function call: ident ( arguments ) ;
        if let Some(mut parts) = self.match_pattern(&[
            ident(),
            sym(Sym::LParen),
            Arguments,
            sym(Sym::RParen),
            sym(terminator),
        ])? {
            let name = parts.next_ident();
            parts.skip(1);
            let arguments = parts.next_arguments();
            return Ok(Some(Statement::new(
                StatementKind::Call { name, arguments },
                location,
            )));
        }

        Ok(None)
    }

    /// Scope: `{ statements }`
    fn try_parse_scope(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();
        let Some(mut parts) =
            self.match_pattern(&[sym(Sym::LBrace), Statements, sym(Sym::RBrace)])?
        else {
            return Ok(None);
        };
        parts.skip(1);
        let statements = parts.next_statements();
        Ok(Some(Statement::new(
            StatementKind::Scope { statements },
            location,
        )))
    }

    /// If with chained else-if arms and an optional trailing else
    fn try_parse_if(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();
        let Some(mut parts) = self.match_pattern(&[
            kw(Kw::If),
            sym(Sym::LParen),
            Expression,
            sym(Sym::RParen),
            sym(Sym::LBrace),
            Statements,
            sym(Sym::RBrace),
        ])?
        else {
            return Ok(None);
        };
        parts.skip(2);
        let condition = parts.next_expression();
        parts.skip(2);
        let statements = parts.next_statements();

        let mut blocks = vec![IfBlock {
            condition,
            statements,
        }];
        let mut else_block = None;

        // "else" commits: anything malformed after it is a hard error.
        while self.check_kw(Kw::Else) {
            if matches!(
                self.peek_kind(1),
                Some(nitro_lex::TokenKind::Keyword(Kw::If))
            ) {
                self.advance();
                self.advance();
                self.expect_sym(Sym::LParen)?;
                let condition = self.parse_expression()?;
                self.expect_sym(Sym::RParen)?;
                self.expect_sym(Sym::LBrace)?;
                let statements = self.parse_statements()?;
                self.expect_sym(Sym::RBrace)?;
                blocks.push(IfBlock {
                    condition,
                    statements,
                });
            } else {
                self.advance();
                self.expect_sym(Sym::LBrace)?;
                let statements = self.parse_statements()?;
                self.expect_sym(Sym::RBrace)?;
                else_block = Some(statements);
                break;
            }
        }

        Ok(Some(Statement::new(
            StatementKind::If { blocks, else_block },
            location,
        )))
    }

    /// While loop or do-while loop
    fn try_parse_while(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();

        if let Some(mut parts) = self.match_pattern(&[
            kw(Kw::While),
            sym(Sym::LParen),
            Expression,
            sym(Sym::RParen),
            sym(Sym::LBrace),
            Statements,
            sym(Sym::RBrace),
        ])? {
            parts.skip(2);
            let condition = parts.next_expression();
            parts.skip(2);
            let statements = parts.next_statements();
            return Ok(Some(Statement::new(
                StatementKind::While {
                    condition,
                    statements,
                    do_while: false,
                },
                location,
            )));
        }

        if let Some(mut parts) = self.match_pattern(&[
            kw(Kw::Do),
            sym(Sym::LBrace),
            Statements,
            sym(Sym::RBrace),
            kw(Kw::While),
            sym(Sym::LParen),
            Expression,
            sym(Sym::RParen),
            sym(Sym::Semicolon),
        ])? {
            parts.skip(2);
            let statements = parts.next_statements();
            parts.skip(3);
            let condition = parts.next_expression();
            return Ok(Some(Statement::new(
                StatementKind::While {
                    condition,
                    statements,
                    do_while: true,
                },
                location,
            )));
        }

        Ok(None)
    }

    /// For loop: `for ( primitive ; expr ; primitive ) { statements }`
    ///
    /// The initialization's terminator is the header's first `;` and the
    /// action's terminator is the closing `)`; both are consumed by the
    /// primitive-statement placeholder itself.
    fn try_parse_for(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();
        let Some(mut parts) = self.match_pattern(&[
            kw(Kw::For),
            sym(Sym::LParen),
            Primitive(Sym::Semicolon),
            Expression,
            sym(Sym::Semicolon),
            Primitive(Sym::RParen),
            sym(Sym::LBrace),
            Statements,
            sym(Sym::RBrace),
        ])?
        else {
            return Ok(None);
        };
        parts.skip(2);
        let initialization = parts.next_statement();
        let condition = parts.next_expression();
        parts.skip(1);
        let action = parts.next_statement();
        parts.skip(1);
        let statements = parts.next_statements();

        Ok(Some(Statement::new(
            StatementKind::For {
                initialization: Some(initialization),
                condition: Some(condition),
                action: Some(action),
                statements,
            },
            location,
        )))
    }

    /// Break: `break ;`
    fn try_parse_break(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();
        let Some(_) = self.match_pattern(&[kw(Kw::Break), sym(Sym::Semicolon)])? else {
            return Ok(None);
        };
        Ok(Some(Statement::new(StatementKind::Break, location)))
    }

    /// Function declaration: `ident ident ( parameters ) { statements }`
    fn try_parse_function_declaration(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();
        let Some(mut parts) = self.match_pattern(&[
            ident(),
            ident(),
            sym(Sym::LParen),
            Parameters,
            sym(Sym::RParen),
            sym(Sym::LBrace),
            Statements,
            sym(Sym::RBrace),
        ])?
        else {
            return Ok(None);
        };
        let return_type = parts.next_ident();
        let name = parts.next_ident();
        parts.skip(1);
        let parameters = parts.next_parameters();
        parts.skip(2);
        let statements = parts.next_statements();

        Ok(Some(Statement::new(
            StatementKind::FunctionDeclaration {
                name,
                parameters,
                return_type,
                statements,
            },
            location,
        )))
    }

    /// Return: `return ;` or `return expr ;`
    fn try_parse_return(&mut self) -> Result<Option<Statement>, InputError> {
        let location = self.here();

        if self
            .match_pattern(&[kw(Kw::Return), sym(Sym::Semicolon)])?
            .is_some()
        {
            return Ok(Some(Statement::new(
                StatementKind::Return { value: None },
                location,
            )));
        }

        if let Some(mut parts) =
            self.match_pattern(&[kw(Kw::Return), Expression, sym(Sym::Semicolon)])?
        {
            parts.skip(1);
            let value = parts.next_expression();
            return Ok(Some(Statement::new(
                StatementKind::Return { value: Some(value) },
                location,
            )));
        }

        Ok(None)
    }

    /// Parse a possibly-empty comma-separated argument list
    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<crate::ast::Expression>, InputError> {
        let mut arguments = Vec::new();
        let Some(first) = self.try_parse_expression()? else {
            return Ok(arguments);
        };
        arguments.push(first);
        while self.match_sym(Sym::Comma) {
            arguments.push(self.parse_expression()?);
        }
        Ok(arguments)
    }

    /// Parse a possibly-empty comma-separated list of `type name` pairs
    pub(crate) fn parse_parameters(&mut self) -> Result<Vec<Parameter>, InputError> {
        let mut parameters = Vec::new();
        if !self.check_identifier() {
            return Ok(parameters);
        }
        loop {
            let location = self.here();
            let type_name = self.expect_parameter_ident()?;
            let name = self.expect_parameter_ident()?;
            parameters.push(Parameter {
                type_name,
                name,
                location,
            });
            if !self.match_sym(Sym::Comma) {
                break;
            }
        }
        Ok(parameters)
    }

    /// Require an identifier inside a parameter list
    fn expect_parameter_ident(&mut self) -> Result<String, InputError> {
        match self.current() {
            Some(token) => {
                if let nitro_lex::TokenKind::Identifier(name) = &token.kind {
                    let name = name.clone();
                    self.advance();
                    return Ok(name);
                }
                Err(self.invalid_parameter())
            },
            None => Err(self.invalid_parameter()),
        }
    }
}
