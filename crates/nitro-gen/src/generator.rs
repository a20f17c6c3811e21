//! AST walk and IR emission.
//!
//! The generator walks statements depth-first, resolving variables through
//! lexical scopes and appending line-oriented textual IR to an
//! [`OutputBuffer`]. Forward jumps go through markers and are resolved in
//! the buffer's two-pass evaluation; numeric offsets inside jump
//! instructions are left-padded with `.` to 6 characters so every jump has
//! a fixed byte length.

use nitro_par::ast::{Expression, ExpressionKind, Statement, StatementKind};
use nitro_util::{Handler, InputError, Location, Message};

use crate::buffer::{Marker, OutputBuffer};
use crate::scope::{Scope, Variable};
use crate::types::primitive_size;

/// Compilation target
///
/// `debug` is the only target currently understood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Debug,
}

/// The produced artifact
pub struct Artifact {
    /// Linearized, jump-resolved IR bytes
    pub code: Vec<u8>,
}

/// Generate the artifact for a parsed program
///
/// Fails with [`InputError`] on the first semantic violation. Internal
/// invariant violations during marker resolution are reported through the
/// handler and leave an empty slot instead of aborting.
pub fn generate(
    program: &[Statement],
    target: Target,
    handler: &Handler,
) -> Result<Artifact, InputError> {
    match target {
        Target::Debug => {},
    }

    let mut generator = Generator::new(handler);
    let root = Scope::root();
    generator.generate_statements(program, &root)?;
    Ok(Artifact {
        code: generator.buffer.evaluate(handler),
    })
}

/// Statement/expression walker with scope resolution
struct Generator<'a> {
    /// Output buffer with markers
    buffer: OutputBuffer,

    /// Diagnostic sink for warnings and internal errors
    handler: &'a Handler,

    /// Next free byte offset in the stack frame; grows monotonically and
    /// persists across sibling and nested scopes
    stack_offset: usize,
}

impl<'a> Generator<'a> {
    fn new(handler: &'a Handler) -> Self {
        Self {
            buffer: OutputBuffer::new(),
            handler,
            stack_offset: 0,
        }
    }

    // =========================================================================
    // Emission helpers
    // =========================================================================

    /// Append one IR line
    fn emit(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push_str("\n");
    }

    /// Reserve an unconditional jump to `marker` (11 bytes)
    fn emit_jump(&mut self, marker: Marker) {
        self.buffer.reserve(marker, 11, |offset| {
            format!("JMP {:.>6}\n", offset).into_bytes()
        });
    }

    /// Close a condition section with a jump-if-true to `marker` (21 bytes)
    fn emit_jump_if_true(&mut self, marker: Marker) {
        self.buffer.reserve(marker, 21, |offset| {
            format!(") JMP IF TRUE {:.>6}\n", offset).into_bytes()
        });
    }

    /// Close a condition section with a jump-if-false to `marker` (22 bytes)
    fn emit_jump_if_false(&mut self, marker: Marker) {
        self.buffer.reserve(marker, 22, |offset| {
            format!(") JMP IF FALSE {:.>6}\n", offset).into_bytes()
        });
    }

    // =========================================================================
    // Scope and declaration handling
    // =========================================================================

    /// Generate a statement list in a fresh scope inheriting from `inherited`
    fn generate_statements(
        &mut self,
        statements: &[Statement],
        inherited: &Scope,
    ) -> Result<(), InputError> {
        let mut scope = inherited.child();
        for statement in statements {
            self.generate_statement(statement, &mut scope)?;
        }
        Ok(())
    }

    /// Declare a variable in the current scope, assigning its offset
    fn declare(
        &mut self,
        scope: &mut Scope,
        type_name: &str,
        name: &str,
        constant: bool,
        location: Location,
    ) -> Result<usize, InputError> {
        let Some(size) = primitive_size(type_name) else {
            return Err(InputError::new(
                Message::new().text("Invalid type identifier ").bold(type_name),
                location,
            ));
        };

        if scope.declared_here(name) {
            return Err(InputError::new(
                Message::new()
                    .text("Variable ")
                    .bold(name)
                    .text(" is already declared"),
                location,
            ));
        }

        if scope.shadows(name) {
            self.handler.warning(
                Message::new()
                    .text("Variable ")
                    .bold(name)
                    .text(" shadows an earlier declaration"),
                location,
            );
        }

        let offset = self.stack_offset;
        self.stack_offset += size;
        scope.declare(Variable {
            type_name: type_name.to_string(),
            name: name.to_string(),
            constant,
            offset,
        });
        Ok(offset)
    }

    /// Look up a declared variable, or fail
    fn lookup<'s>(
        &self,
        scope: &'s Scope,
        name: &str,
        location: Location,
    ) -> Result<&'s Variable, InputError> {
        scope.lookup(name).ok_or_else(|| {
            InputError::new(
                Message::new()
                    .text("Variable ")
                    .bold(name)
                    .text(" is not declared"),
                location,
            )
        })
    }

    /// Look up a variable that is about to be written or modified
    fn lookup_mutable(
        &self,
        scope: &Scope,
        name: &str,
        location: Location,
        verb: &str,
    ) -> Result<usize, InputError> {
        let variable = self.lookup(scope, name, location)?;
        if variable.constant {
            return Err(InputError::new(
                Message::new()
                    .text(format!("Cannot {} a constant variable ", verb))
                    .bold(name),
                location,
            ));
        }
        Ok(variable.offset)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn generate_statement(
        &mut self,
        statement: &Statement,
        scope: &mut Scope,
    ) -> Result<(), InputError> {
        let location = statement.location;
        match &statement.kind {
            StatementKind::Declaration {
                type_name,
                name,
                constant,
            } => {
                if *constant {
                    return Err(InputError::new(
                        "Cannot declare a constant without an assignment",
                        location,
                    ));
                }
                self.declare(scope, type_name, name, false, location)?;
                Ok(())
            },

            StatementKind::DeclarationAssignment {
                type_name,
                name,
                constant,
                value,
            } => {
                let offset = self.declare(scope, type_name, name, *constant, location)?;
                self.generate_expression(value, scope)?;
                self.emit(&format!("> STACK[{}]", offset));
                Ok(())
            },

            StatementKind::Assignment { name, value } => {
                let offset = self.lookup_mutable(scope, name, location, "assign to")?;
                self.generate_expression(value, scope)?;
                self.emit(&format!("> STACK[{}]", offset));
                Ok(())
            },

            StatementKind::Increment { name } => {
                let offset = self.lookup_mutable(scope, name, location, "modify")?;
                self.emit(&format!("STACK[{}]++", offset));
                Ok(())
            },

            StatementKind::Decrement { name } => {
                let offset = self.lookup_mutable(scope, name, location, "modify")?;
                self.emit(&format!("STACK[{}]--", offset));
                Ok(())
            },

            StatementKind::Call { .. } => Err(InputError::new(
                "Not implemented: function calls",
                location,
            )),

            StatementKind::Scope { statements } => {
                self.emit("; BEGIN SCOPE");
                self.generate_statements(statements, scope)?;
                self.emit("; END SCOPE");
                Ok(())
            },

            StatementKind::If { blocks, else_block } => {
                self.generate_if(blocks, else_block.as_deref(), scope)
            },

            StatementKind::While {
                condition,
                statements,
                do_while,
            } => {
                if *do_while {
                    self.generate_do_while(condition, statements, scope)
                } else {
                    self.generate_while(condition, statements, scope)
                }
            },

            StatementKind::For {
                initialization,
                condition,
                action,
                statements,
            } => self.generate_for(
                initialization.as_deref(),
                condition.as_ref(),
                action.as_deref(),
                statements,
                scope,
            ),

            StatementKind::Break => Err(InputError::new(
                "Not implemented: break statements",
                location,
            )),

            StatementKind::FunctionDeclaration { .. } => Err(InputError::new(
                "Not implemented: function declarations",
                location,
            )),

            StatementKind::Return { .. } => Err(InputError::new(
                "Not implemented: return statements",
                location,
            )),
        }
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn generate_if(
        &mut self,
        blocks: &[nitro_par::ast::IfBlock],
        else_block: Option<&[Statement]>,
        scope: &Scope,
    ) -> Result<(), InputError> {
        let enters: Vec<Marker> = blocks.iter().map(|_| self.buffer.marker()).collect();
        let else_enter = self.buffer.marker();
        let exit = self.buffer.marker();

        // Test every condition in order; the first true one jumps to its
        // block, and falling through all of them reaches the else entry.
        for (block, enter) in blocks.iter().zip(&enters) {
            self.emit("(");
            self.generate_expression(&block.condition, scope)?;
            self.emit_jump_if_true(*enter);
        }
        self.emit_jump(else_enter);

        for (block, enter) in blocks.iter().zip(&enters) {
            self.buffer.set(*enter);
            self.emit("{");
            self.generate_statements(&block.statements, scope)?;
            self.emit("}");
            self.emit_jump(exit);
        }

        self.buffer.set(else_enter);
        if let Some(statements) = else_block {
            self.emit("{");
            self.generate_statements(statements, scope)?;
            self.emit("}");
        }
        self.buffer.set(exit);
        Ok(())
    }

    fn generate_while(
        &mut self,
        condition: &Expression,
        statements: &[Statement],
        scope: &Scope,
    ) -> Result<(), InputError> {
        let enter = self.buffer.marker();
        let exit = self.buffer.marker();

        self.buffer.set(enter);
        self.emit("(");
        self.generate_expression(condition, scope)?;
        self.emit_jump_if_false(exit);

        self.generate_statements(statements, scope)?;
        self.emit_jump(enter);
        self.buffer.set(exit);
        Ok(())
    }

    fn generate_do_while(
        &mut self,
        condition: &Expression,
        statements: &[Statement],
        scope: &Scope,
    ) -> Result<(), InputError> {
        let enter = self.buffer.marker();

        self.buffer.set(enter);
        self.generate_statements(statements, scope)?;

        self.emit("(");
        self.generate_expression(condition, scope)?;
        self.emit_jump_if_true(enter);
        Ok(())
    }

    /// For loop wiring: initialization runs once, then each iteration tests
    /// the condition, exits if false, runs the body, and runs the action.
    /// Header declarations live in a nested scope visible to condition,
    /// action, and body but not to anything after the loop.
    fn generate_for(
        &mut self,
        initialization: Option<&Statement>,
        condition: Option<&Expression>,
        action: Option<&Statement>,
        statements: &[Statement],
        scope: &Scope,
    ) -> Result<(), InputError> {
        let action_marker = self.buffer.marker();
        let condition_marker = self.buffer.marker();
        let exit_marker = self.buffer.marker();

        let mut header = scope.child();
        if let Some(initialization) = initialization {
            self.generate_statement(initialization, &mut header)?;
        }
        self.emit_jump(condition_marker);

        self.buffer.set(action_marker);
        if let Some(action) = action {
            self.generate_statement(action, &mut header)?;
        }

        self.buffer.set(condition_marker);
        if let Some(condition) = condition {
            self.emit("(");
            self.generate_expression(condition, &header)?;
            self.emit_jump_if_false(exit_marker);
        }

        self.generate_statements(statements, &header)?;
        self.emit_jump(action_marker);

        if condition.is_some() {
            self.buffer.set(exit_marker);
        }
        Ok(())
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn generate_expression(
        &mut self,
        expression: &Expression,
        scope: &Scope,
    ) -> Result<(), InputError> {
        let location = expression.location;
        match &expression.kind {
            ExpressionKind::Integer(value) => {
                self.emit(&format!("< LITERAL INT {}", value));
                Ok(())
            },

            ExpressionKind::Float(value) => {
                self.emit(&format!("< LITERAL FLOAT {}", value));
                Ok(())
            },

            ExpressionKind::Str(value) => {
                self.emit(&format!("< LITERAL STRING {}", value));
                Ok(())
            },

            ExpressionKind::Variable(name) => {
                let variable = self.lookup(scope, name, location)?;
                let offset = variable.offset;
                self.emit(&format!("< STACK[{}]", offset));
                Ok(())
            },

            ExpressionKind::Increment(name) => {
                let offset = self.lookup_mutable(scope, name, location, "modify")?;
                self.emit(&format!("STACK[{}]++", offset));
                Ok(())
            },

            ExpressionKind::Decrement(name) => {
                let offset = self.lookup_mutable(scope, name, location, "modify")?;
                self.emit(&format!("STACK[{}]--", offset));
                Ok(())
            },

            ExpressionKind::Sub(inner) => self.generate_expression(inner, scope),

            ExpressionKind::Call { .. } => Err(InputError::new(
                "Not implemented: function calls",
                location,
            )),

            ExpressionKind::Binary { op, left, right } => {
                self.emit("; EVAL A");
                self.generate_expression(left, scope)?;
                self.emit("; EVAL B");
                self.generate_expression(right, scope)?;
                self.emit(&format!("< A {{{}}} B", op.tag()));
                Ok(())
            },
        }
    }
}
