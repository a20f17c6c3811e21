//! Lexical scopes for the generator.
//!
//! Each recursive entry into statement generation opens a fresh scope whose
//! parent chain is the lexically enclosing scopes. Lookup walks the chain
//! outward; collision detection for new declarations only consults the
//! scope's own table, so shadowing an inherited binding is legal (the
//! generator warns about it separately).

use indexmap::IndexMap;

/// A variable binding created at a declaration site
///
/// Never mutated after creation; it lives for the scope it was declared in.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Primitive type name
    pub type_name: String,
    /// Variable name
    pub name: String,
    /// Whether the binding is const
    pub constant: bool,
    /// Byte offset in the stack frame
    pub offset: usize,
}

/// One lexical scope plus its chain of enclosing scopes
pub struct Scope<'a> {
    vars: IndexMap<String, Variable>,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    /// Create a root scope with no parent
    pub fn root() -> Self {
        Self {
            vars: IndexMap::new(),
            parent: None,
        }
    }

    /// Open a child scope inheriting from `self`
    pub fn child(&self) -> Scope<'_> {
        Scope {
            vars: IndexMap::new(),
            parent: Some(self),
        }
    }

    /// True if `name` is declared in this scope itself
    pub fn declared_here(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// True if `name` is declared in any enclosing scope
    pub fn shadows(&self, name: &str) -> bool {
        let mut scope = self.parent;
        while let Some(current) = scope {
            if current.vars.contains_key(name) {
                return true;
            }
            scope = current.parent;
        }
        false
    }

    /// Add a binding to this scope
    ///
    /// The caller has already checked for a same-scope collision.
    pub fn declare(&mut self, variable: Variable) {
        self.vars.insert(variable.name.clone(), variable);
    }

    /// Find `name` here or in any enclosing scope
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        if let Some(variable) = self.vars.get(name) {
            return Some(variable);
        }
        let mut scope = self.parent;
        while let Some(current) = scope {
            if let Some(variable) = current.vars.get(name) {
                return Some(variable);
            }
            scope = current.parent;
        }
        None
    }
}
