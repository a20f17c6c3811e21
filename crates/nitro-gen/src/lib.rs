//! nitro-gen - Code generation for the Nitro language.
//!
//! Walks the AST into a linear textual IR buffer, resolving forward jumps
//! through a two-pass marker mechanism and performing flow-sensitive
//! semantic checks: declaration and shadowing, const rules, and primitive
//! type existence.
//!
//! # Example
//!
//! ```
//! use nitro_gen::{generate, Target};
//! use nitro_par::Parser;
//! use nitro_util::{FileId, Handler};
//!
//! let handler = Handler::new();
//! let tokens = nitro_lex::tokenize(FileId::DUMMY, "i32 x = 1 + 2;", &handler).unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! let artifact = generate(&program, Target::Debug, &handler).unwrap();
//!
//! let text = String::from_utf8(artifact.code).unwrap();
//! assert!(text.ends_with("> STACK[0]\n"));
//! ```

pub mod buffer;
mod generator;
pub mod scope;
pub mod types;

pub use buffer::{Marker, OutputBuffer, Transformer};
pub use generator::{generate, Artifact, Target};
pub use scope::{Scope, Variable};
pub use types::primitive_size;
