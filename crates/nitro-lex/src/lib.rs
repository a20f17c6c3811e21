//! nitro-lex - Lexical analysis for the Nitro language.
//!
//! Converts UTF-8 source text into a stream of located tokens. The lexer is
//! total-or-fail: for any input it either produces a token list accounting
//! for every non-whitespace, non-comment byte, or raises exactly one
//! [`InputError`] with a valid location. Style warnings go through the
//! diagnostic handler and never alter the stream.
//!
//! # Example
//!
//! ```
//! use nitro_lex::{tokenize, TokenKind};
//! use nitro_util::{FileId, Handler};
//!
//! let handler = Handler::new();
//! let tokens = tokenize(FileId::DUMMY, "i32 x = 42;", &handler).unwrap();
//!
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[3].kind, TokenKind::Integer(42));
//! ```

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Kw, Sym, Token, TokenKind};

use nitro_util::{FileId, Handler, InputError};

/// Tokenize a source string
///
/// Convenience wrapper that runs a [`Lexer`] to completion.
pub fn tokenize(file: FileId, source: &str, handler: &Handler) -> Result<Vec<Token>, InputError> {
    Lexer::new(file, source, handler).tokenize()
}
