//! nitro-util - Foundation types for the Nitro compiler.
//!
//! This crate provides the pieces every compilation phase relies on:
//!
//! - [`Location`] / [`FileId`] — 1-based source positions attached to
//!   tokens, AST nodes, and diagnostics
//! - [`SourceMap`] / [`SourceFile`] — registered source files with line
//!   extraction for diagnostic snippets
//! - [`Diagnostic`] / [`Handler`] / [`Message`] — the diagnostic sink shared
//!   across phases, with chunked messages for styled rendering
//! - [`InputError`] — the hard failure type propagated with `?` through the
//!   pipeline

mod diagnostic;
mod error;
mod location;
mod source_map;

pub use diagnostic::{render, Diagnostic, Handler, Level, Message, MessageChunk};
pub use error::InputError;
pub use location::{FileId, Location};
pub use source_map::{SourceFile, SourceMap};
