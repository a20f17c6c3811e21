//! Diagnostic reporting infrastructure.
//!
//! Compilation phases report warnings and internal errors through a shared
//! [`Handler`]. Messages are chunk lists so a sink can render emphasis on
//! embedded identifiers; [`Message`] also implements `Display` for plain
//! concatenation.
//!
//! # Examples
//!
//! ```
//! use nitro_util::{Diagnostic, Handler, Location, Message};
//!
//! let handler = Handler::new();
//! let message = Message::new().text("Variable ").bold("x").text(" is not declared");
//! handler.emit(Diagnostic::warning(message, Some(Location::DUMMY)));
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

mod render;

pub use render::render;

use std::cell::RefCell;
use std::fmt;

use crate::Location;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Informational message
    Info,
    /// A warning that does not prevent compilation
    Warning,
    /// An error; compilation has failed or an internal invariant broke
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// One piece of a diagnostic message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageChunk {
    /// Chunk text
    pub text: String,
    /// Whether a sink should render this chunk with emphasis
    pub bold: bool,
}

/// A diagnostic message as an ordered list of chunks
///
/// Sinks that support styling render `bold` chunks with emphasis; the
/// `Display` implementation concatenates all chunks as plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    chunks: Vec<MessageChunk>,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain chunk
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.chunks.push(MessageChunk {
            text: text.into(),
            bold: false,
        });
        self
    }

    /// Append an emphasized chunk
    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.chunks.push(MessageChunk {
            text: text.into(),
            bold: true,
        });
        self
    }

    /// The chunks of this message, in order
    pub fn chunks(&self) -> &[MessageChunk] {
        &self.chunks
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.chunks {
            write!(f, "{}", chunk.text)?;
        }
        Ok(())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::new().text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::new().text(text)
    }
}

/// A diagnostic with severity, message, and optional location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Diagnostic message
    pub message: Message,
    /// Source location, if known
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<Message>, location: Option<Location>) -> Self {
        Self {
            level,
            message: message.into(),
            location,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<Message>, location: Option<Location>) -> Self {
        Self::new(Level::Error, message, location)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<Message>, location: Option<Location>) -> Self {
        Self::new(Level::Warning, message, location)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<Message>, location: Option<Location>) -> Self {
        Self::new(Level::Info, message, location)
    }
}

/// Handler for collecting diagnostics
///
/// The handler is shared by reference across all pipeline stages; interior
/// mutability keeps the emitting side ergonomic. Diagnostics are recorded in
/// emission order, which is part of the pipeline's deterministic output.
///
/// # Examples
///
/// ```
/// use nitro_util::{Handler, Location};
///
/// let handler = Handler::new();
/// handler.warning("Snake case is cringe", Location::DUMMY);
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report a warning at a location
    pub fn warning(&self, message: impl Into<Message>, location: Location) {
        self.emit(Diagnostic::warning(message, Some(location)));
    }

    /// Report an error at a location
    pub fn error(&self, message: impl Into<Message>, location: Location) {
        self.emit(Diagnostic::error(message, Some(location)));
    }

    /// Report an internal error with no source location
    pub fn internal_error(&self, message: impl Into<Message>) {
        self.emit(Diagnostic::error(message, None));
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a snapshot of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Info), "info");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Error), "error");
    }

    #[test]
    fn test_message_display_concatenates_chunks() {
        let message = Message::new().text("Variable ").bold("x").text(" is not declared");
        assert_eq!(format!("{}", message), "Variable x is not declared");
    }

    #[test]
    fn test_message_chunks_keep_bold_flag() {
        let message = Message::new().text("a").bold("b");
        let chunks = message.chunks();
        assert!(!chunks[0].bold);
        assert!(chunks[1].bold);
    }

    #[test]
    fn test_message_from_str() {
        let message = Message::from("plain");
        assert_eq!(format!("{}", message), "plain");
        assert_eq!(message.chunks().len(), 1);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.warning("w", Location::DUMMY);
        handler.error("e", Location::DUMMY);
        handler.internal_error("i");

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_handler_preserves_order() {
        let handler = Handler::new();
        handler.warning("first", Location::DUMMY);
        handler.error("second", Location::DUMMY);

        let diagnostics = handler.diagnostics();
        assert_eq!(format!("{}", diagnostics[0].message), "first");
        assert_eq!(format!("{}", diagnostics[1].message), "second");
    }

    #[test]
    fn test_handler_clear() {
        let handler = Handler::new();
        handler.error("e", Location::DUMMY);
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_internal_error_has_no_location() {
        let handler = Handler::new();
        handler.internal_error("marker was never set");
        assert_eq!(handler.diagnostics()[0].location, None);
    }
}
