//! Core error type for the compilation pipeline.

use thiserror::Error;

use crate::{Diagnostic, Location, Message};

/// A user-facing compilation failure at a known source position
///
/// The first `InputError` raised by any stage unwinds the pipeline; callers
/// propagate it with `?` and the driver renders it at the top. The message is
/// a chunk list so sinks can emphasize embedded identifiers.
///
/// # Examples
///
/// ```
/// use nitro_util::{InputError, Location, Message};
///
/// let error = InputError::new(
///     Message::new().text("Variable ").bold("x").text(" is not declared"),
///     Location::DUMMY,
/// );
/// assert_eq!(error.to_string(), "Variable x is not declared");
/// ```
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct InputError {
    /// What went wrong
    pub message: Message,
    /// Where it went wrong
    pub location: Location,
}

impl InputError {
    /// Create a new input error
    pub fn new(message: impl Into<Message>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Convert into an error diagnostic for rendering
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.message, Some(self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let error = InputError::new("Invalid statement", Location::DUMMY);
        assert_eq!(error.to_string(), "Invalid statement");
    }

    #[test]
    fn test_into_diagnostic_keeps_location() {
        let location = Location::new(crate::FileId(0), 4, 2);
        let diagnostic = InputError::new("Unexpected token", location).into_diagnostic();
        assert_eq!(diagnostic.location, Some(location));
        assert_eq!(diagnostic.level, crate::Level::Error);
    }
}
