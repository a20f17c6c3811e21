//! Plain-text rendering of diagnostics.
//!
//! Renders a diagnostic as `level: message`, followed by the file position
//! and the quoted source line with a caret under the offending column when a
//! location is available. Colored output is a concern of the embedding tool,
//! not of this crate.

use std::fmt::Write;

use super::Diagnostic;
use crate::SourceMap;

/// Render a diagnostic as plain text
///
/// # Examples
///
/// ```
/// use nitro_util::{render, Diagnostic, Location, SourceMap};
///
/// let mut sources = SourceMap::new();
/// let file = sources.add("main.nitro", "i32 x = ;\n");
/// let diagnostic = Diagnostic::error(
///     "Invalid expression",
///     Some(Location::new(file, 1, 9)),
/// );
///
/// let text = render(&diagnostic, &sources);
/// assert!(text.starts_with("error: Invalid expression"));
/// assert!(text.contains("main.nitro:1:9"));
/// ```
pub fn render(diagnostic: &Diagnostic, sources: &SourceMap) -> String {
    let mut out = format!("{}: {}", diagnostic.level, diagnostic.message);

    let Some(location) = diagnostic.location else {
        return out;
    };
    let Some(file) = sources.get(location.file) else {
        return out;
    };

    let _ = write!(
        out,
        "\n  --> {}:{}:{}",
        file.name(),
        location.line,
        location.column
    );

    if let Some(line) = file.line_text(location.line) {
        let line_number = location.line.to_string();
        let width = line_number.len().max(3);
        let _ = write!(out, "\n{:>width$} | {}", line_number, line, width = width);
        let _ = write!(out, "\n{:>width$} | ", "", width = width);
        for _ in 1..location.column {
            out.push(' ');
        }
        out.push('^');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Message, SourceMap};

    #[test]
    fn test_render_without_location() {
        let sources = SourceMap::new();
        let diagnostic = Diagnostic::error("marker was never set", None);
        assert_eq!(render(&diagnostic, &sources), "error: marker was never set");
    }

    #[test]
    fn test_render_with_snippet() {
        let mut sources = SourceMap::new();
        let file = sources.add("main.nitro", "first\nx = 2;\n");
        let diagnostic = Diagnostic::error(
            Message::new().text("Variable ").bold("x").text(" is not declared"),
            Some(Location::new(file, 2, 1)),
        );

        let text = render(&diagnostic, &sources);
        assert!(text.contains("error: Variable x is not declared"));
        assert!(text.contains("main.nitro:2:1"));
        assert!(text.contains("  2 | x = 2;"));
        assert!(text.ends_with("| ^"));
    }

    #[test]
    fn test_render_caret_column() {
        let mut sources = SourceMap::new();
        let file = sources.add("main.nitro", "i32 x = 1;\n");
        let diagnostic = Diagnostic::warning("w", Some(Location::new(file, 1, 5)));

        let text = render(&diagnostic, &sources);
        let caret_line = text.lines().last().unwrap();
        assert_eq!(caret_line, "    |     ^");
    }

    #[test]
    fn test_render_unknown_file() {
        let sources = SourceMap::new();
        let diagnostic = Diagnostic::warning("w", Some(Location::DUMMY));
        assert_eq!(render(&diagnostic, &sources), "warning: w");
    }
}
