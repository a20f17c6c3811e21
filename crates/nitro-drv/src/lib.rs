//! nitro-drv - Compiler driver for the Nitro language.
//!
//! Composes the three pipeline stages: lexing, parsing, and code
//! generation. The pipeline is a pure function from a source string to an
//! IR byte buffer; diagnostics travel through the shared [`Handler`] as a
//! side channel, and the first hard error aborts compilation.

use nitro_util::{FileId, Handler, InputError};

pub use nitro_gen::Target;

/// Compile a source string into the linearized IR artifact
///
/// The `file` identifies the source in diagnostics; register it in a
/// [`SourceMap`](nitro_util::SourceMap) to render snippets. Warnings
/// collected by the handler never abort compilation.
///
/// # Example
///
/// ```
/// use nitro_drv::{compile, Target};
/// use nitro_util::{FileId, Handler};
///
/// let handler = Handler::new();
/// let code = compile(FileId::DUMMY, "i32 x = 1;", Target::Debug, &handler).unwrap();
/// assert!(code.ends_with(b"> STACK[0]\n"));
/// ```
pub fn compile(
    file: FileId,
    source: &str,
    target: Target,
    handler: &Handler,
) -> Result<Vec<u8>, InputError> {
    let tokens = nitro_lex::tokenize(file, source, handler)?;
    tracing::debug!(tokens = tokens.len(), "lexed source");

    let program = nitro_par::Parser::new(tokens).parse()?;
    tracing::debug!(statements = program.len(), "parsed program");

    let artifact = nitro_gen::generate(&program, target, handler)?;
    tracing::debug!(bytes = artifact.code.len(), "generated code");

    Ok(artifact.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_success() {
        let handler = Handler::new();
        let code = compile(FileId::DUMMY, "i32 x = 1;", Target::Debug, &handler).unwrap();
        assert!(!code.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_lex_error_aborts() {
        let handler = Handler::new();
        let error = compile(FileId::DUMMY, "\u{1} nonsense", Target::Debug, &handler).unwrap_err();
        assert_eq!(error.to_string(), "Unexpected control character");
    }

    #[test]
    fn test_parse_error_aborts() {
        let handler = Handler::new();
        let error = compile(FileId::DUMMY, "i32 x = ;", Target::Debug, &handler).unwrap_err();
        assert_eq!(error.to_string(), "Invalid expression");
    }

    #[test]
    fn test_generate_error_aborts() {
        let handler = Handler::new();
        let error = compile(FileId::DUMMY, "x = 1;", Target::Debug, &handler).unwrap_err();
        assert_eq!(error.to_string(), "Variable x is not declared");
    }

    #[test]
    fn test_warnings_do_not_abort() {
        let handler = Handler::new();
        let source = "i32 snake_name = 1;";
        let code = compile(FileId::DUMMY, source, Target::Debug, &handler).unwrap();
        assert!(!code.is_empty());
        assert_eq!(handler.warning_count(), 1);
    }
}
