/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an AST: unexpected tokens, tokens no expression can start with, and
/// malformed integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// identifiers, type mismatches, unsupported operators, bad indexing,
/// unhashable keys, and builtin argument problems.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// The library-level error sum returned by [`crate::evaluate`].
///
/// A source text either fails to parse (with every diagnostic the parser
/// collected) or fails at runtime (with the single error that unwound the
/// evaluation).
pub enum Error {
    /// The parser recorded one or more errors; the program was not evaluated.
    Parse(Vec<ParseError>),
    /// Parsing succeeded but evaluation produced a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
