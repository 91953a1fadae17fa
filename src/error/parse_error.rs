#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Parse errors are diagnostics, not aborts: the parser records one and keeps
/// going, so a single pass over a source text can surface several of them.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// Rendering of the token kind that was required.
        expected: String,
        /// Rendering of the token kind that was actually found.
        found:    String,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// Rendering of the offending token kind.
        token: String,
    },
    /// An integer literal did not fit in a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
