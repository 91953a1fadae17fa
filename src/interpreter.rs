/// Tree-walking evaluation of parsed programs.
///
/// Walks the AST produced by the parser, threading a shared environment
/// handle, and produces runtime values or runtime errors.
pub mod evaluator;
/// Tokenization of source text.
///
/// Defines the token set and the lexer that produces one token per request.
pub mod lexer;
/// Pratt parsing of token streams into the AST.
pub mod parser;
/// Runtime values, hash keys, and lexically scoped environments.
pub mod value;
