//! # simplescript
//!
//! simplescript is a small, dynamically typed, expression oriented scripting
//! language. A source text flows through three phases: the lexer turns it
//! into tokens, the Pratt parser builds an abstract syntax tree, and the
//! tree-walking evaluator computes a value against a lexically scoped
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree, plus the operator
/// types shared with the evaluator. Every node renders its canonical, fully
/// parenthesized form through `Display`.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Carries literal payloads (integers, strings, booleans) for the
///   evaluator.
/// - Renders the canonical program form used to verify parses.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parser diagnostics accumulate and never halt parsing;
/// runtime errors unwind the evaluation that produced them.
///
/// # Responsibilities
/// - Defines error enums for both phases, with the exact message texts the
///   drivers print.
/// - Supports integration with standard error handling traits.
/// - Sums both phases into [`Error`] for the one-call entry point.
pub mod error;
/// The language pipeline: lexer, parser, values, evaluator.
///
/// This module ties together tokenization, parsing, the runtime value
/// model, environments, and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the phase-by-phase API the drivers and tests build on.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// One persistent environment per session; parser errors and runtime errors
/// are reported per line without ending the session.
pub mod repl;

pub use ast::Program;
pub use error::{Error, ParseError, RuntimeError};
pub use interpreter::{
    evaluator::{EvalResult, eval_program},
    lexer::{Lexer, Token},
    parser::Parser,
    value::{
        core::Value,
        environment::{Environment, SharedEnv},
    },
};

/// Parses and evaluates a source text against an existing environment.
///
/// This is the embedding entry point: lex, parse, and evaluate in one call.
/// Bindings the program creates live on in `env`, so repeated calls against
/// the same environment behave like successive lines of a session.
///
/// # Errors
/// Returns [`Error::Parse`] with every diagnostic the parser collected (the
/// program is not evaluated in that case), or [`Error::Runtime`] with the
/// error that unwound the evaluation.
///
/// # Examples
/// ```
/// use simplescript::{Environment, Value, evaluate};
///
/// let env = Environment::new();
/// let value = evaluate("let six = 2 * 3; six;", &env).unwrap();
/// assert_eq!(value, Value::Integer(6));
///
/// // The binding persists in the environment.
/// let value = evaluate("six + 1", &env).unwrap();
/// assert_eq!(value, Value::Integer(7));
/// ```
pub fn evaluate(source: &str, env: &SharedEnv) -> Result<Value, Error> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();

    if !parser.errors().is_empty() {
        return Err(Error::Parse(parser.errors().to_vec()));
    }

    Ok(eval_program(&program, env)?)
}
