/// Parser state, statement grammar, and error recovery.
///
/// Declares the `Parser` itself: token lookahead, the statement and block
/// loops, and the expect/record helpers that let parsing continue after a
/// syntax error.
pub mod core;
/// Pratt expression parsing.
///
/// Prefix and infix roles for each token kind, from literals through call
/// and index expressions.
pub mod expression;
/// The operator precedence ladder.
pub mod precedence;

pub use self::core::Parser;
