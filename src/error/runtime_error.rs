#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// A runtime error unwinds the whole evaluation: any operation that receives
/// one from a sub-expression propagates it without doing further work. The
/// language offers no way to catch these.
pub enum RuntimeError {
    /// A name was neither bound in the environment chain nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// The callee of a call expression was not callable.
    NotAFunction {
        /// Runtime type tag of the value that was called.
        type_name: &'static str,
    },
    /// A binary operator was applied to operands of two different types.
    TypeMismatch {
        /// Runtime type tag of the left operand.
        left:     &'static str,
        /// The operator's source symbol.
        operator: &'static str,
        /// Runtime type tag of the right operand.
        right:    &'static str,
    },
    /// A unary operator was applied to an operand it does not support.
    UnknownUnaryOperator {
        /// The operator's source symbol.
        operator: &'static str,
        /// Runtime type tag of the operand.
        operand:  &'static str,
    },
    /// A binary operator was applied to same-typed operands it does not
    /// support.
    UnknownBinaryOperator {
        /// Runtime type tag of the left operand.
        left:     &'static str,
        /// The operator's source symbol.
        operator: &'static str,
        /// Runtime type tag of the right operand.
        right:    &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// An array was indexed with a negative index.
    IndexOutOfBound {
        /// The offending index.
        index: i64,
    },
    /// The index operator was applied to a value that is not indexable.
    IndexNotSupported {
        /// Runtime type tag of the value being indexed.
        type_name: &'static str,
    },
    /// A value with no hash capability was used as a hash key.
    UnusableAsHashKey {
        /// Runtime type tag of the offending key.
        type_name: &'static str,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many the function accepts.
        want: usize,
    },
    /// A builtin received an argument of a type it cannot operate on.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Runtime type tag of the offending argument.
        type_name: &'static str,
    },
    /// A builtin that only operates on arrays received something else.
    ExpectedArrayArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Runtime type tag of the offending argument.
        type_name: &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownUnaryOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownBinaryOperator { left,
                                          operator,
                                          right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IndexOutOfBound { index } => write!(f, "index out of bound: {index}"),
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator is not supported: {type_name}")
            },
            Self::UnusableAsHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },
            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments, got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` not supported, got {type_name}")
            },
            Self::ExpectedArrayArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {type_name}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
