use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Block, LiteralValue},
    interpreter::{
        evaluator::builtin::Builtin,
        value::{
            environment::SharedEnv,
            hash_key::{HashKey, HashPair},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions, bindings,
/// function returns, and conditional evaluations. Collections are shared via
/// [`Rc`]; the builtins allocate new ones rather than mutating.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`). Produced by comparison operators
    /// and logical NOT, and consumed as the condition of `if` expressions.
    Bool(bool),
    /// A string of bytes. `+` concatenates two of these.
    Str(String),
    /// The absence of a value: missing `else` arms, out-of-range array reads,
    /// absent hash keys, and `let` statements all produce it.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values. The original key value is
    /// preserved alongside each entry for inspection.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
    /// Wrapper that carries a `return` payload up to the nearest function
    /// boundary. Never observable by user code: program and call evaluation
    /// unwrap it.
    Return(Box<Self>),
}

/// A user-defined function value.
///
/// Holds the parameter list and body from the function literal, plus the
/// environment the literal was evaluated in. Calls extend that environment,
/// never the caller's, which is what makes closures work.
pub struct Function {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment captured at definition time.
    pub env:        SharedEnv,
}

// Manual impl because the captured environment routinely contains the
// function itself; deriving Debug would recurse forever.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Returns the runtime type tag used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOL",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Tests the value as a condition.
    ///
    /// Null and `false` are the only falsy values; every other value,
    /// including `0` and the empty string, counts as true.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => false,
            _ => true,
        }
    }

    /// Returns `true` if the value is the `return` marker.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }
}

// Equality is structural for data and identity for code: two function values
// are equal only when they are the same closure. This keeps comparison from
// walking into captured environments, which may contain the function itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => std::ptr::eq(*l, *r),
            (Self::Return(l), Self::Return(r)) => l == r,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "ft(")?;
                for (index, name) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
