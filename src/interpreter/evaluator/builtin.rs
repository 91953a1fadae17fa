use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and returns a
/// value or a runtime error. [`Builtin::call`] enforces the entry's arity
/// before the handler runs, so a fixed-arity handler may index its
/// arguments directly. Builtins never mutate their arguments; the array
/// operations allocate new arrays.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// The builtin must receive exactly this many arguments.
    Exact(usize),
    /// The builtin accepts any number of arguments.
    Any,
}

/// One entry of the builtin table: a native function callable from scripts.
#[derive(Debug)]
pub struct Builtin {
    /// The name scripts call this builtin by.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

impl Builtin {
    /// Checks arity and invokes the native function.
    ///
    /// # Errors
    /// `wrong number of arguments` when the count does not satisfy the
    /// builtin's arity, plus whatever the builtin itself reports.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(want) = self.arity
           && args.len() != want
        {
            return Err(RuntimeError::WrongNumberOfArguments { got: args.len(),
                                                              want });
        }

        (self.func)(args)
    }
}

/// Defines the builtin table.
///
/// Each entry provides a string name, an arity specification, and a function
/// pointer. The macro produces the static `BUILTIN_TABLE` that
/// [`lookup`] searches.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"      => { arity: Arity::Exact(1), func: len },
    "head"     => { arity: Arity::Exact(1), func: head },
    "tail"     => { arity: Arity::Exact(1), func: tail },
    "killHead" => { arity: Arity::Exact(1), func: kill_head },
    "push"     => { arity: Arity::Exact(2), func: push },
    "puts"     => { arity: Arity::Any, func: puts },
}

/// Finds a builtin by name.
///
/// Consulted by identifier resolution after the environment chain misses,
/// so a `let` binding can shadow a builtin.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// `len(x)`: byte length of a string or element count of an array.
fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => {
            Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                    type_name: other.type_name(), })
        },
    }
}

/// `head(xs)`: first element of an array, or null when it is empty.
fn head(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => {
            Err(RuntimeError::ExpectedArrayArgument { builtin:   "head",
                                                      type_name: other.type_name(), })
        },
    }
}

/// `tail(xs)`: the *last* element of an array, or null when it is empty.
///
/// The name is idiosyncratic: this is not the Lisp rest-of-list operation
/// (that one is [`kill_head`]), it is the counterpart of [`head`] at the
/// other end of the array.
fn tail(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => {
            Err(RuntimeError::ExpectedArrayArgument { builtin:   "tail",
                                                      type_name: other.type_name(), })
        },
    }
}

/// `killHead(xs)`: a new array without the first element, or null when the
/// array is empty.
fn kill_head(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::from(elements[1..].to_vec()))
            }
        },
        other => {
            Err(RuntimeError::ExpectedArrayArgument { builtin:   "killHead",
                                                      type_name: other.type_name(), })
        },
    }
}

/// `push(xs, x)`: a new array with `x` appended; `xs` is left untouched.
fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut appended = elements.as_ref().clone();
            appended.push(args[1].clone());
            Ok(Value::from(appended))
        },
        other => {
            Err(RuntimeError::ExpectedArrayArgument { builtin:   "push",
                                                      type_name: other.type_name(), })
        },
    }
}

/// `puts(...)`: prints each argument's inspect form on its own line.
/// Returns null regardless of the arguments.
fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
