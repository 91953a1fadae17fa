use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation, dispatching on the operand types.
///
/// Integers support the full operator set, strings support `+`
/// (concatenation), and booleans support `==` and `!=`. Operands of two
/// different types are a `type mismatch`; same-typed operands with no rule
/// are an `unknown operator`.
pub(crate) fn eval_binary_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_op(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_op(op, l, r),
        (Value::Bool(l), Value::Bool(r)) => eval_bool_op(op, *l, *r),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                             operator: op.symbol(),
                                             right:    right.type_name(), })
        },
        _ => {
            Err(RuntimeError::UnknownBinaryOperator { left:     left.type_name(),
                                                      operator: op.symbol(),
                                                      right:    right.type_name(), })
        },
    }
}

/// Integer arithmetic wraps on overflow (two's complement); division
/// truncates toward zero and rejects a zero divisor.
fn eval_integer_op(op: BinaryOperator, l: i64, r: i64) -> EvalResult<Value> {
    let value = match op {
        BinaryOperator::Add => Value::Integer(l.wrapping_add(r)),
        BinaryOperator::Sub => Value::Integer(l.wrapping_sub(r)),
        BinaryOperator::Mul => Value::Integer(l.wrapping_mul(r)),
        BinaryOperator::Div => {
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(l.wrapping_div(r))
        },
        BinaryOperator::Equal => Value::Bool(l == r),
        BinaryOperator::NotEqual => Value::Bool(l != r),
        BinaryOperator::Less => Value::Bool(l < r),
        BinaryOperator::Greater => Value::Bool(l > r),
        BinaryOperator::LessEqual => Value::Bool(l <= r),
        BinaryOperator::GreaterEqual => Value::Bool(l >= r),
    };

    Ok(value)
}

fn eval_string_op(op: BinaryOperator, l: &str, r: &str) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(format!("{l}{r}"))),
        _ => {
            Err(RuntimeError::UnknownBinaryOperator { left:     "STRING",
                                                      operator: op.symbol(),
                                                      right:    "STRING", })
        },
    }
}

fn eval_bool_op(op: BinaryOperator, l: bool, r: bool) -> EvalResult<Value> {
    match op {
        BinaryOperator::Equal => Ok(Value::Bool(l == r)),
        BinaryOperator::NotEqual => Ok(Value::Bool(l != r)),
        _ => {
            Err(RuntimeError::UnknownBinaryOperator { left:     "BOOL",
                                                      operator: op.symbol(),
                                                      right:    "BOOL", })
        },
    }
}
