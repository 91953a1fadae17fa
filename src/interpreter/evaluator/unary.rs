use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation.
///
/// `!` is defined for every value and produces the negation of its
/// truthiness; `-` is defined for integers only.
pub(crate) fn eval_unary_op(op: UnaryOperator, operand: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOperator::Negate => eval_negate(operand),
    }
}

fn eval_negate(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
        other => {
            Err(RuntimeError::UnknownUnaryOperator { operator: "-",
                                                     operand:  other.type_name(), })
        },
    }
}
