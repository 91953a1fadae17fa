use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, collection, function, unary},
        value::{
            core::{Function, Value},
            environment::SharedEnv,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The error side propagates with
/// `?`, which is what gives runtime errors their short-circuiting behavior:
/// no sibling expression is evaluated after one fails.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against `env`.
///
/// Statements run in source order. A `return` at the top level ends the
/// program with its unwrapped payload; otherwise the program's value is the
/// value of its last statement (or null for an empty program). The returned
/// value is never the internal `return` marker.
///
/// # Errors
/// Returns the first [`RuntimeError`] any statement produces; later
/// statements are not evaluated.
pub fn eval_program(program: &Program, env: &SharedEnv) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Return(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a `return` marker is passed through *without*
/// unwrapping, so it keeps unwinding until the nearest function boundary
/// (or the program top) catches it. An empty block evaluates to null.
pub(crate) fn eval_block(block: &Block, env: &SharedEnv) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if result.is_return() {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &SharedEnv) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = match value {
                Some(expr) => eval_expression(expr, env)?,
                None => Value::Null,
            };
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a single expression against `env`.
///
/// Sub-expressions evaluate left to right; the first runtime error wins.
pub(crate) fn eval_expression(expr: &Expr, env: &SharedEnv) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(Value::from(value)),
        Expr::Variable { name } => eval_variable(name, env),
        Expr::UnaryOp { op, expr } => {
            let operand = eval_expression(expr, env)?;
            unary::eval_unary_op(*op, &operand)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_binary_op(*op, &left, &right)
        },
        Expr::ArrayLiteral { elements } => collection::eval_array_literal(elements, env),
        Expr::HashLiteral { pairs } => collection::eval_hash_literal(pairs, env),
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            collection::eval_index_expression(&left, &index)
        },
        Expr::IfExpr { condition,
                       consequence,
                       alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::FunctionCall { callee, arguments } => {
            function::eval_call_expression(callee, arguments, env)
        },
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_variable(name: &str, env: &SharedEnv) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    builtin::lookup(name).map(Value::Builtin)
                         .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_owned() })
}

fn eval_if_expression(condition: &Expr,
                      consequence: &Block,
                      alternative: Option<&Block>,
                      env: &SharedEnv)
                      -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}
