use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block, eval_expression},
        value::{
            core::{Function, Value},
            environment::{Environment, SharedEnv},
        },
    },
};

/// Evaluates a call expression.
///
/// The callee evaluates first, then every argument in source order; any
/// error short-circuits the rest. User functions run their body in a fresh
/// environment enclosing the *captured* one, so a closure sees the names
/// from its definition site, not the caller's.
pub(crate) fn eval_call_expression(callee: &Expr,
                                   arguments: &[Expr],
                                   env: &SharedEnv)
                                   -> EvalResult<Value> {
    let callee = eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    match callee {
        Value::Function(function) => apply_function(&function, args),
        Value::Builtin(builtin) => builtin.call(&args),
        other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
    }
}

fn apply_function(function: &Function, args: Vec<Value>) -> EvalResult<Value> {
    if args.len() != function.parameters.len() {
        return Err(RuntimeError::WrongNumberOfArguments { got:  args.len(),
                                                          want: function.parameters.len(), });
    }

    let call_env = Environment::new_enclosed(&function.env);
    {
        let mut frame = call_env.borrow_mut();
        for (name, value) in function.parameters.iter().zip(args) {
            frame.set(name.clone(), value);
        }
    }

    // The function boundary is where a `return` marker stops unwinding.
    match eval_block(&function.body, &call_env)? {
        Value::Return(value) => Ok(*value),
        value => Ok(value),
    }
}
