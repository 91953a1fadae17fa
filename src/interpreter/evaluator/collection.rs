use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{
            core::Value,
            environment::SharedEnv,
            hash_key::HashPair,
        },
    },
};

/// Evaluates an array literal, element by element, left to right.
pub(crate) fn eval_array_literal(elements: &[Expr], env: &SharedEnv) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(Value::from(values))
}

/// Evaluates a hash literal.
///
/// For each pair, the key evaluates first and must be hashable (integer,
/// boolean, or string); then the value evaluates. A later duplicate key
/// overwrites the earlier entry.
pub(crate) fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &SharedEnv) -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()
                          .ok_or_else(|| RuntimeError::UnusableAsHashKey { type_name:
                                                                               key.type_name() })?;
        let value = eval_expression(value_expr, env)?;

        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}

/// Evaluates an index expression, dispatching on the collection's type.
///
/// Arrays take integer indices: negative is an error, past the end is null.
/// Hashes take any hashable key: a miss is null, an unhashable key is an
/// error. Indexing anything else is an error.
pub(crate) fn eval_index_expression(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(index)) => eval_array_index(elements, *index),
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key()
                              .ok_or_else(|| RuntimeError::UnusableAsHashKey { type_name:
                                                                                   key.type_name() })?;
            Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { type_name: left.type_name() }),
    }
}

fn eval_array_index(elements: &[Value], index: i64) -> EvalResult<Value> {
    if index < 0 {
        return Err(RuntimeError::IndexOutOfBound { index });
    }

    Ok(usize::try_from(index).ok()
                             .and_then(|index| elements.get(index).cloned())
                             .unwrap_or(Value::Null))
}
