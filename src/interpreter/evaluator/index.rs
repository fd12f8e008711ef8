use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Object, hash_key::HashKey},
    },
};

/// Evaluates an index expression on already-evaluated operands.
///
/// - Array targets require an integer index: negative indexes and indexes
///   past the last element are errors.
/// - Hash targets require a hashable index; a missing key yields `null`.
/// - Every other target kind is not indexable.
///
/// # Example
/// ```
/// use vervet::interpreter::{evaluator::index::eval_index, value::core::Object};
///
/// let array: Object = vec![Object::Integer(10), Object::Integer(20)].into();
///
/// assert_eq!(eval_index(&array, &Object::Integer(1)),
///            Ok(Object::Integer(20)));
/// ```
pub fn eval_index(target: &Object, index: &Object) -> EvalResult<Object> {
    match target {
        Object::Array(elements) => eval_array_index(elements, index),
        Object::Hash(pairs) => eval_hash_index(pairs, index),
        other => Err(RuntimeError::NotIndexable { kind: other.kind() }),
    }
}

/// Looks up an array element by position.
fn eval_array_index(elements: &[Object], index: &Object) -> EvalResult<Object> {
    let Object::Integer(position) = index else {
        return Err(RuntimeError::InvalidIndex { kind: index.kind() });
    };

    if *position < 0 {
        return Err(RuntimeError::NegativeIndex { index: *position });
    }

    match usize::try_from(*position).ok().and_then(|offset| elements.get(offset)) {
        Some(value) => Ok(value.clone()),
        None => {
            let max = i64::try_from(elements.len()).map_or(i64::MAX, |length| length - 1);
            Err(RuntimeError::IndexOutOfBounds { index: *position,
                                                 max })
        },
    }
}

/// Looks up a hash entry by key; a miss yields `null`.
fn eval_hash_index(pairs: &HashMap<HashKey, Object>, index: &Object) -> EvalResult<Object> {
    let Some(key) = HashKey::from_object(index) else {
        return Err(RuntimeError::InvalidIndex { kind: index.kind() });
    };

    Ok(pairs.get(&key).cloned().unwrap_or(Object::Null))
}
