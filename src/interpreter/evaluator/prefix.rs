use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// - `!x` negates truthiness: it yields `true` exactly when `x` is `false`
///   or `null`, and `false` for every other value (including `0`, `""`,
///   `[]`, and `{}`).
/// - `-x` negates an integer; any other operand kind is an error.
///
/// # Example
/// ```
/// use vervet::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix, value::core::Object},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Object::Integer(5));
/// assert_eq!(negated, Ok(Object::Integer(-5)));
///
/// let notted = eval_prefix(PrefixOperator::Not, &Object::Integer(0));
/// assert_eq!(notted, Ok(Object::Bool(false)));
/// ```
pub fn eval_prefix(operator: PrefixOperator, operand: &Object) -> EvalResult<Object> {
    match operator {
        PrefixOperator::Not => Ok(Object::Bool(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Object::Integer(value) => Ok(Object::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { operator: operator.symbol(),
                                                               operand:  other.kind(), }),
        },
    }
}
