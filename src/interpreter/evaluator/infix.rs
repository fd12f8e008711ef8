use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Evaluates an infix operator applied to two already-evaluated operands.
///
/// Dispatch, in order:
/// 1. Two integers: arithmetic and comparison.
/// 2. Two strings: `+` concatenates; every other operator is an error.
/// 3. Operands of different kinds: `type mismatch`.
/// 4. `==` / `!=` on operands of the same kind: identity comparison,
///    exact for booleans and `null` (there is one of each), reference
///    identity for arrays, hashes, and functions.
/// 5. Everything else: `unknown operator`.
///
/// # Example
/// ```
/// use vervet::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix, value::core::Object},
/// };
///
/// let sum = eval_infix(&Object::Integer(2), InfixOperator::Add, &Object::Integer(3));
/// assert_eq!(sum, Ok(Object::Integer(5)));
/// ```
pub fn eval_infix(left: &Object, operator: InfixOperator, right: &Object) -> EvalResult<Object> {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(*l, operator, *r),

        (Object::Str(l), Object::Str(r)) => match operator {
            InfixOperator::Add => {
                let mut joined = String::with_capacity(l.len() + r.len());
                joined.push_str(l);
                joined.push_str(r);
                Ok(joined.into())
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                          operator: operator.symbol(),
                                                          right:    "STRING", }),
        },

        _ if left.kind() != right.kind() => {
            Err(RuntimeError::TypeMismatch { left:     left.kind(),
                                             operator: operator.symbol(),
                                             right:    right.kind(), })
        },

        _ => match operator {
            InfixOperator::Equal => Ok(Object::Bool(same_object(left, right))),
            InfixOperator::NotEqual => Ok(Object::Bool(!same_object(left, right))),
            _ => Err(RuntimeError::UnknownInfixOperator { left:     left.kind(),
                                                          operator: operator.symbol(),
                                                          right:    right.kind(), }),
        },
    }
}

/// Evaluates an operator on two integers.
///
/// Arithmetic wraps on overflow; division truncates toward zero, and a
/// zero divisor raises `division by zero` instead of aborting the host.
fn eval_integer_infix(left: i64, operator: InfixOperator, right: i64) -> EvalResult<Object> {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    let result = match operator {
        Add => Object::Integer(left.wrapping_add(right)),
        Sub => Object::Integer(left.wrapping_sub(right)),
        Mul => Object::Integer(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Object::Integer(left.wrapping_div(right))
        },
        Less => Object::Bool(left < right),
        Greater => Object::Bool(left > right),
        Equal => Object::Bool(left == right),
        NotEqual => Object::Bool(left != right),
    };

    Ok(result)
}

/// Compares two same-kind values by identity.
///
/// Booleans and `null` compare by value, which is indistinguishable from
/// comparing the canonical singletons by reference. Containers and
/// functions compare by reference: two separately constructed arrays are
/// never the same object, while a binding and its copy are.
fn same_object(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Bool(l), Object::Bool(r)) => l == r,
        (Object::Null, Object::Null) => true,
        (Object::Array(l), Object::Array(r)) => Rc::ptr_eq(l, r),
        (Object::Hash(l), Object::Hash(r)) => Rc::ptr_eq(l, r),
        (Object::Function(l), Object::Function(r)) => Rc::ptr_eq(l, r),
        (Object::Builtin(l), Object::Builtin(r)) => std::ptr::eq(*l, *r),
        _ => false,
    }
}
