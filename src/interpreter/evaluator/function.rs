use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{BuiltinDef, Object},
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin accepts,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: 1, func: len },
    "first" => { arity: 1, func: first },
    "last"  => { arity: 1, func: last },
    "rest"  => { arity: 1, func: rest },
    "push"  => { arity: 2, func: push },
}

/// Finds a builtin by name.
///
/// Consulted after an identifier misses the environment chain; a binding
/// with the same name therefore shadows the builtin.
#[must_use]
pub(crate) fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl Context {
    /// Applies a callee to already-evaluated arguments.
    ///
    /// For a user function, a fresh scope is created whose parent is the
    /// function's *captured* environment (not the caller's), and each
    /// parameter is bound to its argument by position. The body runs as a
    /// block; a `ReturnValue` coming out of it is unwrapped here, which is
    /// what confines `return` to the enclosing function.
    ///
    /// Builtins are applied directly to the argument vector.
    ///
    /// # Errors
    /// - `wrong number of arguments. expected=N got=M` when the argument
    ///   count does not match the callee's parameter count or the
    ///   builtin's arity.
    /// - `not a function: T` when the callee is not callable.
    pub(crate) fn apply_function(&mut self,
                                 callee: Object,
                                 args: Vec<Object>)
                                 -> EvalResult<Object> {
        match callee {
            Object::Function(function) => {
                if args.len() != function.parameters.len() {
                    return Err(RuntimeError::WrongNumberOfArguments {
                        expected: function.parameters.len(),
                        got: args.len(),
                    });
                }

                let call_env = self.envs.enclosed(function.env);
                for (parameter, value) in function.parameters.iter().zip(args) {
                    self.envs.set(call_env, parameter, value);
                }

                match self.eval_block(&function.body, call_env)? {
                    Object::ReturnValue(value) => Ok(*value),
                    value => Ok(value),
                }
            },
            Object::Builtin(builtin) => {
                if args.len() != builtin.arity {
                    return Err(RuntimeError::WrongNumberOfArguments { expected: builtin.arity,
                                                                      got:      args.len(), });
                }
                (builtin.func)(&args)
            },
            other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
        }
    }
}

/// `len(value)`: byte length of a string or element count of an array.
fn len(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Str(s) => Ok(Object::Integer(as_length(s.len()))),
        Object::Array(elements) => Ok(Object::Integer(as_length(elements.len()))),
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         kind:     other.kind(), }),
    }
}

/// `first(array)`: the first element, or `null` for an empty array.
fn first(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function: "first",
                                                         kind:     other.kind(), }),
    }
}

/// `last(array)`: the last element, or `null` for an empty array.
fn last(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::UnsupportedArgument { function: "last",
                                                         kind:     other.kind(), }),
    }
}

/// `rest(array)`: a new array of all but the first element, or `null` for
/// arrays with fewer than two elements.
fn rest(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => {
            if elements.len() < 2 {
                return Ok(Object::Null);
            }
            Ok(elements[1..].to_vec().into())
        },
        other => Err(RuntimeError::UnsupportedArgument { function: "rest",
                                                         kind:     other.kind(), }),
    }
}

/// `push(array, value)`: a new array with `value` appended.
///
/// The argument array is shared, never mutated; callers keep their
/// original.
fn push(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(extended.into())
        },
        other => Err(RuntimeError::UnsupportedArgument { function: "push",
                                                         kind:     other.kind(), }),
    }
}

/// Converts a host length to the language's integer type.
fn as_length(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}
