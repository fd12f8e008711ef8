use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{
        evaluator::core::EvalResult,
        value::{environment::EnvId, hash_key::HashKey},
    },
};

/// Represents a run-time value in the interpreter.
///
/// This enum models every type a program can produce: the primitives, the
/// two container types, callable values, and the internal `return` signal.
/// Containers and functions are reference-counted so that cloning a value
/// never copies its contents; arrays and hashes are immutable at the
/// language level.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value. Produced by `if` expressions without a taken
    /// branch, bare `return;`, and hash lookups that miss.
    Null,
    /// An immutable string.
    Str(Rc<String>),
    /// An ordered, heterogeneous, 0-indexed array of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashMap<HashKey, Self>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A host-provided builtin function.
    Builtin(&'static BuiltinDef),
    /// Wraps the value of a `return` statement while it travels outward
    /// through enclosing blocks. Unwrapped at function and program
    /// boundaries; never observable from the source language.
    ReturnValue(Box<Self>),
}

/// A user-defined function value.
///
/// The body is shared AST; the environment is the scope that was active at
/// the function literal, referenced by handle so that it outlives its
/// syntactic frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// Handle to the captured environment.
    pub env:        EnvId,
}

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a
/// value or a runtime error. Arity is checked by the caller against
/// [`BuiltinDef::arity`] before the handler runs.
pub type BuiltinFn = fn(&[Object]) -> EvalResult<Object>;

/// Metadata describing one builtin function.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is reachable under.
    pub name:  &'static str,
    /// The exact number of arguments the builtin accepts.
    pub arity: usize,
    /// The handler implementing the builtin.
    pub func:  BuiltinFn,
}

impl PartialEq for BuiltinDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::Str(Rc::new(v.to_string()))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::Str(Rc::new(v))
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Object {
    /// Returns the value's type name as it appears in error messages.
    ///
    /// # Example
    /// ```
    /// use vervet::interpreter::value::core::Object;
    ///
    /// assert_eq!(Object::Integer(3).kind(), "INTEGER");
    /// assert_eq!(Object::Null.kind(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(_) => "RETURN_VALUE",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Exactly `false` and `null` are falsy; every other value is truthy,
    /// including `0`, `""`, `[]`, and `{}`.
    ///
    /// # Example
    /// ```
    /// use vervet::interpreter::value::core::Object;
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!Object::Bool(false).is_truthy());
    /// assert!(!Object::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Returns `true` if the value is the in-flight `return` signal.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::ReturnValue(_))
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{ {} }}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
        }
    }
}
