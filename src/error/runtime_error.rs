#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised while evaluating a program.
///
/// Runtime errors propagate outward through blocks and calls until they
/// escape the program or are printed by the REPL; there is no user-level
/// catch construct. The rendered message text is part of the language's
/// observable behaviour, so each variant carries exactly the ingredients of
/// its message.
pub enum RuntimeError {
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator's source spelling.
        operator: &'static str,
        /// The operand's type name.
        operand:  &'static str,
    },
    /// An infix operator was applied to operands it does not support.
    UnknownInfixOperator {
        /// The left operand's type name.
        left:     &'static str,
        /// The operator's source spelling.
        operator: &'static str,
        /// The right operand's type name.
        right:    &'static str,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// The left operand's type name.
        left:     &'static str,
        /// The operator's source spelling.
        operator: &'static str,
        /// The right operand's type name.
        right:    &'static str,
    },
    /// A name was neither bound in any scope nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call was applied to a value that is not callable.
    NotAFunction {
        /// The callee's type name.
        kind: &'static str,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// How many arguments the callee accepts.
        expected: usize,
        /// How many arguments were supplied.
        got:      usize,
    },
    /// A builtin received an argument of a type it does not support.
    UnsupportedArgument {
        /// The builtin's name.
        function: &'static str,
        /// The argument's type name.
        kind:     &'static str,
    },
    /// A hash literal used a non-hashable value in key position.
    KeyNotHashable {
        /// The key's type name.
        kind: &'static str,
    },
    /// An index expression used a value that cannot index the target.
    InvalidIndex {
        /// The index's type name.
        kind: &'static str,
    },
    /// An index expression was applied to a value that is not indexable.
    NotIndexable {
        /// The target's type name.
        kind: &'static str,
    },
    /// An array was indexed with a negative number.
    NegativeIndex {
        /// The requested index.
        index: i64,
    },
    /// An array was indexed past its last element.
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The largest valid index; `-1` for an empty array.
        max:   i64,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::WrongNumberOfArguments { expected, got } => {
                write!(f, "wrong number of arguments. expected={expected} got={got}")
            },
            Self::UnsupportedArgument { function, kind } => {
                write!(f, "argument to `{function}` not supported, got {kind}")
            },
            Self::KeyNotHashable { kind } => write!(f, "cannot use as key {kind}"),
            Self::InvalidIndex { kind } => write!(f, "cannot use as index {kind}"),
            Self::NotIndexable { kind } => write!(f, "cannot index type {kind}"),
            Self::NegativeIndex { index } => {
                write!(f, "cannot index with a negative number {index}")
            },
            Self::IndexOutOfBounds { index, max } => {
                write!(f, "index is larger than the max. index={index}, max={max}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
