use crate::interpreter::value::core::Object;

/// Enum representing values allowed as hash-map keys.
///
/// Only integers, booleans, and strings are hashable. Integers and
/// booleans hash by value; strings hash by byte content, so two string
/// values with equal bytes collide on lookup even when they are distinct
/// objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key such as `42`.
    Integer(i64),
    /// A boolean key, `true` or `false`.
    Bool(bool),
    /// A string key such as `"name"`.
    Str(String),
}

impl HashKey {
    /// Converts a run-time value into a key, if its kind permits.
    ///
    /// # Returns
    /// - `Some(HashKey)` for integers, booleans, and strings.
    /// - `None` for every other kind; callers report the error appropriate
    ///   to their context (key position vs. index position).
    ///
    /// # Example
    /// ```
    /// use vervet::interpreter::value::{core::Object, hash_key::HashKey};
    ///
    /// assert_eq!(HashKey::from_object(&Object::Integer(1)),
    ///            Some(HashKey::Integer(1)));
    /// assert_eq!(HashKey::from_object(&Object::Null), None);
    /// ```
    #[must_use]
    pub fn from_object(value: &Object) -> Option<Self> {
        match value {
            Object::Integer(n) => Some(Self::Integer(*n)),
            Object::Bool(b) => Some(Self::Bool(*b)),
            Object::Str(s) => Some(Self::Str(s.as_ref().clone())),
            _ => None,
        }
    }
}

impl From<HashKey> for Object {
    fn from(key: HashKey) -> Self {
        match key {
            HashKey::Integer(n) => Self::Integer(n),
            HashKey::Bool(b) => Self::Bool(b),
            HashKey::Str(s) => s.into(),
        }
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
