/// Core value representation.
///
/// Declares the `Object` enum covering every run-time value, its type
/// names as they appear in error messages, and its inspection formatting.
pub mod core;
/// Hashable keys.
///
/// Declares the `HashKey` enum for the subset of values that may be used
/// as hash-map keys: integers, booleans, and strings.
pub mod hash_key;
/// Lexical scopes.
///
/// Declares the environment arena: a growable set of name→value scopes
/// with parent links, addressed through copyable handles so that function
/// values can capture their defining scope without owning it.
pub mod environment;
