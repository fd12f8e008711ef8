/// The parser core.
///
/// Contains the `Parser` state, the precedence table, the Pratt expression
/// driver, and the shared token-cursor helpers.
pub mod core;
/// Statement parsing.
///
/// Handles `let` statements, `return` statements, expression statements,
/// and brace-delimited blocks.
pub mod statement;
/// Expression parsing.
///
/// Contains the prefix and infix parse routines dispatched by the Pratt
/// driver: literals, identifiers, prefix operators, grouping, conditionals,
/// function literals, calls, arrays, hashes, and indexing.
pub mod expression;
