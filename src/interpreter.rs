/// Tokenization of source text.
///
/// Declares the `Token` enum and the lexer configuration used to split
/// source code into tokens. Line numbers are tracked alongside tokens so
/// that later phases can report where a problem came from.
pub mod lexer;
/// Parsing of tokens into an abstract syntax tree.
///
/// Implements a Pratt (top-down operator-precedence) parser. Errors are
/// accumulated rather than fatal; the parser always produces a program and
/// a list of diagnostics.
pub mod parser;
/// Evaluation of the abstract syntax tree.
///
/// Walks the AST recursively against a lexically-scoped environment,
/// producing run-time values or run-time errors.
pub mod evaluator;
/// Run-time values and the scope environment.
///
/// Defines the `Object` value model, the hashable key subset, and the
/// arena of scopes that realizes lexical closures.
pub mod value;
