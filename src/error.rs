/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include syntax mistakes, unexpected tokens,
/// malformed literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors are first-class outcomes of running a program: type mismatches,
/// unknown identifiers, bad indexes, and invalid operations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
