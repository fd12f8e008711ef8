//! # vervet
//!
//! vervet is an interpreter for a small, dynamically-typed,
//! expression-oriented scripting language written in Rust. It supports
//! first-class functions with lexical closures, strings, arrays, and hash
//! maps, evaluated by a tree-walking interpreter over a Pratt-parsed AST.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes back to text, fully parenthesized, so precedence
///   decisions stay observable.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. Parse errors accumulate as diagnostics;
/// run-time errors propagate through evaluation and carry the exact
/// message text a program observes.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders messages whose wording is part of the language's behaviour.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model,
/// and the scope environment to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, parses it with a fresh parser, and evaluates
/// it against a context that persists across lines.
pub mod repl;

/// Splits source text into tokens annotated with their line numbers.
///
/// Line counting starts at 1. The returned vector is what the parser
/// consumes; the end of the vector is the end-of-input sentinel.
///
/// # Errors
/// Returns a [`ParseError::IllegalCharacter`] for the first character
/// sequence the lexer does not recognize.
///
/// # Examples
/// ```
/// use vervet::{interpreter::lexer::Token, lex};
///
/// let tokens = lex("let five = 5;").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0], (Token::Let, 1));
///
/// assert!(lex("let pound = £;").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::IllegalCharacter { slice: slice.to_string(),
                                                      line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Runs a complete source text and returns once it finishes.
///
/// The source is lexed and parsed up front; parsing problems abort the run
/// before any evaluation. Evaluation happens in a fresh context, and with
/// `auto_print` set, the value of the program is printed afterwards.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if any runtime error
/// occurs.
///
/// # Examples
/// ```
/// use vervet::run_source;
///
/// // Simple program: the result is computed and no error occurs.
/// let res = run_source("let result = 2 + 2;", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let res = run_source("let y = x + 1;", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = lex(source)?;

    let (program, mut errors) = Parser::new(&tokens).parse_program();
    if !errors.is_empty() {
        return Err(Box::new(errors.remove(0)));
    }

    let mut context = Context::new();
    let value = context.eval_program(&program)?;

    if auto_print {
        println!("{value}");
    }

    Ok(())
}
