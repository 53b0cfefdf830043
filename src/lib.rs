//! # qlang
//!
//! qlang is a small imperative programming language with French keywords,
//! interpreted by walking the syntax tree. It supports variables, conditionals,
//! loops, first-class functions with closures, arrays, and line-based input
//! and output.

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

use crate::{
    error::QlangError,
    interpreter::{io::QueuedInput, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source spans to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// It standardizes error reporting and carries detailed information about
/// failures, including source spans and the French diagnostic texts shown to
/// the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches spans and detailed messages for context.
/// - Renders diagnostics with a source excerpt and caret underline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution. It exposes the public
/// API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source positions and spans.
///
/// This module provides the location types attached to tokens, AST nodes, and
/// diagnostics, with 1-based line and column numbers.
pub mod position;

pub use crate::interpreter::evaluator::core::Interpreter;

fn execute(interpreter: &mut Interpreter, source: &str) -> Result<(), QlangError> {
    let tokens = tokenize(source)?;
    let program = parse_program(&mut tokens.iter().peekable())?;
    interpreter.run(&program)?;
    Ok(())
}

/// Runs a program on an existing interpreter.
///
/// On failure the diagnostic is rendered against `source` and appended to the
/// interpreter's error sink before the error is returned, so callers can show
/// the excerpt without re-rendering it.
///
/// # Errors
/// Returns the error that stopped the program, whether it came from lexing,
/// parsing, or evaluation.
pub fn run_source(interpreter: &mut Interpreter, source: &str) -> Result<(), QlangError> {
    match execute(interpreter, source) {
        Ok(()) => Ok(()),
        Err(error) => {
            let rendered = error.render(source);
            interpreter.report(rendered);
            Err(error)
        },
    }
}

/// Runs `source` on a fresh interpreter and returns its printed lines.
///
/// `lire` expressions see an exhausted input source and evaluate to `rien`.
///
/// # Errors
/// Returns the error that stopped the program.
///
/// # Examples
/// ```
/// use qlang::get_result;
///
/// let lines = get_result("ecrire 2 + 3").unwrap();
/// assert_eq!(lines, vec!["5"]);
///
/// // 'x' is never declared.
/// assert!(get_result("ecrire x").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Vec<String>, QlangError> {
    get_result_with_input(source, &[])
}

/// Runs `source` on a fresh interpreter fed the given input lines.
///
/// Each `lire` consumes one line; once they run out, further reads evaluate to
/// `rien`.
///
/// # Errors
/// Returns the error that stopped the program.
pub fn get_result_with_input(source: &str, input: &[&str]) -> Result<Vec<String>, QlangError> {
    let mut interpreter = Interpreter::with_input(Box::new(QueuedInput::new(input)));
    run_source(&mut interpreter, source)?;
    Ok(interpreter.output().lines().to_vec())
}
