//! # xscript
//!
//! xscript is a small dynamically typed scripting language written in Rust.
//! Source text is lexed, parsed into a syntax tree and executed by a
//! tree-walking evaluator against an [`Environment`] of bindings. The language
//! has integers, floats, characters, strings, booleans, `null`, type tags and
//! functions, with `if`, `while` and `match` for control flow.
//!
//! ```
//! use xscript::{Environment, Value, run};
//!
//! let mut env = Environment::with_natives();
//! let source = r"
//!     fun add(int a, int b): int { return a + b; }
//!     var total = add(2, 3);
//!     total;
//! ";
//!
//! assert_eq!(run(source, &mut env).unwrap(), Value::Integer(5));
//! ```

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

use tracing::debug;

pub use crate::{
    ast::Program,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Evaluator, Options},
            function::core::{install_natives, register_native_function},
        },
        value::{core::Value, kind::ValueKind},
    },
};
use crate::interpreter::{lexer::tokenize, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers, columns and source text for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, environments, evaluation and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Promote integers to floats and widen characters to code points.
pub mod util;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns a [`ParseError`] naming what was expected and where, including the
/// text of the offending line. Lexing failures are reported as
/// `ParseError::Lex`.
///
/// # Examples
/// ```
/// use xscript::parse;
///
/// let program = parse("var x = 1; x = x + 1;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let error = parse("var = 1;").unwrap_err();
/// assert_eq!(error.position().line, 1);
/// assert_eq!(error.position().column, 5);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter).map_err(|error| error.with_source(source))?;

    debug!(tokens = tokens.len(), statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// Executes a parsed program against `env` with default [`Options`].
///
/// Top-level statements run directly in the environment's current frame, so
/// declarations persist for later programs run against the same environment.
///
/// # Returns
/// The value of the last statement executed, or the value of a top-level
/// `return`.
///
/// # Errors
/// Returns the first [`RuntimeError`]. Effects of statements that ran before
/// the error are kept.
pub fn execute(program: &Program, env: &mut Environment) -> Result<Value, RuntimeError> {
    execute_with(program, env, Options::default())
}

/// Executes a parsed program against `env` with the given options.
///
/// # Errors
/// Returns the first [`RuntimeError`].
pub fn execute_with(program: &Program,
                    env: &mut Environment,
                    options: Options)
                    -> Result<Value, RuntimeError> {
    Evaluator::new(env, options).execute(program)
}

/// Parses and executes source text in one step.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use xscript::{Environment, Value, run};
///
/// let mut env = Environment::new();
/// assert_eq!(run("var x = 2; x = x * 21;", &mut env).unwrap(), Value::Integer(42));
///
/// // Bindings persist between runs against the same environment.
/// assert_eq!(run("x;", &mut env).unwrap(), Value::Integer(42));
///
/// // `y` is not declared.
/// assert!(run("y = 1;", &mut env).is_err());
/// ```
pub fn run(source: &str, env: &mut Environment) -> Result<Value, Error> {
    run_with(source, env, Options::default())
}

/// Parses and executes source text with the given options.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn run_with(source: &str, env: &mut Environment, options: Options) -> Result<Value, Error> {
    let program = parse(source)?;
    Ok(execute_with(&program, env, options)?)
}
