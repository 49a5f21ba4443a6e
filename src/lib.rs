//! # matrixlang
//!
//! matrixlang is an interpreter for a small language of integer matrices,
//! written in Rust. Programs declare matrices with explicit dimensions,
//! reassign names to products of matrices, and print them:
//!
//! ```text
//! A[2, 2] = [[1, 0], [0, 1]];
//! B[2, 2] = [[5, 6], [7, 8]];
//! C = A * B;
//! print C;
//! ```
//!
//! Every matrix carries its shape, and shapes are checked wherever a matrix
//! is built or combined.

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

use std::io::{self, Write};

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::core::parse_source},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent a
/// program as a tree. The parser normalizes the grammar's recursive lists
/// into vectors, so the evaluator only ever sees plain sequences.
///
/// # Responsibilities
/// - Defines program, statement, expression and literal types.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a program. Each error carries the source line and enough
/// detail (names, shapes) to explain the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Wraps both kinds in a single crate-level `Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and matrix values to
/// provide a complete runtime for matrix programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert literal text to matrix elements and dimensions without silent
///   data loss.
pub mod util;

/// Parses source text into a [`Program`] without running it.
///
/// # Example
/// ```
/// let program = matrixlang::parse("M[1, 2] = [[1, 2]]; print M;").unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_source(source)
}

/// Parses and runs `source`, writing printed matrices to `out`.
///
/// Parsing happens before any statement runs, so a syntax error produces no
/// output. A runtime error stops the program at the failing statement; output
/// from earlier statements has already been written.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// let source = "A[2, 2] = [[1, 0], [0, 1]];
///               B[2, 2] = [[5, 6], [7, 8]];
///               C = A * B;
///               print C;";
///
/// let mut out = Vec::new();
/// matrixlang::run(source, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "C (2x2):\n   [5, 6]\n   [7, 8]\n");
///
/// // Printing a name that was never bound is an error.
/// assert!(matrixlang::run("print X;", &mut Vec::new()).is_err());
/// ```
pub fn run<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let program = parse_source(source)?;
    let mut context = Context::with_output(out);
    context.eval_program(&program)?;
    Ok(())
}

/// Parses and runs `source`, printing to standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use matrixlang::get_result;
///
/// let source = "A[1, 2] = [[1, 2]];\nB[2, 1] = [[3], [4]];\nC = A * B;";
/// assert!(get_result(source).is_ok());
///
/// // Inner dimensions 2 and 1 disagree.
/// let source = "A[1, 2] = [[1, 2]];\nC = A * A;";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Error> {
    run(source, io::stdout().lock())
}
