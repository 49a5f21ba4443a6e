/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the environment and the output
/// sink for one run, and the expression evaluator.
pub mod core;

/// The binding environment.
///
/// A flat mapping from matrix names to their current values.
pub mod environment;

/// Matrix literal construction.
///
/// Turns literal rows into a `Matrix`, rejecting ragged rows.
pub mod literal;

/// Matrix multiplication.
///
/// Shape checking and checked integer accumulation for the `*` operator.
pub mod matmul;

/// Statement evaluation.
///
/// Implements declarations, assignments and print statements.
pub mod statement;
