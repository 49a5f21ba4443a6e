/// Entry points: tokenizing source text and parsing whole programs.
pub mod core;

/// Expression parsing.
///
/// Terms (names, literals, parenthesized expressions) and left-associative
/// `*` chains.
pub mod expression;

/// Matrix literal parsing.
///
/// Bracketed rows of integers, collected into plain vectors.
pub mod literal;

/// Statement parsing.
///
/// Declarations, assignments and print statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Shared helpers for comma-separated lists, identifiers and expected tokens.
pub mod utils;
