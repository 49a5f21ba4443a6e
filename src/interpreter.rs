/// The evaluator module executes programs and computes results.
///
/// The evaluator walks the AST, executes statements in order, manages the
/// binding environment, and performs matrix construction and multiplication.
///
/// # Responsibilities
/// - Evaluates statements and expressions.
/// - Maintains the name to matrix bindings of one run.
/// - Reports runtime errors such as undeclared names or shape mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens such as
/// integers, identifiers, keywords and punctuation, each paired with its line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and comments.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Flattens the grammar's recursive lists into vectors.
/// - Reports syntax errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Matrix` value and its `Shape`.
/// - Renders matrices for printing.
pub mod value;
