/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration header held a number that is not a valid matrix size.
    #[error("Error on line {line}: Invalid dimension {value} in matrix header.")]
    InvalidDimension {
        /// The literal as written.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal was too large to be represented.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A matrix literal had no rows: `[]`.
    #[error("Error on line {line}: Matrix literal must have at least one row.")]
    EmptyMatrix {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A row had no elements: `[]` inside a matrix literal.
    #[error("Error on line {line}: Matrix row must have at least one element.")]
    EmptyRow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression nested products or parentheses deeper than the parser
    /// allows.
    #[error("Error on line {line}: Expression is nested too deeply.")]
    TooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidDimension { line, .. }
            | Self::LiteralTooLarge { line }
            | Self::EmptyMatrix { line }
            | Self::EmptyRow { line }
            | Self::TooDeep { line } => *line,
        }
    }
}
