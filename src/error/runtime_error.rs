use crate::interpreter::value::shape::Shape;

/// Represents all errors that can occur during evaluation.
///
/// Every variant is fatal to the current run: evaluation stops at the first
/// one and the error is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name that has no binding.
    #[error("Error on line {line}: Undeclared variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration's header disagrees with the shape of its literal.
    #[error("Error on line {line}: Declared dimensions ({declared}) of '{name}' do not match the \
             literal ({actual}).")]
    ShapeMismatch {
        /// The name being declared.
        name:     String,
        /// The shape written in the header.
        declared: Shape,
        /// The shape of the literal.
        actual:   Shape,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A literal's rows do not all have the same length.
    #[error("Error on line {line}: Rows must have equal length: row {row} has {found} \
             element(s), expected {expected}.")]
    RaggedMatrix {
        /// One-based index of the first offending row.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The inner dimensions of a product disagree.
    #[error("Error on line {line}: Dimension mismatch for product: ({left}) * ({right}).")]
    DimensionMismatch {
        /// Shape of the left operand.
        left:  Shape,
        /// Shape of the right operand.
        right: Shape,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Arithmetic overflowed the element type.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Failed to write output: {details}.")]
    Output {
        /// Description of the underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error points at.
    ///
    /// ## Example
    /// ```
    /// use matrixlang::error::RuntimeError;
    ///
    /// let err = RuntimeError::UnknownVariable { name: "X".to_string(),
    ///                                           line: 4, };
    ///
    /// assert_eq!(err.line(), 4);
    /// assert_eq!(err.to_string(), "Error on line 4: Undeclared variable 'X'.");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::ShapeMismatch { line, .. }
            | Self::RaggedMatrix { line, .. }
            | Self::DimensionMismatch { line, .. }
            | Self::Overflow { line }
            | Self::Output { line, .. } => *line,
        }
    }
}
