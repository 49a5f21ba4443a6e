use tracing::trace;

use crate::{
    ast::MatrixLiteral,
    interpreter::{
        evaluator::core::EvalResult,
        value::{matrix::Matrix, shape::shape_of},
    },
};

/// Evaluates a matrix literal into a [`Matrix`].
///
/// Rows are scanned in declaration order and every row after the first must
/// have the first row's length. The resulting shape is
/// `(number of rows, length of first row)`.
///
/// # Parameters
/// - `literal`: The literal to build.
///
/// # Returns
/// The matrix, or `RuntimeError::RaggedMatrix` for the first row whose length
/// differs. The error carries that row's source line.
///
/// # Example
/// ```
/// use matrixlang::{
///     ast::MatrixLiteral,
///     interpreter::{evaluator::literal::build_matrix, value::shape::Shape},
/// };
///
/// let literal = MatrixLiteral::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]], 1);
/// let m = build_matrix(&literal).unwrap();
///
/// assert_eq!(m.shape(), Shape::new(3, 2));
/// ```
pub fn build_matrix(literal: &MatrixLiteral) -> EvalResult<Matrix> {
    let shape = shape_of(literal.rows.iter().map(|row| (row.values.len(), row.line)))?;
    trace!(%shape, line = literal.line, "built matrix literal");

    let rows = literal.rows.iter().map(|row| row.values.clone()).collect();
    Ok(Matrix::from_parts(rows, shape))
}
