use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            matrix::{Element, Matrix},
            shape::Shape,
        },
    },
};

/// Multiplies two matrices.
///
/// The left operand's column count must equal the right operand's row count.
/// Each entry of the `(left rows) x (right cols)` result is the dot product of
/// a left row and a right column, accumulated with checked arithmetic.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// - `Ok(Matrix)`: The product.
/// - `Err(RuntimeError::DimensionMismatch)`: If the inner dimensions differ.
/// - `Err(RuntimeError::Overflow)`: If an entry does not fit in an
///   [`Element`].
///
/// # Example
/// ```
/// use matrixlang::interpreter::{evaluator::matmul::matmul, value::matrix::Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], 1).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]], 1).unwrap();
///
/// let c = matmul(&a, &b, 1).unwrap();
///
/// assert_eq!(c.rows(), &[vec![19, 22], vec![43, 50]]);
/// ```
pub fn matmul(left: &Matrix, right: &Matrix, line: usize) -> EvalResult<Matrix> {
    let shape = left.shape()
                    .product(right.shape())
                    .ok_or_else(|| dim_mismatch(left.shape(), right.shape(), line))?;
    trace!(left = %left.shape(), right = %right.shape(), result = %shape, "multiplying");

    let inner = left.shape().cols;
    let right_rows = right.rows();

    let mut out_rows = Vec::with_capacity(shape.rows);

    for row in left.rows() {
        let mut out_row = Vec::with_capacity(shape.cols);

        for col in 0..shape.cols {
            let pairs = (0..inner).map(|k| (row[k], right_rows[k][col]));
            out_row.push(checked_dot(pairs, line)?);
        }

        out_rows.push(out_row);
    }

    Ok(Matrix::from_parts(out_rows, shape))
}

/// Sums the products of a sequence of pairs, failing on overflow.
///
/// An empty sequence sums to zero.
///
/// # Example
/// ```
/// use matrixlang::{error::RuntimeError, interpreter::evaluator::matmul::checked_dot};
///
/// assert_eq!(checked_dot([(1, 10), (2, 20)].into_iter(), 1).unwrap(), 50);
/// assert_eq!(checked_dot(std::iter::empty(), 1).unwrap(), 0);
///
/// let err = checked_dot([(i128::MAX, 2)].into_iter(), 9).unwrap_err();
/// assert_eq!(err, RuntimeError::Overflow { line: 9 });
/// ```
pub fn checked_dot<I>(pairs: I, line: usize) -> EvalResult<Element>
    where I: Iterator<Item = (Element, Element)>
{
    let mut acc: Element = 0;

    for (a, b) in pairs {
        acc = a.checked_mul(b)
               .and_then(|product| acc.checked_add(product))
               .ok_or(RuntimeError::Overflow { line })?;
    }

    Ok(acc)
}

/// Creates a dimension-mismatch error for incompatible shapes.
///
/// # Example
/// ```
/// use matrixlang::interpreter::{evaluator::matmul::dim_mismatch, value::shape::Shape};
///
/// let err = dim_mismatch(Shape::new(2, 3), Shape::new(2, 2), 1);
/// assert!(err.to_string().contains("(2x3) * (2x2)"));
/// ```
#[must_use]
pub const fn dim_mismatch(left: Shape, right: Shape, line: usize) -> RuntimeError {
    RuntimeError::DimensionMismatch { left, right, line }
}
