use crate::error::RuntimeError;

/// The `(rows, cols)` dimensions of a matrix.
///
/// Displayed as `ROWSxCOLS`, the form used by print headers and error
/// messages.
///
/// ## Example
/// ```
/// use matrixlang::interpreter::value::shape::Shape;
///
/// let shape = Shape::new(2, 3);
///
/// assert_eq!(shape.to_string(), "2x3");
/// assert!(shape.can_multiply(Shape::new(3, 1)));
/// assert_eq!(shape.product(Shape::new(3, 1)), Some(Shape::new(2, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `self * right` is defined, i.e. the inner dimensions agree.
    #[must_use]
    pub const fn can_multiply(self, right: Self) -> bool {
        self.cols == right.rows
    }

    /// The shape of `self * right`, or `None` when the inner dimensions
    /// disagree.
    #[must_use]
    pub const fn product(self, right: Self) -> Option<Self> {
        if self.can_multiply(right) {
            Some(Self::new(self.rows, right.cols))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Computes the shape of a sequence of rows, rejecting ragged input.
///
/// Each item is a `(row length, source line)` pair. An empty sequence has
/// shape `0x0`.
///
/// # Example
/// ```
/// use matrixlang::{
///     error::RuntimeError,
///     interpreter::value::shape::{shape_of, Shape},
/// };
///
/// assert_eq!(shape_of([(3, 1), (3, 1)]).unwrap(), Shape::new(2, 3));
///
/// let err = shape_of([(2, 1), (2, 2), (1, 3), (4, 4)]).unwrap_err();
/// assert_eq!(err,
///            RuntimeError::RaggedMatrix { row:      3,
///                                         expected: 2,
///                                         found:    1,
///                                         line:     3, });
/// ```
pub fn shape_of<I>(rows: I) -> Result<Shape, RuntimeError>
    where I: IntoIterator<Item = (usize, usize)>
{
    let mut rows = rows.into_iter();
    let Some((expected, _)) = rows.next() else {
        return Ok(Shape::default());
    };

    let mut count = 1;
    for (found, line) in rows {
        count += 1;
        if found != expected {
            return Err(RuntimeError::RaggedMatrix { row: count,
                                                    expected,
                                                    found,
                                                    line });
        }
    }

    Ok(Shape::new(count, expected))
}
