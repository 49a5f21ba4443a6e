use crate::{
    error::RuntimeError,
    interpreter::value::shape::{shape_of, Shape},
};

/// A single matrix entry.
///
/// Entries are 128-bit so that products of 64-bit literals never need to be
/// truncated. All arithmetic on them is checked.
pub type Element = i128;

/// Represents a runtime matrix value.
///
/// A `Matrix` is always rectangular and always knows its shape, so consumers
/// never rescan the rows to learn its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows:  Vec<Vec<Element>>,
    shape: Shape,
}

impl Matrix {
    /// Builds a matrix from nested rows, checking that every row has the
    /// length of the first one.
    ///
    /// # Parameters
    /// - `rows`: The rows in order.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Matrix)`: The matrix with its shape filled in.
    /// - `Err(RuntimeError::RaggedMatrix)`: If a row's length differs from
    ///   the first row's.
    ///
    /// # Example
    /// ```
    /// use matrixlang::{
    ///     error::RuntimeError,
    ///     interpreter::value::{matrix::Matrix, shape::Shape},
    /// };
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], 1).unwrap();
    /// assert_eq!(m.shape(), Shape::new(2, 3));
    ///
    /// let err = Matrix::from_rows(vec![vec![1, 2], vec![3]], 7).unwrap_err();
    /// assert!(matches!(err, RuntimeError::RaggedMatrix { row: 2, line: 7, .. }));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Element>>, line: usize) -> Result<Self, RuntimeError> {
        let shape = shape_of(rows.iter().map(|row| (row.len(), line)))?;
        Ok(Self { rows, shape })
    }

    /// Pairs rows with a shape that the caller has already validated.
    pub(crate) const fn from_parts(rows: Vec<Vec<Element>>, shape: Shape) -> Self {
        Self { rows, shape }
    }

    /// A matrix of the given shape filled with zeros.
    #[must_use]
    pub fn zeros(shape: Shape) -> Self {
        Self { rows: vec![vec![0; shape.cols]; shape.rows],
               shape }
    }

    /// An `n` by `n` identity matrix.
    ///
    /// ## Example
    /// ```
    /// use matrixlang::interpreter::value::matrix::Matrix;
    ///
    /// let id = Matrix::identity(2);
    ///
    /// assert_eq!(id.rows(), &[vec![1, 0], vec![0, 1]]);
    /// ```
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(Shape::new(n, n));
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = 1;
        }
        m
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Element>] {
        &self.rows
    }

    /// The entry at row `i`, column `j`, if it exists.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<Element> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }
}

/// Renders one row as `[a, b, c]`.
///
/// ## Example
/// ```
/// use matrixlang::interpreter::value::matrix::format_row;
///
/// assert_eq!(format_row(&[1, -2, 3]), "[1, -2, 3]");
/// ```
#[must_use]
pub fn format_row(row: &[Element]) -> String {
    let items: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
