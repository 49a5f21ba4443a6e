/// Matrix values.
///
/// Defines `Matrix`, the only runtime value in the language: a rectangular
/// grid of wide integers that always carries its own shape.
pub mod matrix;
/// Matrix shapes.
///
/// Defines the `(rows, cols)` pair that travels alongside every matrix value
/// and appears in dimension-related error messages.
pub mod shape;
