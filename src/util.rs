/// Checked conversions from literal text to numbers.
///
/// The lexer keeps integer literals as text. These helpers turn that text into
/// matrix elements or header dimensions and report a parse error instead of
/// wrapping or truncating when a value does not fit.
pub mod num;
