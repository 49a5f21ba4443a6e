use crate::{
    error::ParseError,
    interpreter::{parser::core::ParseResult, value::matrix::Element},
};

/// Converts the text of an integer literal to a matrix element.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the value does not fit in an
/// [`Element`].
///
/// ## Parameters
/// - `digits`: The literal as written, optionally with a leading `-`.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use matrixlang::{error::ParseError, util::num::str_to_element_checked};
///
/// assert_eq!(str_to_element_checked("-42", 1).unwrap(), -42);
///
/// let too_big = "9".repeat(40);
/// let err = str_to_element_checked(&too_big, 3).unwrap_err();
/// assert_eq!(err, ParseError::LiteralTooLarge { line: 3 });
/// ```
pub fn str_to_element_checked(digits: &str, line: usize) -> ParseResult<Element> {
    digits.parse()
          .map_err(|_| ParseError::LiteralTooLarge { line })
}

/// Converts the text of an integer literal to a matrix dimension.
///
/// ## Errors
/// Returns `ParseError::InvalidDimension` if the value is negative or does
/// not fit in a `usize`.
///
/// ## Parameters
/// - `digits`: The literal as written.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use matrixlang::{error::ParseError, util::num::str_to_dimension_checked};
///
/// assert_eq!(str_to_dimension_checked("3", 1).unwrap(), 3);
///
/// let err = str_to_dimension_checked("-2", 5).unwrap_err();
/// assert!(matches!(err, ParseError::InvalidDimension { line: 5, .. }));
/// ```
pub fn str_to_dimension_checked(digits: &str, line: usize) -> ParseResult<usize> {
    digits.parse()
          .map_err(|_| ParseError::InvalidDimension { value: digits.to_string(),
                                                      line })
}
