/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code, such as unexpected tokens, missing brackets, or header dimensions that
/// are not valid sizes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a program:
/// undeclared names, shape and dimension mismatches, ragged literals and
/// arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end a run, whether it was found while parsing or while
/// evaluating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
