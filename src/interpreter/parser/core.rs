use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::{statement::parse_statement, utils::expect},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Splits source text into tokens paired with their line numbers.
///
/// Whitespace, line breaks and comments are dropped; line numbers start at 1.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any text the lexer does not
/// recognize.
///
/// # Example
/// ```
/// use matrixlang::interpreter::{lexer::Token, parser::core::tokenize};
///
/// let tokens = tokenize("print A;\nprint B;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Print, 1));
/// assert_eq!(tokens[3], (Token::Print, 2));
/// assert!(tokenize("print $;").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses a full program: statements, each terminated by `;`.
///
/// Grammar: `program := (statement ";")*`
///
/// An input with no statements is an empty program. Errors about running out
/// of input point at the last line that held a token.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use matrixlang::{
///     error::ParseError,
///     interpreter::parser::core::{parse_program, tokenize},
/// };
///
/// let tokens = tokenize("A[1, 1] = [[7]];\nprint A").unwrap();
/// let err = parse_program(&mut tokens.iter().peekable()).unwrap_err();
///
/// assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 2 });
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let last_line = tokens.clone().last().map_or(1, |(_, line)| *line);
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        let statement = parse_statement(tokens).map_err(|e| at_line_on_end(e, last_line))?;
        expect(tokens, &Token::Semicolon).map_err(|e| at_line_on_end(e, last_line))?;
        statements.push(statement);
    }

    Ok(Program { statements })
}

/// Points an `UnexpectedEndOfInput` error at `line`.
fn at_line_on_end(err: ParseError, line: usize) -> ParseError {
    match err {
        ParseError::UnexpectedEndOfInput { .. } => ParseError::UnexpectedEndOfInput { line },
        other => other,
    }
}

/// Tokenizes and parses source text into a [`Program`].
///
/// # Example
/// ```
/// use matrixlang::{ast::Statement, interpreter::parser::core::parse_source};
///
/// let program = parse_source("A[1, 1] = [[7]];\nprint A;").unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[1], Statement::Print { line: 2, .. }));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    parse_program(&mut tokens.iter().peekable())
}
