use std::iter::Peekable;

use crate::{
    ast::{MatrixLiteral, Row},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{expect, parse_comma_separated},
        },
        value::matrix::Element,
    },
    util::num::str_to_element_checked,
};

/// Parses a matrix literal of the form `[[1, 2], [3, 4]]`.
///
/// Rows are collected in order; whether they all have the same length is
/// checked later, when the literal is evaluated.
///
/// Grammar: `matrix := "[" row ("," row)* "]"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - the literal or a row is empty,
/// - brackets or commas are missing,
/// - an element does not fit in a matrix entry.
pub fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<MatrixLiteral>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBracket)?;

    if let Some((Token::RBracket, _)) = tokens.peek() {
        return Err(ParseError::EmptyMatrix { line });
    }

    let rows = parse_comma_separated(tokens, parse_row, &Token::RBracket)?;

    Ok(MatrixLiteral { rows, line })
}

/// Grammar: `row := "[" INT ("," INT)* "]"`
fn parse_row<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Row>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBracket)?;

    if let Some((Token::RBracket, _)) = tokens.peek() {
        return Err(ParseError::EmptyRow { line });
    }

    let values = parse_comma_separated(tokens, parse_element, &Token::RBracket)?;

    Ok(Row { values, line })
}

fn parse_element<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Element>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(digits), line)) => str_to_element_checked(digits, *line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected an integer, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
