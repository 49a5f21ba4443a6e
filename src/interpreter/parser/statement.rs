use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            expression::parse_expression,
            literal::parse_matrix_literal,
            utils::{expect, parse_identifier},
        },
    },
    util::num::str_to_dimension_checked,
};

/// Parses a single statement.
/// A statement may be one of:
/// - a declaration, `matrix A[2, 2] = [[1, 0], [0, 1]]` (the `matrix`
///   keyword is optional).
/// - an assignment, `C = A * B`.
/// - a print statement, `print C`.
///
/// The terminating `;` is not consumed here.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Print, line)) => {
            let name = parse_identifier(tokens)?;
            Ok(Statement::Print { name, line: *line })
        },
        Some((Token::Matrix, line)) => {
            let name = parse_identifier(tokens)?;
            parse_declaration(tokens, name, *line)
        },
        Some((Token::Identifier(name), line)) => match tokens.peek() {
            Some((Token::LBracket, _)) => parse_declaration(tokens, name.clone(), *line),
            Some((Token::Equals, _)) => {
                tokens.next();
                let value = parse_expression(tokens)?;
                Ok(Statement::Assignment { name: name.clone(),
                                           value,
                                           line: *line })
            },
            Some((tok, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("expected '[' or '=' after '{name}', found '{tok}'"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected a statement, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the rest of a declaration once its name has been read.
///
/// Grammar: `"[" INT "," INT "]" "=" matrix`
///
/// # Errors
/// Returns a `ParseError` if the header is malformed, a dimension is not a
/// valid size, or the literal fails to parse.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            name: String,
                            line: usize)
                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBracket)?;
    let rows = parse_dimension(tokens)?;
    expect(tokens, &Token::Comma)?;
    let cols = parse_dimension(tokens)?;
    expect(tokens, &Token::RBracket)?;
    expect(tokens, &Token::Equals)?;
    let literal = parse_matrix_literal(tokens)?;

    Ok(Statement::MatrixDeclaration { name,
                                      rows,
                                      cols,
                                      literal,
                                      line })
}

fn parse_dimension<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(digits), line)) => str_to_dimension_checked(digits, *line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected a dimension, found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
