use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, literal::parse_matrix_literal, utils::expect},
    },
};

/// The deepest expression tree the parser builds.
///
/// Each `*` in a chain and each pair of parentheses adds a level. Evaluation
/// walks the tree recursively, so the limit keeps it within the stack.
pub const MAX_NESTING: usize = 256;

/// Parses a product chain.
///
/// `*` is left-associative, so `A * B * C` becomes
/// `Multiply(Multiply(A, B), C)`.
///
/// Grammar: `expression := term ("*" term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns `ParseError::TooDeep` once the tree would be more than
/// [`MAX_NESTING`] levels deep.
///
/// # Example
/// ```
/// use matrixlang::{
///     error::ParseError,
///     interpreter::parser::{core::tokenize, expression::parse_expression},
/// };
///
/// let chain = vec!["A"; 1000].join(" * ");
/// let tokens = tokenize(&chain).unwrap();
///
/// assert_eq!(parse_expression(&mut tokens.iter().peekable()).unwrap_err(),
///            ParseError::TooDeep { line: 1 });
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_product(tokens, 0).map(|(expr, _)| expr)
}

/// Parses a chain inside `open` enclosing parentheses, returning it with its
/// height.
fn parse_product<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (mut left, mut height) = parse_term(tokens, open)?;

    while let Some((Token::Star, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let (right, right_height) = parse_term(tokens, open)?;

        height = height.max(right_height) + 1;
        if height > MAX_NESTING {
            return Err(ParseError::TooDeep { line });
        }
        left = Expr::multiply(left, right, line);
    }

    Ok((left, height))
}

/// Parses a single operand of a product, returning it with its height.
///
/// Grammar: `term := IDENT | matrix | "(" expression ")"`
///
/// # Errors
/// Returns a `ParseError` if no term starts at the current token, a
/// parenthesized expression is not closed, or more than [`MAX_NESTING`]
/// parentheses are open.
fn parse_term<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBracket, _)) => Ok((Expr::Literal(parse_matrix_literal(tokens)?), 0)),
        Some((Token::LParen, line)) => {
            let line = *line;
            if open >= MAX_NESTING {
                return Err(ParseError::TooDeep { line });
            }
            tokens.next();
            let (expr, height) = parse_product(tokens, open + 1)?;
            expect(tokens, &Token::RParen)?;
            Ok((Expr::Grouping { expr: Box::new(expr),
                                 line },
                height + 1))
        },
        Some((Token::Identifier(name), line)) => {
            let expr = Expr::Identifier { name: name.clone(),
                                          line: *line, };
            tokens.next();
            Ok((expr, 0))
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected a matrix name, literal or '(', found '{tok}'"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
