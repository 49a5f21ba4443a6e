use matrixlang::{
    ast::{Expr, MatrixLiteral, Statement},
    error::ParseError,
    interpreter::parser::{
        core::{parse_program, tokenize},
        expression::MAX_NESTING,
    },
    parse,
};
use pretty_assertions::assert_eq;

fn only_statement(src: &str) -> Statement {
    let mut program = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert_eq!(program.statements.len(), 1);
    program.statements.remove(0)
}

fn ident(name: &str, line: usize) -> Expr {
    Expr::Identifier { name: name.to_string(),
                       line }
}

#[test]
fn declaration_with_and_without_keyword() {
    let expected = Statement::MatrixDeclaration { name:    "A".to_string(),
                                                  rows:    2,
                                                  cols:    1,
                                                  literal: MatrixLiteral::from_rows(vec![vec![1],
                                                                                         vec![-2]],
                                                                                    1),
                                                  line:    1, };

    assert_eq!(only_statement("matrix A[2, 1] = [[1], [-2]];"), expected);
    assert_eq!(only_statement("A[2,1]=[[1],[-2]];"), expected);
}

#[test]
fn product_chain_nests_to_the_left() {
    let statement = only_statement("D = A * B * C;");

    let expected = Expr::multiply(Expr::multiply(ident("A", 1), ident("B", 1), 1),
                                  ident("C", 1),
                                  1);

    assert_eq!(statement,
               Statement::Assignment { name:  "D".to_string(),
                                       value: expected,
                                       line:  1, });
}

#[test]
fn parentheses_build_grouping() {
    let Statement::Assignment { value, .. } = only_statement("D = A * (B * C);") else {
        panic!("expected an assignment");
    };

    let Expr::Multiply { left, right, .. } = value else {
        panic!("expected a product");
    };
    assert_eq!(*left, ident("A", 1));
    assert!(matches!(*right, Expr::Grouping { .. }));
}

#[test]
fn literal_terms_in_expressions() {
    let Statement::Assignment { value, .. } = only_statement("X = [[1, 2]] * A;") else {
        panic!("expected an assignment");
    };

    let Expr::Multiply { left, .. } = value else {
        panic!("expected a product");
    };
    assert_eq!(*left, Expr::Literal(MatrixLiteral::from_rows(vec![vec![1, 2]], 1)));
}

#[test]
fn statements_keep_source_order_and_lines() {
    let program = parse("A[1, 1] = [[1]];\n\nB = A;\n// note\nprint B;").unwrap();

    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 3, 5]);
    assert!(matches!(&program.statements[2], Statement::Print { name, .. } if name == "B"));
}

#[test]
fn ragged_rows_parse_fine() {
    // Rectangularity is an evaluation concern.
    let Statement::MatrixDeclaration { literal, .. } = only_statement("A[2, 2] = [[1, 2], [3]];")
    else {
        panic!("expected a declaration");
    };

    assert_eq!(literal.rows[0].values, vec![1, 2]);
    assert_eq!(literal.rows[1].values, vec![3]);
}

#[test]
fn missing_semicolon() {
    assert_eq!(parse("A[1, 1] = [[1]];\nprint A").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 2 });
}

#[test]
fn empty_matrix_and_row_are_rejected() {
    assert_eq!(parse("A[0, 0] = [];").unwrap_err(),
               ParseError::EmptyMatrix { line: 1 });
    assert_eq!(parse("A[1, 0] = [[]];").unwrap_err(),
               ParseError::EmptyRow { line: 1 });
}

#[test]
fn negative_dimension_is_rejected() {
    assert_eq!(parse("A[-1, 1] = [[1]];").unwrap_err(),
               ParseError::InvalidDimension { value: "-1".to_string(),
                                              line:  1, });
}

#[test]
fn oversized_element_is_rejected() {
    let src = format!("A[1, 1] = [[{}]];", "1".repeat(50));

    assert_eq!(parse(&src).unwrap_err(),
               ParseError::LiteralTooLarge { line: 1 });
}

#[test]
fn unknown_characters_are_rejected() {
    let err = parse("A[1, 1] = [[1]];\nB = A + A;").unwrap_err();

    assert_eq!(err,
               ParseError::UnexpectedToken { token: "+".to_string(),
                                             line:  2, });
}

#[test]
fn print_requires_a_name() {
    assert!(matches!(parse("print [[1]];").unwrap_err(),
                     ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn statement_must_start_with_name_or_keyword() {
    assert!(matches!(parse("[[1]];").unwrap_err(),
                     ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn unclosed_parenthesis() {
    assert!(matches!(parse("B = (A * A;").unwrap_err(),
                     ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn block_comments_may_end_in_extra_stars() {
    let program = parse("/* note **/\nA[1, 1] = [[1]];\n/*** banner ***/\nprint A;").unwrap();

    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn program_parser_reports_last_line_on_early_end() {
    let tokens = tokenize("A[1, 1] = [[1]];\n\nB = A *").unwrap();

    assert_eq!(parse_program(&mut tokens.iter().peekable()).unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 3 });
}

#[test]
fn nesting_limit_is_inclusive() {
    let fits = vec!["A"; MAX_NESTING + 1].join(" * ");
    assert!(parse(&format!("B = {fits};")).is_ok());

    let nested = format!("{}A{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(parse(&format!("B = {nested};")).is_ok());

    let too_long = vec!["A"; MAX_NESTING + 2].join(" * ");
    assert_eq!(parse(&format!("B = {too_long};")).unwrap_err(),
               ParseError::TooDeep { line: 1 });

    let too_nested = format!("{}A{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    assert_eq!(parse(&format!("B = {too_nested};")).unwrap_err(),
               ParseError::TooDeep { line: 1 });
}
