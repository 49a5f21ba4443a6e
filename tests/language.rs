use std::fs;

use matrixlang::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::shape::Shape,
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "mtx"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match output_of(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in programs/");
}

fn output_of(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(src, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match output_of(src) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match output_of(src) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got parse error: {e}"),
        Ok(_) => panic!("Script succeeded but was expected to fail"),
    }
}

#[test]
fn declare_then_print() {
    assert_output("M[2, 2] = [[1, 2], [3, 4]];\nprint M;",
                  "M (2x2):\n   [1, 2]\n   [3, 4]\n");
}

#[test]
fn multiply_by_identity() {
    assert_output("A[2,2]=[[1,0],[0,1]]; B[2,2]=[[5,6],[7,8]]; C=A*B; print C;",
                  "C (2x2):\n   [5, 6]\n   [7, 8]\n");
}

#[test]
fn matrix_keyword_is_optional() {
    assert_output("matrix A[1, 2] = [[1, 2]];\nB[1, 2] = [[3, 4]];\nprint A;\nprint B;",
                  "A (1x2):\n   [1, 2]\nB (1x2):\n   [3, 4]\n");
}

#[test]
fn negative_entries() {
    assert_output("N[1, 3] = [[-1, 0, -300]];\nprint N;",
                  "N (1x3):\n   [-1, 0, -300]\n");
}

#[test]
fn inner_dimensions_must_agree() {
    let err = runtime_error("A[2,3]=[[1,2,3],[4,5,6]];\nB[2,2]=[[1,2],[3,4]];\nC=A*B;");

    assert_eq!(err,
               RuntimeError::DimensionMismatch { left:  Shape::new(2, 3),
                                                 right: Shape::new(2, 2),
                                                 line:  3, });
}

#[test]
fn chains_pair_from_the_left() {
    // A * B is fine (2x3 * 3x1), but the result 2x1 cannot take C (2x2).
    let src = "A[2, 3] = [[1, 2, 3], [4, 5, 6]];
               B[3, 1] = [[1], [1], [1]];
               C[2, 2] = [[1, 0], [0, 1]];
               D = A * B * C;";

    assert_eq!(runtime_error(src),
               RuntimeError::DimensionMismatch { left:  Shape::new(2, 1),
                                                 right: Shape::new(2, 2),
                                                 line:  4, });
}

#[test]
fn chains_report_the_first_failing_pair() {
    // A * B already fails, so C is never combined with anything.
    let src = "A[1, 2] = [[1, 2]];
               B[1, 2] = [[3, 4]];
               C[2, 5] = [[1, 1, 1, 1, 1], [1, 1, 1, 1, 1]];
               D = A * B * C;";

    assert_eq!(runtime_error(src),
               RuntimeError::DimensionMismatch { left:  Shape::new(1, 2),
                                                 right: Shape::new(1, 2),
                                                 line:  4, });
}

#[test]
fn left_association_can_overflow_where_right_association_would_not() {
    // 2^64 * 2^64 does not fit in 128 bits, while B * Z is zero.
    let declarations = "A[1, 1] = [[18446744073709551616]];
                        B[1, 1] = [[18446744073709551616]];
                        Z[1, 1] = [[0]];";

    let err = runtime_error(&format!("{declarations}\nR = A * B * Z;"));
    assert_eq!(err, RuntimeError::Overflow { line: 4 });

    assert_output(&format!("{declarations}\nR = A * (B * Z);\nprint R;"),
                  "R (1x1):\n   [0]\n");
}

#[test]
fn wide_products_are_exact() {
    let src = format!("W[1, 1] = [[{}]];\nX = W * W;\nprint X;", i64::MAX);
    let expected = format!("X (1x1):\n   [{}]\n", i128::from(i64::MAX).pow(2));

    assert_output(&src, &expected);
}

#[test]
fn declared_shape_must_match_literal() {
    let err = runtime_error("A[2, 2] = [[1, 2, 3], [4, 5, 6]];");

    assert_eq!(err,
               RuntimeError::ShapeMismatch { name:     "A".to_string(),
                                             declared: Shape::new(2, 2),
                                             actual:   Shape::new(2, 3),
                                             line:     1, });
}

#[test]
fn transposed_header_is_a_shape_mismatch() {
    let err = runtime_error("A[3, 1] = [[1, 2, 3]];");

    assert!(matches!(err, RuntimeError::ShapeMismatch { .. }));
}

#[test]
fn ragged_literal_reports_first_offending_row() {
    let err = runtime_error("A[4, 1] = [[1], [2], [3, 4], [5, 6, 7]];");

    assert_eq!(err,
               RuntimeError::RaggedMatrix { row:      3,
                                            expected: 1,
                                            found:    2,
                                            line:     1, });
}

#[test]
fn ragged_inline_literal_in_expression() {
    let err = runtime_error("A[1, 1] = [[1]];\nB = A * [[1, 2],\n[3]];");

    assert_eq!(err,
               RuntimeError::RaggedMatrix { row:      2,
                                            expected: 2,
                                            found:    1,
                                            line:     3, });
}

#[test]
fn printing_unbound_name_fails() {
    let err = runtime_error("A[1, 1] = [[1]];\nB[1, 1] = [[2]];\nprint C;");

    assert_eq!(err,
               RuntimeError::UnknownVariable { name: "C".to_string(),
                                               line: 3, });
}

#[test]
fn using_unbound_name_in_expression_fails() {
    let err = runtime_error("A[1, 1] = [[1]];\nC = A * D;");

    assert_eq!(err,
               RuntimeError::UnknownVariable { name: "D".to_string(),
                                               line: 2, });
}

#[test]
fn assignment_declares_implicitly() {
    assert_output("C = [[1, 2]];\nprint C;", "C (1x2):\n   [1, 2]\n");
}

#[test]
fn redeclaration_overwrites() {
    assert_output("A[1, 1] = [[1]];\nA[1, 2] = [[2, 3]];\nprint A;",
                  "A (1x2):\n   [2, 3]\n");
}

#[test]
fn reassignment_replaces_binding() {
    assert_output("A[2, 2] = [[1, 2], [3, 4]];
                   A = A * A;
                   print A;",
                  "A (2x2):\n   [7, 10]\n   [15, 22]\n");
}

#[test]
fn assignment_copies_value() {
    // B keeps the old value of A after A is replaced.
    assert_output("A[1, 1] = [[1]];
                   B = A;
                   A = [[9]];
                   print B;
                   print A;",
                  "B (1x1):\n   [1]\nA (1x1):\n   [9]\n");
}

#[test]
fn output_before_failure_is_kept() {
    let mut out = Vec::new();
    let result = run("A[1, 1] = [[4]];\nprint A;\nprint Z;\nprint A;", &mut out);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::UnknownVariable { line: 3, .. }))));
    assert_eq!(String::from_utf8(out).unwrap(), "A (1x1):\n   [4]\n");
}

#[test]
fn parse_errors_produce_no_output() {
    let mut out = Vec::new();
    let result = run("A[1, 1] = [[4]];\nprint A;\nB = ;", &mut out);

    assert!(matches!(result, Err(Error::Parse(ParseError::UnexpectedToken { line: 3, .. }))));
    assert!(out.is_empty());
}

#[test]
fn errors_render_with_line_numbers() {
    let err = output_of("A[1, 2] = [[1, 2]];\nB = A * A;").unwrap_err();

    assert_eq!(err.line(), 2);
    assert_eq!(err.to_string(),
               "Error on line 2: Dimension mismatch for product: (1x2) * (1x2).");
}

#[test]
fn long_product_chains_run() {
    let chain = vec!["A"; 200].join(" * ");

    assert_output(&format!("A[1, 1] = [[1]];\nB = {chain};\nprint B;"),
                  "B (1x1):\n   [1]\n");
}

#[test]
fn overlong_product_chain_is_rejected() {
    let mut out = Vec::new();
    let chain = vec!["A"; 3000].join(" * ");
    let result = run(&format!("A[1, 1] = [[1]];\nB = {chain};\nprint B;"), &mut out);

    assert!(matches!(result, Err(Error::Parse(ParseError::TooDeep { line: 2 }))));
    assert!(out.is_empty());
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let nested = format!("{}A{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = output_of(&format!("A[1, 1] = [[1]];\nB = {nested};")).unwrap_err();

    assert_eq!(err.to_string(),
               "Error on line 2: Expression is nested too deeply.");
}

#[test]
fn empty_program_does_nothing() {
    assert_output("", "");
    assert_output("// only a comment\n", "");
}
