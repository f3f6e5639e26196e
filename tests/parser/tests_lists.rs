//! Parser Tests - Lists and Dictionaries

use rstest::rstest;

use crate::helpers::parse_assertions::{assert_sexp, parse_ok};
use tree_sitter_wq::parser::ast::{Expr, LiteralValue, Statement};

#[rstest]
#[case("()", "(source_file (expression (empty_list)))")]
#[case("(;)", "(source_file (expression (empty_list)))")]
#[case(
    "(1)",
    "(source_file (expression (parenthesized_expression (expression (literal (integer))))))"
)]
// A trailing newline keeps a single item parenthesized
#[case(
    "(x\n)",
    "(source_file (expression (parenthesized_expression (expression (identifier)) (newline))))"
)]
// A trailing `;` makes it a one-element list
#[case(
    "(x;)",
    "(source_file (expression (multi_list (expression (identifier)))))"
)]
#[case(
    "(1; 2)",
    "(source_file (expression (multi_list (expression (literal (integer))) (expression (literal (integer))))))"
)]
#[case(
    "(1\n2)",
    "(source_file (expression (multi_list (expression (literal (integer))) (newline) \
     (expression (literal (integer))))))"
)]
#[case(
    "((1; 2); (3; 4))",
    "(source_file (expression (multi_list \
     (expression (multi_list (expression (literal (integer))) (expression (literal (integer))))) \
     (expression (multi_list (expression (literal (integer))) (expression (literal (integer))))))))"
)]
fn test_lists(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[rstest]
#[case(
    "(`a: 1)",
    "(source_file (expression (dict (pair key: (symbol) value: (expression (literal (integer)))))))"
)]
#[case(
    "(`a: 1; `b: 2)",
    "(source_file (expression (dict (pair key: (symbol) value: (expression (literal (integer)))) \
     (pair key: (symbol) value: (expression (literal (integer)))))))"
)]
// Leading and trailing separators are allowed
#[case(
    "(\n`a: x\n`b: y\n)",
    "(source_file (expression (dict (newline) (pair key: (symbol) value: (expression (identifier))) \
     (newline) (pair key: (symbol) value: (expression (identifier))) (newline))))"
)]
fn test_dicts(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[rstest]
#[case(
    ",1",
    "(source_file (expression (leading_comma_list (expression (literal (integer))))))"
)]
#[case(
    ",a,b,c",
    "(source_file (expression (leading_comma_list (expression (identifier)) \
     (expression (identifier)) (expression (identifier)))))"
)]
#[case(
    "xs: ,1,2",
    "(source_file (expression (assignment left: (identifier) right: (expression \
     (leading_comma_list (expression (literal (integer))) (expression (literal (integer))))))))"
)]
fn test_leading_comma_lists(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[test]
fn test_dict_values_through_ast() {
    let parsed = parse_ok("(`name: \"wq\"; `version: 14)");
    let Some(Statement::Expression(expr)) = parsed.tree().statements().next() else {
        panic!("expected expression statement");
    };
    let Some(Expr::Dict(dict)) = expr.expr() else {
        panic!("expected dict");
    };

    let version = dict.get("version").and_then(|e| e.expr()).unwrap();
    let Expr::Literal(literal) = version else {
        panic!("expected literal");
    };
    assert_eq!(literal.value(), Some(LiteralValue::Integer(14)));
}
