//! Parser Tests - Control Flow
//!
//! Conditionals, loops, branch sequences, function definitions and the
//! control statements.

use rstest::rstest;

use crate::helpers::parse_assertions::{assert_sexp, parse_ok};
use crate::helpers::source_fixtures::COUNTDOWN;
use tree_sitter_wq::parser::ast::{Expr, Statement};

// ============================================================================
// Conditionals
// ============================================================================

#[rstest]
#[case(
    "$[a; b; c]",
    "(source_file (expression (conditional_expression condition: (expression (identifier)) \
     true_branch: (branch_sequence (expression (identifier))) \
     false_branch: (branch_sequence (expression (identifier))))))"
)]
// The true branch continues across newlines only; `;` moves on to the false branch
#[case(
    "$[a; b\nc; d; e]",
    "(source_file (expression (conditional_expression condition: (expression (identifier)) \
     true_branch: (branch_sequence (expression (identifier)) (newline) (expression (identifier))) \
     false_branch: (branch_sequence (expression (identifier)) (expression (identifier))))))"
)]
#[case(
    "$.[ok; x]",
    "(source_file (expression (conditional_expression_short condition: (expression (identifier)) \
     true_branch: (branch_sequence (expression (identifier))))))"
)]
#[case(
    "$.[ok; x: 1; y: 2]",
    "(source_file (expression (conditional_expression_short condition: (expression (identifier)) \
     true_branch: (branch_sequence \
     (expression (assignment left: (identifier) right: (expression (literal (integer))))) \
     (expression (assignment left: (identifier) right: (expression (literal (integer)))))))))"
)]
#[case(
    "$[x > 0; @r 1; @r 0]",
    "(source_file (expression (conditional_expression \
     condition: (expression (comparison_expression left: (identifier) right: (literal (integer)))) \
     true_branch: (branch_sequence (return_statement (expression (literal (integer))))) \
     false_branch: (branch_sequence (return_statement (expression (literal (integer))))))))"
)]
fn test_conditionals(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

// ============================================================================
// Loops
// ============================================================================

#[rstest]
#[case(
    "W[x; @b]",
    "(source_file (expression (while_loop condition: (expression (identifier)) \
     body: (branch_sequence (break_statement)))))"
)]
#[case(
    "N[3; @c]",
    "(source_file (expression (for_loop count: (expression (literal (integer))) \
     body: (branch_sequence (continue_statement)))))"
)]
#[case(
    "N[n; a; b]",
    "(source_file (expression (for_loop count: (expression (identifier)) \
     body: (branch_sequence (expression (identifier)) (expression (identifier))))))"
)]
fn test_loops(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[test]
fn test_loop_body_spans_lines() {
    let parsed = parse_ok(COUNTDOWN);
    let statements: Vec<_> = parsed.tree().statements().collect();
    assert_eq!(statements.len(), 2);

    let Statement::Expression(expr) = &statements[1] else {
        panic!("expected expression statement");
    };
    let Some(Expr::While(w)) = expr.expr() else {
        panic!("expected while loop");
    };
    assert_eq!(w.body().unwrap().statements().count(), 2);
}

// ============================================================================
// Functions
// ============================================================================

#[rstest]
#[case(
    "{[x; y] x + y}",
    "(source_file (expression (function_definition (parameter_list (identifier) (identifier)) \
     (statement_list (expression (additive_expression left: (identifier) right: (identifier)))))))"
)]
#[case(
    "{@r 1}",
    "(source_file (expression (function_definition (statement_list \
     (return_statement (expression (literal (integer))))))))"
)]
#[case(
    "{[] 0}",
    "(source_file (expression (function_definition (parameter_list) \
     (statement_list (expression (literal (integer)))))))"
)]
#[case(
    "{a\n\nb;;c}",
    "(source_file (expression (function_definition (statement_list (expression (identifier)) \
     (newline) (newline) (expression (identifier)) (expression (identifier))))))"
)]
fn test_functions(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[test]
fn test_nested_functions() {
    assert_sexp(
        "{[f] {[x] f[x;]}}",
        "(source_file (expression (function_definition (parameter_list (identifier)) \
         (statement_list (expression (function_definition (parameter_list (identifier)) \
         (statement_list (expression (call_expression function: (identifier) \
         (call_suffix (expression (identifier))))))))))))",
    );
}

// ============================================================================
// Statements
// ============================================================================

#[rstest]
#[case("@b", "(source_file (break_statement))")]
#[case("@c", "(source_file (continue_statement))")]
#[case("@r", "(source_file (return_statement))")]
#[case(
    "@a x == 1",
    "(source_file (assert_statement (expression (comparison_expression left: (identifier) right: (literal (integer))))))"
)]
#[case(
    "x: 1\ny",
    "(source_file (expression (assignment left: (identifier) right: (expression (literal (integer))))) \
     (newline) (expression (identifier)))"
)]
#[case(
    "\n\na; b\n",
    "(source_file (newline) (newline) (expression (identifier)) (expression (identifier)) (newline))"
)]
fn test_statements(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[test]
fn test_comments_are_kept() {
    assert_sexp(
        "// header\nx // trailing",
        "(source_file (comment) (newline) (expression (identifier)) (comment))",
    );
}
