//! Parser Tests - Expressions
//!
//! Operator precedence, associativity, assignment and the postfix forms,
//! checked through the S-expression rendering.

use rstest::rstest;

use crate::helpers::parse_assertions::assert_sexp;

// ============================================================================
// Literals
// ============================================================================

#[rstest]
#[case("42", "(source_file (expression (literal (integer))))")]
#[case("1.5", "(source_file (expression (literal (float))))")]
#[case("\"hi\\n\"", "(source_file (expression (literal (string))))")]
#[case("`sym", "(source_file (expression (literal (symbol))))")]
#[case("true", "(source_file (expression (literal (boolean))))")]
#[case("false", "(source_file (expression (literal (boolean))))")]
#[case("name?", "(source_file (expression (identifier)))")]
fn test_literals(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

// ============================================================================
// Binary operators
// ============================================================================

#[rstest]
// Multiplication binds tighter than addition
#[case(
    "1 + 2 * 3",
    "(source_file (expression (additive_expression left: (literal (integer)) \
     right: (multiplicative_expression left: (literal (integer)) right: (literal (integer))))))"
)]
// Comparison binds tighter than addition
#[case(
    "a + b == c",
    "(source_file (expression (additive_expression left: (identifier) \
     right: (comparison_expression left: (identifier) right: (identifier)))))"
)]
// Chains stay flat
#[case(
    "a - b - c",
    "(source_file (expression (additive_expression left: (identifier) right: (identifier) right: (identifier))))"
)]
#[case(
    "a * b / c % d",
    "(source_file (expression (multiplicative_expression left: (identifier) \
     right: (identifier) right: (identifier) right: (identifier))))"
)]
#[case(
    "x <= y",
    "(source_file (expression (comparison_expression left: (identifier) right: (identifier))))"
)]
fn test_binary_precedence(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[rstest]
#[case("-x", "(source_file (expression (unary_expression (identifier))))")]
#[case("-#x", "(source_file (expression (unary_expression (unary_expression (identifier)))))")]
#[case(
    "#xs + 1",
    "(source_file (expression (additive_expression left: (unary_expression (identifier)) right: (literal (integer)))))"
)]
fn test_unary(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

// ============================================================================
// Assignment
// ============================================================================

#[rstest]
#[case(
    "x: 1",
    "(source_file (expression (assignment left: (identifier) right: (expression (literal (integer))))))"
)]
// Right-associative
#[case(
    "x: y: 1",
    "(source_file (expression (assignment left: (identifier) \
     right: (expression (assignment left: (identifier) right: (expression (literal (integer))))))))"
)]
#[case(
    "xs[0]: 1",
    "(source_file (expression (assignment left: (index_expression object: (identifier) \
     (index_suffix (expression (literal (integer))))) right: (expression (literal (integer))))))"
)]
// An index at the end of a longer chain is still a target
#[case(
    "m[i][j]: 5",
    "(source_file (expression (assignment left: (postfix_expression object: (identifier) \
     (index_suffix (expression (identifier))) (index_suffix (expression (identifier)))) \
     right: (expression (literal (integer))))))"
)]
#[case(
    "f[x;][0]: 1",
    "(source_file (expression (assignment left: (postfix_expression object: (identifier) \
     (call_suffix (expression (identifier))) (index_suffix (expression (literal (integer))))) \
     right: (expression (literal (integer))))))"
)]
#[case(
    "s: a + b",
    "(source_file (expression (assignment left: (identifier) \
     right: (expression (additive_expression left: (identifier) right: (identifier))))))"
)]
fn test_assignment(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

// ============================================================================
// Calls and indexing
// ============================================================================

#[rstest]
// A trailing `;` makes a call
#[case(
    "f[x;]",
    "(source_file (expression (call_expression function: (identifier) (call_suffix (expression (identifier))))))"
)]
#[case(
    "f[;]",
    "(source_file (expression (call_expression function: (identifier) (call_suffix))))"
)]
#[case(
    "f[a; b;]",
    "(source_file (expression (call_expression function: (identifier) \
     (call_suffix (expression (identifier)) (expression (identifier))))))"
)]
#[case(
    "v[0]",
    "(source_file (expression (index_expression object: (identifier) (index_suffix (expression (literal (integer)))))))"
)]
#[case(
    "m[i; j]",
    "(source_file (expression (index_expression object: (identifier) \
     (index_suffix (expression (identifier)) (expression (identifier))))))"
)]
// Two or more suffixes form one flat postfix expression
#[case(
    "m[0][1]",
    "(source_file (expression (postfix_expression object: (identifier) \
     (index_suffix (expression (literal (integer)))) (index_suffix (expression (literal (integer)))))))"
)]
#[case(
    "f[x;][0]",
    "(source_file (expression (postfix_expression object: (identifier) \
     (call_suffix (expression (identifier))) (index_suffix (expression (literal (integer)))))))"
)]
fn test_calls_and_indexing(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}

#[test]
fn test_call_binds_tighter_than_operators() {
    assert_sexp(
        "-f[x;] * 2",
        "(source_file (expression (multiplicative_expression left: (unary_expression \
         (call_expression function: (identifier) (call_suffix (expression (identifier))))) \
         right: (literal (integer)))))",
    );
}

// ============================================================================
// W and N outside loops
// ============================================================================

#[rstest]
#[case(
    "W: 1",
    "(source_file (expression (assignment left: (identifier) right: (expression (literal (integer))))))"
)]
#[case(
    "N + W",
    "(source_file (expression (additive_expression left: (identifier) right: (identifier))))"
)]
#[case(
    "{[W; N] W}",
    "(source_file (expression (function_definition (parameter_list (identifier) (identifier)) \
     (statement_list (expression (identifier))))))"
)]
fn test_loop_letters_as_identifiers(#[case] input: &str, #[case] expected: &str) {
    assert_sexp(input, expected);
}
