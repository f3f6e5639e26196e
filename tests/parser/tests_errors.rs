//! Parser Tests - Error Recovery
//!
//! Malformed input still yields a complete tree; each case checks the
//! diagnostics reported for it.

use rstest::rstest;

use crate::helpers::parse_assertions::error_codes;
use tree_sitter_wq::parser::{ErrorCode, MAX_NESTING_DEPTH, Severity};
use tree_sitter_wq::{LineIndex, SyntaxKind, parse};

#[rstest]
#[case::invalid_character("x ~ y", &[ErrorCode::E0101])]
#[case::unterminated_string("s: \"abc", &[ErrorCode::E0102])]
#[case::missing_separator("a b", &[ErrorCode::E0201])]
#[case::missing_list_separator("(1 2)", &[ErrorCode::E0201])]
#[case::unclosed_brace("{x", &[ErrorCode::E0202])]
#[case::unclosed_paren("(1", &[ErrorCode::E0203])]
#[case::unclosed_bracket("f[1;2", &[ErrorCode::E0204])]
#[case::stray_closer("a ] b", &[ErrorCode::E0205])]
#[case::bad_parameter("{[1] x}", &[ErrorCode::E0301])]
#[case::literal_target("1: 2", &[ErrorCode::E0302])]
#[case::call_target("f[x;]: 1", &[ErrorCode::E0302])]
#[case::chain_ending_in_call("m[0][x;]: 1", &[ErrorCode::E0302])]
#[case::dict_item("(`a: 1; 2)", &[ErrorCode::E0401])]
#[case::missing_operand("1 +", &[ErrorCode::E0402])]
#[case::missing_unary_operand("-", &[ErrorCode::E0402])]
#[case::empty_index("f[]", &[ErrorCode::E0403])]
#[case::leading_semicolon_in_index("f[;1]", &[ErrorCode::E0406])]
#[case::doubled_semicolon_in_index("f[1;;2]", &[ErrorCode::E0406])]
#[case::doubled_semicolon_in_call("f[;;]", &[ErrorCode::E0406])]
#[case::doubled_trailing_semicolon("f[1;;]", &[ErrorCode::E0406])]
#[case::control_word_after_first_branch_item("$[c; a\n@r 1; b]", &[ErrorCode::E0406])]
#[case::missing_value("x: )", &[ErrorCode::E0406, ErrorCode::E0205])]
#[case::missing_false_branch("$[a; b]", &[ErrorCode::E0902])]
#[case::missing_loop_body("W[x]", &[ErrorCode::E0902])]
fn test_error_codes(#[case] input: &str, #[case] expected: &[ErrorCode]) {
    assert_eq!(error_codes(input), expected, "Input: {input:?}");
}

#[rstest]
#[case("{}")]
#[case("{[x]}")]
fn test_empty_function_body_is_a_warning(#[case] input: &str) {
    let parsed = parse(input);
    assert!(parsed.ok());
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].code, ErrorCode::E0206);
    assert_eq!(parsed.errors[0].severity, Severity::Warning);
}

#[test]
fn test_oversized_integer_is_a_warning() {
    let parsed = parse("x: 99999999999999999999");
    assert!(parsed.ok());
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].code, ErrorCode::E0104);
    assert_eq!(parsed.errors[0].severity, Severity::Warning);
}

#[rstest]
#[case::parentheses("(", ")")]
#[case::function_bodies("{", "}")]
#[case::unary_operators("-", "")]
#[case::conditionals("$[c; ", "; 0]")]
fn test_deep_nesting_is_reported_not_fatal(#[case] open: &str, #[case] close: &str) {
    let depth = MAX_NESTING_DEPTH * 20;
    let source = format!("{}1{}\nnext: 2", open.repeat(depth), close.repeat(depth));
    let parsed = parse(&source);
    assert_eq!(parsed.syntax().text().to_string(), source);
    assert_eq!(error_codes(&source), [ErrorCode::E0903]);
}

#[test]
fn test_nesting_limit_boundary() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    // The statement itself is one level
    assert!(parse(&nested(MAX_NESTING_DEPTH - 1)).ok());
    assert_eq!(error_codes(&nested(MAX_NESTING_DEPTH)), [ErrorCode::E0903]);
}

#[test]
fn test_recovery_continues_after_bad_statement() {
    let parsed = parse("a b c\nok: 1");
    assert!(!parsed.ok());
    assert_eq!(parsed.errors.len(), 1);
    assert!(parsed.sexp().ends_with(
        "(newline) (expression (assignment left: (identifier) right: (expression (literal (integer))))))"
    ));
}

#[test]
fn test_recovery_inside_function_body() {
    let parsed = parse("f: {[x] x ) y}\ng: 2");
    assert_eq!(
        parsed.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0205]
    );
    let assignments = parsed
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::ASSIGNMENT)
        .count();
    assert_eq!(assignments, 2);
}

#[test]
fn test_skipped_tokens_are_wrapped_in_error_nodes() {
    let parsed = parse("a ] b");
    let error = parsed
        .syntax()
        .children()
        .find(|n| n.kind() == SyntaxKind::ERROR)
        .unwrap();
    assert_eq!(error.text().to_string(), "]");
}

#[test]
fn test_error_positions() {
    let source = "x: 1\ny z";
    let parsed = parse(source);
    let index = LineIndex::new(source);
    let rendered: Vec<_> = parsed.errors.iter().map(|e| e.format_at(&index)).collect();
    assert_eq!(
        rendered,
        vec!["2:3: error E0201: expected ';' or newline after statement, found identifier"]
    );
}

#[test]
fn test_unclosed_delimiter_points_at_opener() {
    let source = "g: {[x]\n  x + 1\n";
    let parsed = parse(source);
    let error = parsed.errors.iter().find(|e| e.code == ErrorCode::E0202).unwrap();
    let index = LineIndex::new(source);
    assert_eq!(
        error.format_at(&index),
        "3:1: error E0202: unclosed brace: expected '}'\n  1:4: opened here"
    );
}
