//! Assertion helpers shared by the parser and language tests.

use tree_sitter_wq::parser::ErrorCode;
use tree_sitter_wq::{Parse, parse};

/// Parse a source string and assert there are no errors.
pub fn parse_ok(source: &str) -> Parse {
    let parsed = parse(source);
    assert!(
        parsed.ok(),
        "Expected no errors for {:?}, got:\n{}",
        source,
        parsed
            .errors
            .iter()
            .map(|e| format!("  {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    parsed
}

/// Assert the tree-sitter style rendering of a source string.
pub fn assert_sexp(source: &str, expected: &str) {
    let parsed = parse_ok(source);
    assert_eq!(parsed.sexp(), expected, "Input: {source:?}");
}

/// Error codes reported for a source string, in order.
pub fn error_codes(source: &str) -> Vec<ErrorCode> {
    parse(source).errors.iter().map(|e| e.code).collect()
}

/// Assert the text of the tree equals the input.
pub fn assert_lossless(source: &str) {
    let parsed = parse(source);
    assert_eq!(parsed.syntax().text().to_string(), source);
}
