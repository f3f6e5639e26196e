//! Parser Tests - Losslessness
//!
//! Whatever the input, the text of the tree is the input.

use rstest::rstest;

use crate::helpers::parse_assertions::{assert_lossless, parse_ok};
use crate::helpers::source_fixtures::{COUNTDOWN, KITCHEN_SINK};
use tree_sitter_wq::parser::tokenize;

#[rstest]
#[case("")]
#[case("   ")]
#[case("\r\n\r\n")]
#[case("x: 1 // one\r\ny: 2")]
#[case(KITCHEN_SINK)]
#[case(COUNTDOWN)]
// Malformed input
#[case("$[")]
#[case("}}}")]
#[case("{[x; 1; ] @r")]
#[case("(`a: ; `b 2")]
#[case("f[1;;;")]
#[case("\"open")]
#[case("x ~ ^ & y")]
#[case("W[N[W[")]
#[case(",,,,")]
fn test_tree_text_equals_input(#[case] input: &str) {
    assert_lossless(input);
}

#[test]
fn test_kitchen_sink_parses_cleanly() {
    parse_ok(KITCHEN_SINK);
}

#[test]
fn test_tokens_cover_input() {
    let tokens = tokenize(KITCHEN_SINK);
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, KITCHEN_SINK);

    let mut expected_offset = 0u32;
    for token in &tokens {
        assert_eq!(u32::from(token.offset), expected_offset);
        expected_offset += token.text.len() as u32;
    }
}
