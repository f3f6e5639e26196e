//! Language descriptor tests
//!
//! The C entry point, and agreement between the descriptor and the trees
//! the parser builds.

use std::sync::Arc;
use std::sync::Barrier;

use rstest::rstest;

use crate::helpers::parse_assertions::parse_ok;
use crate::helpers::source_fixtures::KITCHEN_SINK;
use tree_sitter_wq::parser::field::labelled_children;
use tree_sitter_wq::{Language, SyntaxKind, language, parse, tree_sitter_wq};

#[test]
fn test_entry_point_is_stable() {
    let first: *const Language = tree_sitter_wq();
    assert!(!first.is_null());
    for _ in 0..100 {
        assert_eq!(tree_sitter_wq(), first);
    }
    assert!(std::ptr::eq(first, language()));
}

#[test]
fn test_entry_point_is_shared_between_threads() {
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                let lang = language();
                // Concurrent read-only use of the same descriptor
                let parsed = lang.parse("x: 1 + 2");
                assert!(parsed.ok());
                tree_sitter_wq() as usize
            })
        })
        .collect();

    let here = tree_sitter_wq() as usize;
    for handle in handles {
        assert_eq!(handle.join().unwrap(), here);
    }
}

#[test]
fn test_every_produced_kind_is_described() {
    let lang = language();
    let parsed = parse_ok(KITCHEN_SINK);

    for element in parsed.syntax().descendants_with_tokens() {
        let kind = element.kind();
        let id = kind as u16;
        assert_eq!(lang.node_kind_for_id(id), Some(kind.name()), "{kind:?}");
        if kind.is_visible() {
            assert_eq!(
                lang.id_for_node_kind(kind.name(), kind.is_named()),
                Some(id),
                "{kind:?}"
            );
        }
    }
}

#[test]
fn test_error_kinds_are_described() {
    let lang = language();
    let parsed = parse("a ] ~");
    let id = lang.id_for_node_kind("ERROR", true).unwrap();
    assert!(
        parsed
            .syntax()
            .descendants_with_tokens()
            .any(|e| e.kind() as u16 == id)
    );
}

#[test]
fn test_every_label_is_a_declared_field() {
    let lang = language();
    let parsed = parse_ok(KITCHEN_SINK);

    let mut seen = 0;
    for node in parsed.syntax().descendants() {
        for (field, _) in labelled_children(&node) {
            let Some(field) = field else { continue };
            assert_eq!(lang.field_id_for_name(field.name()), Some(field.id()));
            seen += 1;
        }
    }
    assert!(seen > 0);
}

#[rstest]
#[case("source_file", true)]
#[case("while_loop", true)]
#[case("identifier", true)]
#[case("newline", true)]
#[case("$.", false)]
#[case("@r", false)]
#[case("W", false)]
fn test_visible_kinds_round_trip(#[case] name: &str, #[case] named: bool) {
    let lang = language();
    let id = lang.id_for_node_kind(name, named).unwrap();
    assert_eq!(lang.node_kind_for_id(id), Some(name));
    assert_eq!(lang.node_kind_is_named(id), named);
    assert!(lang.node_kind_is_visible(id));
    assert_eq!(name.parse::<SyntaxKind>().map(|k| k as u16), Ok(id));
}

#[test]
fn test_node_types_list_fields() {
    let types = language().node_types();
    let conditional = types
        .iter()
        .find(|t| t.kind == "conditional_expression")
        .unwrap();
    assert_eq!(
        conditional.fields,
        vec!["condition", "true_branch", "false_branch"]
    );
    let literal = types.iter().find(|t| t.kind == "literal").unwrap();
    assert!(literal.fields.is_empty());
}
