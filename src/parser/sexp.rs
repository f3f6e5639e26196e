//! S-expression rendering of a CST, in the format tree-sitter test corpora
//! use: named children only, with `field: ` labels.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::field::{Field, labelled_children};
use super::{SyntaxElement, SyntaxNode};

pub(crate) fn to_sexp(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_element(&mut out, &NodeOrToken::Node(node.clone()), None);
    out
}

fn write_element(out: &mut String, element: &SyntaxElement, field: Option<Field>) {
    if let Some(field) = field {
        let _ = write!(out, "{field}: ");
    }
    out.push('(');
    out.push_str(element.kind().name());
    if let NodeOrToken::Node(node) = element {
        for (field, child) in labelled_children(node) {
            if child.kind().is_named() {
                out.push(' ');
                write_element(out, &child, field);
            }
        }
    }
    out.push(')');
}
