//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for wq syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Accessors return `None` where error recovery left a slot empty.

use smol_str::SmolStr;

use super::field::{Field, child_by_field};
use super::syntax_kind::SyntaxKind;
use super::{SyntaxElement, SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities for reducing code duplication
// ============================================================================

/// Expression operands among the direct children of a node, tokens
/// (identifiers) included.
fn expr_children(node: &SyntaxNode) -> impl Iterator<Item = Expr> + '_ {
    node.children_with_tokens().filter_map(Expr::cast_element)
}

/// The operand filling `field` on `node`
fn expr_field(node: &SyntaxNode, field: Field) -> Option<Expr> {
    child_by_field(node, field).and_then(Expr::cast_element)
}

/// Macro to generate a method that finds the first child of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     first_child_method!(body, StatementList);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     children_method!(statements, Statement);
/// }
/// ```
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns the node filling a grammar field.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     field_method!(body, Body, BranchSequence);
/// }
/// ```
macro_rules! field_method {
    ($name:ident, $field:ident, $type:ident) => {
        #[doc = concat!("Get the `", stringify!($type), "` in the `", stringify!($field), "` slot.")]
        pub fn $name(&self) -> Option<$type> {
            child_by_field(&self.0, Field::$field)
                .and_then(|e| e.into_node())
                .and_then($type::cast)
        }
    };
}

/// Macro to generate a method that maps token kinds to enum variants.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     token_to_enum_method!(op, UnaryOp, [
///         MINUS => Negate,
///         HASH => Count,
///     ]);
/// }
/// ```
macro_rules! token_to_enum_method {
    ($name:ident, $enum_type:ident, [$($token:ident => $variant:ident),+ $(,)?]) => {
        pub fn $name(&self) -> Option<$enum_type> {
            for token in self.0.children_with_tokens().filter_map(|e| e.into_token()) {
                match token.kind() {
                    $(SyntaxKind::$token => return Some($enum_type::$variant),)+
                    _ => {}
                }
            }
            None
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Source text covered by this node
    fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

/// Trait for AST tokens that wrap a SyntaxToken
pub trait AstToken: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(token: SyntaxToken) -> Option<Self>;
    fn syntax(&self) -> &SyntaxToken;

    fn text(&self) -> &str {
        self.syntax().text()
    }
}

/// Macro to generate AST node wrapper structs
macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// Submodules are declared after the macros so macro_rules! are in scope
mod control;
mod expressions;
mod literals;

pub use self::control::*;
pub use self::expressions::*;
pub use self::literals::*;
