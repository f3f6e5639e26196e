//! Field names of the wq grammar
//!
//! Fields label the children of a node by role (`left`, `condition`,
//! `body`, ...). They are not stored in the green tree; they are derived
//! from a child's kind and position, the same way for every consumer.

use std::fmt;
use std::str::FromStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxElement, SyntaxNode};
use crate::language::LanguageError;

/// A child role. Ids start at 1 and follow the alphabetical order of the
/// names, as a tree-sitter runtime numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum Field {
    Body = 1,
    Condition,
    Count,
    FalseBranch,
    Function,
    Key,
    Left,
    Object,
    Operator,
    Right,
    TrueBranch,
    Value,
}

impl Field {
    /// Every field, in id order
    pub const ALL: &'static [Field] = &[
        Field::Body,
        Field::Condition,
        Field::Count,
        Field::FalseBranch,
        Field::Function,
        Field::Key,
        Field::Left,
        Field::Object,
        Field::Operator,
        Field::Right,
        Field::TrueBranch,
        Field::Value,
    ];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Field> {
        Self::ALL.get(usize::from(id).checked_sub(1)?).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Body => "body",
            Field::Condition => "condition",
            Field::Count => "count",
            Field::FalseBranch => "false_branch",
            Field::Function => "function",
            Field::Key => "key",
            Field::Left => "left",
            Field::Object => "object",
            Field::Operator => "operator",
            Field::Right => "right",
            Field::TrueBranch => "true_branch",
            Field::Value => "value",
        }
    }

    /// Fields that can appear on a node of `kind`
    pub fn for_kind(kind: SyntaxKind) -> &'static [Field] {
        match kind {
            SyntaxKind::ASSIGNMENT => &[Field::Left, Field::Right],
            SyntaxKind::ADDITIVE_EXPRESSION
            | SyntaxKind::COMPARISON_EXPRESSION
            | SyntaxKind::MULTIPLICATIVE_EXPRESSION => {
                &[Field::Left, Field::Operator, Field::Right]
            }
            SyntaxKind::POSTFIX_EXPRESSION | SyntaxKind::INDEX_EXPRESSION => &[Field::Object],
            SyntaxKind::CALL_EXPRESSION => &[Field::Function],
            SyntaxKind::CONDITIONAL_EXPRESSION => {
                &[Field::Condition, Field::TrueBranch, Field::FalseBranch]
            }
            SyntaxKind::CONDITIONAL_EXPRESSION_SHORT => &[Field::Condition, Field::TrueBranch],
            SyntaxKind::WHILE_LOOP => &[Field::Condition, Field::Body],
            SyntaxKind::FOR_LOOP => &[Field::Count, Field::Body],
            SyntaxKind::PAIR => &[Field::Key, Field::Value],
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| LanguageError::UnknownField(s.to_string()))
    }
}

/// A child that fills a grammar slot, as opposed to punctuation, comments,
/// separators and recovered garbage
fn is_operand(kind: SyntaxKind) -> bool {
    kind.is_named()
        && !matches!(
            kind,
            SyntaxKind::COMMENT | SyntaxKind::NEWLINE | SyntaxKind::ERROR
        )
}

/// The visible children of `node` paired with the field each one fills
pub fn labelled_children(node: &SyntaxNode) -> Vec<(Option<Field>, SyntaxElement)> {
    let parent = node.kind();
    let mut operands = 0usize;
    let mut branches = 0usize;
    let mut labelled = Vec::new();

    for element in node.children_with_tokens() {
        let kind = element.kind();
        if !kind.is_visible() {
            continue;
        }

        let field = match parent {
            SyntaxKind::ASSIGNMENT if is_operand(kind) => match operands {
                0 => Some(Field::Left),
                _ => Some(Field::Right),
            },
            SyntaxKind::ADDITIVE_EXPRESSION
            | SyntaxKind::COMPARISON_EXPRESSION
            | SyntaxKind::MULTIPLICATIVE_EXPRESSION => {
                if kind.is_binary_operator() {
                    Some(Field::Operator)
                } else if is_operand(kind) {
                    match operands {
                        0 => Some(Field::Left),
                        _ => Some(Field::Right),
                    }
                } else {
                    None
                }
            }
            SyntaxKind::POSTFIX_EXPRESSION | SyntaxKind::INDEX_EXPRESSION
                if is_operand(kind) && operands == 0 =>
            {
                Some(Field::Object)
            }
            SyntaxKind::CALL_EXPRESSION if is_operand(kind) && operands == 0 => {
                Some(Field::Function)
            }
            SyntaxKind::CONDITIONAL_EXPRESSION | SyntaxKind::CONDITIONAL_EXPRESSION_SHORT => {
                match kind {
                    SyntaxKind::EXPRESSION => Some(Field::Condition),
                    SyntaxKind::BRANCH_SEQUENCE if branches == 0 => Some(Field::TrueBranch),
                    SyntaxKind::BRANCH_SEQUENCE if branches == 1 => Some(Field::FalseBranch),
                    _ => None,
                }
            }
            SyntaxKind::WHILE_LOOP | SyntaxKind::FOR_LOOP => match kind {
                SyntaxKind::EXPRESSION if parent == SyntaxKind::WHILE_LOOP => {
                    Some(Field::Condition)
                }
                SyntaxKind::EXPRESSION => Some(Field::Count),
                SyntaxKind::BRANCH_SEQUENCE => Some(Field::Body),
                _ => None,
            },
            SyntaxKind::PAIR => match kind {
                SyntaxKind::SYMBOL => Some(Field::Key),
                SyntaxKind::EXPRESSION => Some(Field::Value),
                _ => None,
            },
            _ => None,
        };

        if is_operand(kind) {
            operands += 1;
        }
        if kind == SyntaxKind::BRANCH_SEQUENCE {
            branches += 1;
        }
        labelled.push((field, element));
    }

    labelled
}

/// First child of `node` filling `field`
pub fn child_by_field(node: &SyntaxNode, field: Field) -> Option<SyntaxElement> {
    children_by_field(node, field).into_iter().next()
}

/// All children of `node` filling `field`; binary chains repeat
/// `operator` and `right`
pub fn children_by_field(node: &SyntaxNode, field: Field) -> Vec<SyntaxElement> {
    labelled_children(node)
        .into_iter()
        .filter_map(|(label, element)| (label == Some(field)).then_some(element))
        .collect()
}
