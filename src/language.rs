//! The wq language descriptor
//!
//! A single immutable [`Language`] value describes the grammar to a host
//! parsing runtime: its name, the ABI version it was built for, every node
//! kind and every field. It lives in a `static` and is handed out by
//! reference ([`language`]) or, across the C boundary, by raw pointer
//! ([`tree_sitter_wq`]). Nothing ever mutates or frees it.

use thiserror::Error;

use crate::parser::{Field, Parse, SyntaxKind};

/// Version of the descriptor layout reported by [`Language::abi_version`]
///
/// Numbered after the tree-sitter ABI whose metadata it mirrors. The
/// descriptor is not a libtree-sitter parse table.
pub const ABI_VERSION: u32 = 14;

/// Errors from name-based descriptor lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// No visible node kind has this name.
    #[error("unknown node kind `{0}`")]
    UnknownKind(String),

    /// No field has this name.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Grammar descriptor for wq
#[derive(Debug)]
pub struct Language {
    name: &'static str,
    abi_version: u32,
    kinds: &'static [SyntaxKind],
    fields: &'static [Field],
}

static LANGUAGE: Language = Language {
    name: "wq",
    abi_version: ABI_VERSION,
    kinds: SyntaxKind::ALL,
    fields: Field::ALL,
};

/// The process-wide wq descriptor.
pub fn language() -> &'static Language {
    &LANGUAGE
}

/// C entry point: `const TSLanguage *tree_sitter_wq(void);`
///
/// The pointer is never null and is the same on every call. It points at a
/// Rust [`Language`], so C sees an opaque handle. It is not a libtree-sitter
/// `TSLanguage` table and must not be passed to `ts_parser_set_language`.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_wq() -> *const Language {
    &LANGUAGE
}

/// One entry of the node type table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeType {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: &'static str,
    pub named: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub fields: Vec<&'static str>,
}

impl Language {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn abi_version(&self) -> u32 {
        self.abi_version
    }

    pub fn node_kind_count(&self) -> usize {
        self.kinds.len()
    }

    pub fn node_kind_for_id(&self, id: u16) -> Option<&'static str> {
        self.kind(id).map(SyntaxKind::name)
    }

    /// Id of the visible kind called `name` with the given namedness
    pub fn id_for_node_kind(&self, name: &str, named: bool) -> Option<u16> {
        self.kinds
            .iter()
            .find(|kind| kind.is_visible() && kind.is_named() == named && kind.name() == name)
            .map(|kind| *kind as u16)
    }

    pub fn node_kind_is_named(&self, id: u16) -> bool {
        self.kind(id).is_some_and(SyntaxKind::is_named)
    }

    pub fn node_kind_is_visible(&self, id: u16) -> bool {
        self.kind(id).is_some_and(SyntaxKind::is_visible)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_name_for_id(&self, id: u16) -> Option<&'static str> {
        Field::from_id(id).map(Field::name)
    }

    pub fn field_id_for_name(&self, name: &str) -> Option<u16> {
        self.lookup_field(name).ok().map(Field::id)
    }

    /// Kind by grammar name; named kinds win over anonymous ones
    pub fn lookup_kind(&self, name: &str) -> Result<SyntaxKind, LanguageError> {
        name.parse()
    }

    pub fn lookup_field(&self, name: &str) -> Result<Field, LanguageError> {
        name.parse()
    }

    /// Named, visible kinds with the fields each can carry
    pub fn node_types(&self) -> Vec<NodeType> {
        self.kinds
            .iter()
            .filter(|kind| kind.is_named() && kind.is_visible() && **kind != SyntaxKind::ERROR)
            .map(|kind| NodeType {
                kind: kind.name(),
                named: true,
                fields: Field::for_kind(*kind).iter().map(|f| f.name()).collect(),
            })
            .collect()
    }

    /// [`node_types`](Self::node_types) as JSON
    #[cfg(feature = "serde")]
    pub fn node_types_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.node_types())
    }

    /// Parse `text` with this grammar
    pub fn parse(&self, text: &str) -> Parse {
        crate::parser::parse(text)
    }

    fn kind(&self, id: u16) -> Option<SyntaxKind> {
        self.kinds.get(usize::from(id)).copied()
    }
}
