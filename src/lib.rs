//! # tree-sitter-wq
//!
//! Grammar descriptor and parser for the wq language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! language  → Static grammar descriptor, `tree_sitter_wq` C entry point
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, CST, typed AST
//!   ↓
//! base      → Primitives (TextRange, line/column positions)
//! ```
//!
//! ```
//! let parse = tree_sitter_wq::parse("sq: {[x] x * x}\nsq[4;]");
//! assert!(parse.ok());
//! assert_eq!(parse.syntax().text().to_string(), "sq: {[x] x * x}\nsq[4;]");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → language)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, grammar traits
pub mod parser;

/// The grammar descriptor handed to a host parsing runtime
pub mod language;

pub use language::{ABI_VERSION, Language, LanguageError, NodeType, language, tree_sitter_wq};
pub use parser::{Parse, SyntaxError, SyntaxKind, SyntaxNode, parse};

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
