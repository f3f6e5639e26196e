//! Rowan-based parser for wq
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! We build a lossless CST that preserves all whitespace and comments, then
//! extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone) + SyntaxErrors
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! Parsing never fails. Malformed input produces `ERROR` nodes around the
//! skipped tokens and a diagnostic in [`Parse::errors`].

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod field;
pub mod grammar;
mod lexer;
mod sexp;
mod syntax_kind;

pub use ast::{AstNode, AstToken, SourceFile};
pub use errors::{ErrorCode, ParseContext, RelatedInfo, Severity, SyntaxError};
pub use field::Field;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{MAX_NESTING_DEPTH, Parse, parse};
pub use syntax_kind::{
    SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken, WqLanguage,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
