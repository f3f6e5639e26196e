//! Foundation types for the wq toolchain.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
