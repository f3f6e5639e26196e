//! Grammar modules for wq parsing
//!
//! - `expressions` - the expression precedence chain and the bracketed forms
//!   (conditionals, loops, function definitions, lists, dictionaries)
//! - `statements` - statements and separator-delimited statement sequences
//!
//! The parsing functions are generic over [`ExpressionParser`] so they can
//! be used with any parser implementation.

pub mod expressions;
pub mod statements;

pub use expressions::{ExpressionParser, at_expression_start, parse_expression};
pub use statements::{parse_statement, parse_statement_sequence};
