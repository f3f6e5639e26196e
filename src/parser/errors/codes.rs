//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters, separators)
//! - E03xx: Binding errors (assignment targets, parameters)
//! - E04xx: Expression errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Integer literal does not fit in 64 bits (reported as a warning)
    E0104,

    // =========================================================================
    // E02xx: Structural errors (delimiters, separators)
    // =========================================================================
    /// Missing `;` or newline between statements
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Function body with no statements
    E0206,

    // =========================================================================
    // E03xx: Binding errors
    // =========================================================================
    /// Missing parameter name
    E0301,
    /// Left side of `:` is not an identifier or index expression
    E0302,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Dictionary entry that is not a `` `key: value `` pair
    E0401,
    /// Missing operand after an operator
    E0402,
    /// Index suffix with no index expression
    E0403,
    /// Missing expression where expected
    E0406,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Expressions nested too deeply; the rest of the input is not parsed
    E0903,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0104 => "E0104",
            // Structural
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            // Binding
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            // Expression
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0406 => "E0406",
            // Generic
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0903 => "E0903",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0104 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 => "binding error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0406 => "expression error",
            Self::E0901 | Self::E0902 | Self::E0903 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0104 => "integer literal out of range",
            // Structural
            Self::E0201 => "missing separator",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "empty function body",
            // Binding
            Self::E0301 => "missing parameter name",
            Self::E0302 => "invalid assignment target",
            // Expression
            Self::E0401 => "expected key-value pair",
            Self::E0402 => "missing operand",
            Self::E0403 => "empty index",
            Self::E0406 => "expected expression",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0903 => "nesting too deep",
            Self::E0999 => "internal parser error",
        }
    }

    /// E01xx: problems with a single token
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102 | Self::E0104)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
