//! Diagnostics produced while parsing
//!
//! A diagnostic carries an [`ErrorCode`], a range into the source, and
//! optionally a hint and "opened here" style notes pointing elsewhere.

use std::fmt;

use rowan::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::base::LineIndex;

/// How bad a diagnostic is; only errors make [`Parse::ok`](crate::Parse::ok) false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    #[default]
    Error,
    /// Well-formed but suspicious input, e.g. `{}`
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A secondary location, e.g. the `[` an unclosed bracket was opened at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// One parser diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// Suggested fix, printed on its own line
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
            related: vec![],
        }
    }

    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// `E0201: message`, followed by the hint if there is one
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }

    /// Format the error prefixed with its 1-based `line:column`
    pub fn format_at(&self, index: &LineIndex) -> String {
        let pos = index.position(self.range.start());
        let mut result = format!(
            "{}:{}: {} {}",
            pos.line + 1,
            pos.column + 1,
            self.severity.as_str(),
            self.format()
        );
        for related in &self.related {
            let at = index.position(related.range.start());
            result.push_str(&format!(
                "\n  {}:{}: {}",
                at.line + 1,
                at.column + 1,
                related.message
            ));
        }
        result
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Builder used for diagnostics with related locations
pub struct SyntaxErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    related: Vec<RelatedInfo>,
}

impl SyntaxErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            related: vec![],
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Missing parts fall back to the code's default message and an empty
    /// range at offset 0
    pub fn build(self) -> SyntaxError {
        SyntaxError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            code: self.code,
            severity: Severity::Error,
            hint: None,
            related: self.related,
        }
    }
}

/// "unexpected X in <context>, expected Y"
pub fn format_context_error(
    found: &str,
    context: ParseContext,
    code: ErrorCode,
    range: TextRange,
) -> SyntaxError {
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );

    SyntaxError::builder(code).message(message).range(range).build()
}
