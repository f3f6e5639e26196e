//! Parse context tracking for context-aware error messages
//!
//! The parser maintains a stack of contexts to generate more helpful
//! error messages and to pick the tokens it resynchronises on.

use crate::parser::SyntaxKind;

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// At the top level of a file
    TopLevel,
    /// Inside `{ ... }`
    FunctionBody,
    /// Inside the `[x;y]` of a function definition
    ParameterList,
    /// Inside a call or index suffix
    ArgumentList,
    /// Inside `$[...]`, `$.[...]`, `W[...]` or `N[...]`
    Branch,
    /// Inside `( ... )`
    List,
    /// Inside a `,a,b` list
    Expression,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::FunctionBody => "in function body",
            Self::ParameterList => "in parameter list",
            Self::ArgumentList => "in argument list",
            Self::Branch => "in branch",
            Self::List => "in list",
            Self::Expression => "in expression",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel | Self::FunctionBody => "a statement or expression",
            Self::ParameterList => "a parameter name",
            Self::ArgumentList => "an argument",
            Self::Branch => "an expression",
            Self::List => "a list item or `key: value pair",
            Self::Expression => "an expression (literal, identifier, or operator)",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::TopLevel => &[SyntaxKind::SEMICOLON, SyntaxKind::NEWLINE],
            Self::FunctionBody => {
                &[SyntaxKind::SEMICOLON, SyntaxKind::NEWLINE, SyntaxKind::R_BRACE]
            }
            Self::ParameterList | Self::ArgumentList => {
                &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACKET]
            }
            Self::Branch => &[SyntaxKind::SEMICOLON, SyntaxKind::NEWLINE, SyntaxKind::R_BRACKET],
            Self::List => &[SyntaxKind::SEMICOLON, SyntaxKind::NEWLINE, SyntaxKind::R_PAREN],
            Self::Expression => &[
                SyntaxKind::SEMICOLON,
                SyntaxKind::NEWLINE,
                SyntaxKind::COMMA,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACKET,
                SyntaxKind::R_BRACE,
            ],
        }
    }

    /// The closing delimiter that ends this context, if any
    pub fn closing(&self) -> Option<SyntaxKind> {
        match self {
            Self::TopLevel | Self::Expression => None,
            Self::FunctionBody => Some(SyntaxKind::R_BRACE),
            Self::ParameterList | Self::ArgumentList | Self::Branch => Some(SyntaxKind::R_BRACKET),
            Self::List => Some(SyntaxKind::R_PAREN),
        }
    }
}
