//! Syntax kinds for the Rowan-based CST
//!
//! Every token and node kind of the wq grammar. The discriminant of each
//! kind is also its id in the [`Language`](crate::Language) descriptor, and
//! the name/named/visible triple mirrors what a tree-sitter runtime reports
//! for the same symbol.

use std::fmt;
use std::str::FromStr;

use crate::language::LanguageError;

macro_rules! syntax_kinds {
    ($( $(#[$meta:meta])* $variant:ident => ($name:literal, $named:literal, $visible:literal) ),+ $(,)?) => {
        /// All syntax kinds (tokens and nodes) in wq
        ///
        /// Tokens are leaves (identifiers, literals, punctuation).
        /// Nodes are composite (assignments, loops, function definitions).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        #[allow(non_camel_case_types)]
        pub enum SyntaxKind {
            $( $(#[$meta])* $variant, )+
        }

        impl SyntaxKind {
            /// Every kind, indexed by its id
            pub const ALL: &'static [SyntaxKind] = &[ $( SyntaxKind::$variant, )+ ];

            /// The grammar name of this kind (`"identifier"`, `";"`, `"while_loop"`)
            pub fn name(self) -> &'static str {
                match self {
                    $( SyntaxKind::$variant => $name, )+
                }
            }

            /// Named kinds are grammar rules and named tokens; anonymous kinds
            /// are literal strings such as `"["` or `"@r"`.
            pub fn is_named(self) -> bool {
                match self {
                    $( SyntaxKind::$variant => $named, )+
                }
            }

            /// Hidden kinds never show up in a rendered tree.
            pub fn is_visible(self) -> bool {
                match self {
                    $( SyntaxKind::$variant => $visible, )+
                }
            }
        }
    };
}

syntax_kinds! {
    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// End of input, never stored in a tree
    EOF => ("end", false, false),

    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE => ("whitespace", false, false),
    COMMENT => ("comment", true, true),

    // =========================================================================
    // NAMED TOKENS
    // =========================================================================
    /// `\n` or `\r\n`; separates statements
    NEWLINE => ("newline", true, true),
    IDENTIFIER => ("identifier", true, true),
    /// `` `name ``
    SYMBOL => ("symbol", true, true),
    INTEGER => ("integer", true, true),
    FLOAT => ("float", true, true),
    STRING => ("string", true, true),

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    TRUE_KW => ("true", false, true),
    FALSE_KW => ("false", false, true),
    /// `W[cond; body]`
    W_KW => ("W", false, true),
    /// `N[count; body]`
    N_KW => ("N", false, true),
    RETURN_KW => ("@r", false, true),
    BREAK_KW => ("@b", false, true),
    CONTINUE_KW => ("@c", false, true),
    ASSERT_KW => ("@a", false, true),

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    SEMICOLON => (";", false, true),
    COLON => (":", false, true),
    COMMA => (",", false, true),
    L_BRACKET => ("[", false, true),
    R_BRACKET => ("]", false, true),
    L_PAREN => ("(", false, true),
    R_PAREN => (")", false, true),
    L_BRACE => ("{", false, true),
    R_BRACE => ("}", false, true),
    PLUS => ("+", false, true),
    MINUS => ("-", false, true),
    STAR => ("*", false, true),
    SLASH => ("/", false, true),
    PERCENT => ("%", false, true),
    EQ_EQ => ("==", false, true),
    BANG_EQ => ("!=", false, true),
    LT => ("<", false, true),
    LT_EQ => ("<=", false, true),
    GT => (">", false, true),
    GT_EQ => (">=", false, true),
    HASH => ("#", false, true),
    DOLLAR => ("$", false, true),
    DOLLAR_DOT => ("$.", false, true),

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE => ("source_file", true, true),
    EXPRESSION => ("expression", true, true),
    ASSIGNMENT => ("assignment", true, true),
    ADDITIVE_EXPRESSION => ("additive_expression", true, true),
    COMPARISON_EXPRESSION => ("comparison_expression", true, true),
    MULTIPLICATIVE_EXPRESSION => ("multiplicative_expression", true, true),
    UNARY_EXPRESSION => ("unary_expression", true, true),
    POSTFIX_EXPRESSION => ("postfix_expression", true, true),
    CALL_SUFFIX => ("call_suffix", true, true),
    INDEX_SUFFIX => ("index_suffix", true, true),
    CALL_EXPRESSION => ("call_expression", true, true),
    INDEX_EXPRESSION => ("index_expression", true, true),
    CONDITIONAL_EXPRESSION => ("conditional_expression", true, true),
    CONDITIONAL_EXPRESSION_SHORT => ("conditional_expression_short", true, true),
    WHILE_LOOP => ("while_loop", true, true),
    FOR_LOOP => ("for_loop", true, true),
    BRANCH_SEQUENCE => ("branch_sequence", true, true),
    STATEMENT_LIST => ("statement_list", true, true),
    FUNCTION_DEFINITION => ("function_definition", true, true),
    PARAMETER_LIST => ("parameter_list", true, true),
    PARENTHESIZED_EXPRESSION => ("parenthesized_expression", true, true),
    EMPTY_LIST => ("empty_list", true, true),
    MULTI_LIST => ("multi_list", true, true),
    DICT => ("dict", true, true),
    PAIR => ("pair", true, true),
    LEADING_COMMA_LIST => ("leading_comma_list", true, true),
    LITERAL => ("literal", true, true),
    BOOLEAN => ("boolean", true, true),
    BREAK_STATEMENT => ("break_statement", true, true),
    CONTINUE_STATEMENT => ("continue_statement", true, true),
    ASSERT_STATEMENT => ("assert_statement", true, true),
    RETURN_STATEMENT => ("return_statement", true, true),

    // Lexer garbage and recovered spans
    ERROR => ("ERROR", true, true),
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Operators of the three binary levels
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            Self::PLUS
                | Self::MINUS
                | Self::STAR
                | Self::SLASH
                | Self::PERCENT
                | Self::EQ_EQ
                | Self::BANG_EQ
                | Self::LT
                | Self::LT_EQ
                | Self::GT
                | Self::GT_EQ
        )
    }

    /// Closing delimiters
    pub fn is_closing(self) -> bool {
        matches!(self, Self::R_BRACKET | Self::R_PAREN | Self::R_BRACE)
    }

    /// Look up a kind by its id
    pub fn from_id(id: u16) -> Option<SyntaxKind> {
        Self::ALL.get(id as usize).copied()
    }

    /// Name used in diagnostics: anonymous kinds are quoted, named kinds are not
    pub fn display_name(self) -> String {
        match self {
            Self::EOF => "end of input".to_string(),
            Self::NEWLINE => "newline".to_string(),
            k if k.is_named() => k.name().replace('_', " "),
            k => format!("'{}'", k.name()),
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SyntaxKind {
    type Err = LanguageError;

    /// Named kinds take precedence over anonymous ones with the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let visible = || Self::ALL.iter().copied().filter(|kind| kind.is_visible());
        visible()
            .find(|kind| kind.is_named() && kind.name() == s)
            .or_else(|| visible().find(|kind| kind.name() == s))
            .ok_or_else(|| LanguageError::UnknownKind(s.to_string()))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        // Trees are only ever built from our own kinds
        SyntaxKind::from_id(raw.0).unwrap_or(SyntaxKind::ERROR)
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WqLanguage {}

impl rowan::Language for WqLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<WqLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<WqLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<WqLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<WqLanguage>;
