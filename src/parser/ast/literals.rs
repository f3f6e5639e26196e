use super::*;

// ============================================================================
// Literals
// ============================================================================

/// The decoded value of a literal
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    /// Contents with escapes resolved
    String(String),
    Boolean(bool),
    /// Symbol name without the leading backtick
    Symbol(SmolStr),
}

ast_node!(Literal, LITERAL);

impl Literal {
    /// The literal's own token (`true`/`false` sit under a `boolean` node)
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }

    pub fn is_boolean(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::BOOLEAN)
    }

    /// `None` if the integer does not fit in 64 bits
    pub fn value(&self) -> Option<LiteralValue> {
        let token = self.token()?;
        let text = token.text();
        match token.kind() {
            SyntaxKind::INTEGER => text.parse().ok().map(LiteralValue::Integer),
            SyntaxKind::FLOAT => text.parse().ok().map(LiteralValue::Float),
            SyntaxKind::STRING => Some(LiteralValue::String(unescape_string(text))),
            SyntaxKind::SYMBOL => Some(LiteralValue::Symbol(SmolStr::new(
                text.strip_prefix('`').unwrap_or(text),
            ))),
            SyntaxKind::TRUE_KW => Some(LiteralValue::Boolean(true)),
            SyntaxKind::FALSE_KW => Some(LiteralValue::Boolean(false)),
            _ => None,
        }
    }
}

/// Strip the quotes of a string literal and resolve its escapes.
///
/// `\n \t \r \\ \" \0` are recognised; any other escaped character stands
/// for itself.
pub fn unescape_string(text: &str) -> String {
    let inner = text.strip_prefix('"').unwrap_or(text);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

// ============================================================================
// Lists and dictionaries
// ============================================================================

ast_node!(ParenthesizedExpr, PARENTHESIZED_EXPRESSION);

impl ParenthesizedExpr {
    first_child_method!(inner, Expression);
}

ast_node!(EmptyList, EMPTY_LIST);

ast_node!(MultiList, MULTI_LIST);

impl MultiList {
    children_method!(items, Expression);

    /// `(x;)` is a one-element list
    pub fn has_trailing_separator(&self) -> bool {
        let last = self
            .0
            .children_with_tokens()
            .filter(|e| !e.kind().is_trivia() && e.kind() != SyntaxKind::R_PAREN)
            .last();
        matches!(
            last.map(|e| e.kind()),
            Some(SyntaxKind::SEMICOLON | SyntaxKind::NEWLINE)
        )
    }
}

ast_node!(Dict, DICT);

impl Dict {
    children_method!(pairs, Pair);

    /// Value stored under `key` (given without the backtick)
    pub fn get(&self, key: &str) -> Option<Expression> {
        self.pairs()
            .find(|pair| pair.key().as_deref() == Some(key))
            .and_then(|pair| pair.value())
    }
}

ast_node!(Pair, PAIR);

impl Pair {
    /// Key name without the backtick
    pub fn key(&self) -> Option<SmolStr> {
        let token = child_by_field(&self.0, Field::Key)?.into_token()?;
        let text = token.text();
        Some(SmolStr::new(text.strip_prefix('`').unwrap_or(text)))
    }

    field_method!(value, Value, Expression);
}
