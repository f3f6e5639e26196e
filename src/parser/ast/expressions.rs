use rowan::NodeOrToken;

use super::*;

// ============================================================================
// Source file and statements
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    /// Wrap the root of a parse; the parser always produces a source file
    pub fn new(root: SyntaxNode) -> Self {
        debug_assert_eq!(root.kind(), SyntaxKind::SOURCE_FILE);
        Self(root)
    }

    children_method!(statements, Statement);
}

/// A statement of a source file, function body or branch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Expression(Expression),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Assert(AssertStatement),
}

impl AstNode for Statement {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::EXPRESSION
                | SyntaxKind::RETURN_STATEMENT
                | SyntaxKind::BREAK_STATEMENT
                | SyntaxKind::CONTINUE_STATEMENT
                | SyntaxKind::ASSERT_STATEMENT
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::EXPRESSION => Some(Self::Expression(Expression(node))),
            SyntaxKind::RETURN_STATEMENT => Some(Self::Return(ReturnStatement(node))),
            SyntaxKind::BREAK_STATEMENT => Some(Self::Break(BreakStatement(node))),
            SyntaxKind::CONTINUE_STATEMENT => Some(Self::Continue(ContinueStatement(node))),
            SyntaxKind::ASSERT_STATEMENT => Some(Self::Assert(AssertStatement(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Expression(n) => n.syntax(),
            Self::Return(n) => n.syntax(),
            Self::Break(n) => n.syntax(),
            Self::Continue(n) => n.syntax(),
            Self::Assert(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Expression
// ============================================================================

ast_node!(Expression, EXPRESSION);

impl Expression {
    /// The expression wrapped by this node
    pub fn expr(&self) -> Option<Expr> {
        expr_children(&self.0).next()
    }
}

/// Identifier token, including `W`/`N` used as plain names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(SyntaxToken);

impl AstToken for Identifier {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::IDENTIFIER
    }

    fn cast(token: SyntaxToken) -> Option<Self> {
        Self::can_cast(token.kind()).then_some(Self(token))
    }

    fn syntax(&self) -> &SyntaxToken {
        &self.0
    }
}

impl Identifier {
    pub fn name(&self) -> SmolStr {
        SmolStr::new(self.0.text())
    }
}

/// Any expression form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Identifier(Identifier),
    Literal(Literal),
    Assignment(Assignment),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Postfix(PostfixExpr),
    Parenthesized(ParenthesizedExpr),
    EmptyList(EmptyList),
    MultiList(MultiList),
    Dict(Dict),
    Conditional(ConditionalExpr),
    ConditionalShort(ConditionalShort),
    While(WhileLoop),
    For(ForLoop),
    Function(FunctionDefinition),
    LeadingCommaList(LeadingCommaList),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::LITERAL => Self::Literal(Literal(node)),
            SyntaxKind::ASSIGNMENT => Self::Assignment(Assignment(node)),
            k if BinaryExpr::can_cast(k) => Self::Binary(BinaryExpr(node)),
            SyntaxKind::UNARY_EXPRESSION => Self::Unary(UnaryExpr(node)),
            SyntaxKind::CALL_EXPRESSION => Self::Call(CallExpr(node)),
            SyntaxKind::INDEX_EXPRESSION => Self::Index(IndexExpr(node)),
            SyntaxKind::POSTFIX_EXPRESSION => Self::Postfix(PostfixExpr(node)),
            SyntaxKind::PARENTHESIZED_EXPRESSION => Self::Parenthesized(ParenthesizedExpr(node)),
            SyntaxKind::EMPTY_LIST => Self::EmptyList(EmptyList(node)),
            SyntaxKind::MULTI_LIST => Self::MultiList(MultiList(node)),
            SyntaxKind::DICT => Self::Dict(Dict(node)),
            SyntaxKind::CONDITIONAL_EXPRESSION => Self::Conditional(ConditionalExpr(node)),
            SyntaxKind::CONDITIONAL_EXPRESSION_SHORT => {
                Self::ConditionalShort(ConditionalShort(node))
            }
            SyntaxKind::WHILE_LOOP => Self::While(WhileLoop(node)),
            SyntaxKind::FOR_LOOP => Self::For(ForLoop(node)),
            SyntaxKind::FUNCTION_DEFINITION => Self::Function(FunctionDefinition(node)),
            SyntaxKind::LEADING_COMMA_LIST => Self::LeadingCommaList(LeadingCommaList(node)),
            _ => return None,
        };
        Some(expr)
    }

    /// Cast a child element; identifiers are tokens, everything else a node
    pub fn cast_element(element: SyntaxElement) -> Option<Self> {
        match element {
            NodeOrToken::Node(node) => Self::cast(node),
            NodeOrToken::Token(token) => Identifier::cast(token).map(Self::Identifier),
        }
    }

    pub fn syntax(&self) -> SyntaxElement {
        let node = match self {
            Self::Identifier(ident) => return NodeOrToken::Token(ident.syntax().clone()),
            Self::Literal(n) => n.syntax(),
            Self::Assignment(n) => n.syntax(),
            Self::Binary(n) => n.syntax(),
            Self::Unary(n) => n.syntax(),
            Self::Call(n) => n.syntax(),
            Self::Index(n) => n.syntax(),
            Self::Postfix(n) => n.syntax(),
            Self::Parenthesized(n) => n.syntax(),
            Self::EmptyList(n) => n.syntax(),
            Self::MultiList(n) => n.syntax(),
            Self::Dict(n) => n.syntax(),
            Self::Conditional(n) => n.syntax(),
            Self::ConditionalShort(n) => n.syntax(),
            Self::While(n) => n.syntax(),
            Self::For(n) => n.syntax(),
            Self::Function(n) => n.syntax(),
            Self::LeadingCommaList(n) => n.syntax(),
        };
        NodeOrToken::Node(node.clone())
    }

    pub fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    pub fn text(&self) -> String {
        self.syntax().to_string()
    }

    /// Name of an identifier expression
    pub fn as_name(&self) -> Option<SmolStr> {
        match self {
            Self::Identifier(ident) => Some(ident.name()),
            _ => None,
        }
    }
}

// ============================================================================
// Assignment
// ============================================================================

ast_node!(Assignment, ASSIGNMENT);

impl Assignment {
    /// `x`, `x[i]`, or a chain ending in an index such as `m[i][j]`;
    /// anything else was reported as an invalid target
    pub fn target(&self) -> Option<Expr> {
        expr_field(&self.0, Field::Left)
    }

    field_method!(value, Right, Expression);
}

// ============================================================================
// Binary expressions
// ============================================================================

/// Binary operators, grouped by precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::PLUS => Self::Add,
            SyntaxKind::MINUS => Self::Sub,
            SyntaxKind::EQ_EQ => Self::Eq,
            SyntaxKind::BANG_EQ => Self::NotEq,
            SyntaxKind::LT => Self::Lt,
            SyntaxKind::LT_EQ => Self::LtEq,
            SyntaxKind::GT => Self::Gt,
            SyntaxKind::GT_EQ => Self::GtEq,
            SyntaxKind::STAR => Self::Mul,
            SyntaxKind::SLASH => Self::Div,
            SyntaxKind::PERCENT => Self::Mod,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// A flat, left-associative chain of one precedence level:
/// `a + b - c` is one node with operands `a b c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryExpr(pub(crate) SyntaxNode);

impl AstNode for BinaryExpr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::ADDITIVE_EXPRESSION
                | SyntaxKind::COMPARISON_EXPRESSION
                | SyntaxKind::MULTIPLICATIVE_EXPRESSION
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then(|| Self(node))
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        expr_field(&self.0, Field::Left)
    }

    /// Operators in source order
    pub fn operators(&self) -> Vec<BinaryOp> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter_map(|t| BinaryOp::from_kind(t.kind()))
            .collect()
    }

    /// Every operand after an operator, paired with that operator
    pub fn rhs(&self) -> Vec<(BinaryOp, Expr)> {
        let mut pairs = Vec::new();
        let mut pending = None;
        for element in self.0.children_with_tokens() {
            if let Some(op) = BinaryOp::from_kind(element.kind()) {
                pending = Some(op);
            } else if let Some(op) = pending {
                if let Some(expr) = Expr::cast_element(element) {
                    pairs.push((op, expr));
                    pending = None;
                }
            }
        }
        pairs
    }

    /// All operands, left to right
    pub fn operands(&self) -> Vec<Expr> {
        expr_children(&self.0).collect()
    }
}

// ============================================================================
// Unary expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-x`
    Negate,
    /// `#x`, the length of a list
    Count,
}

ast_node!(UnaryExpr, UNARY_EXPRESSION);

impl UnaryExpr {
    token_to_enum_method!(op, UnaryOp, [
        MINUS => Negate,
        HASH => Count,
    ]);

    pub fn operand(&self) -> Option<Expr> {
        expr_children(&self.0).next()
    }
}

// ============================================================================
// Calls and indexing
// ============================================================================

ast_node!(CallSuffix, CALL_SUFFIX);

impl CallSuffix {
    children_method!(arguments, Expression);
}

ast_node!(IndexSuffix, INDEX_SUFFIX);

impl IndexSuffix {
    children_method!(indices, Expression);
}

/// One bracket suffix of a postfix chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Suffix {
    Call(CallSuffix),
    Index(IndexSuffix),
}

impl AstNode for Suffix {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::CALL_SUFFIX | SyntaxKind::INDEX_SUFFIX)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::CALL_SUFFIX => Some(Self::Call(CallSuffix(node))),
            SyntaxKind::INDEX_SUFFIX => Some(Self::Index(IndexSuffix(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Call(n) => n.syntax(),
            Self::Index(n) => n.syntax(),
        }
    }
}

ast_node!(CallExpr, CALL_EXPRESSION);

impl CallExpr {
    pub fn function(&self) -> Option<Expr> {
        expr_field(&self.0, Field::Function)
    }

    first_child_method!(suffix, CallSuffix);

    pub fn arguments(&self) -> Vec<Expression> {
        self.suffix()
            .map(|suffix| suffix.arguments().collect())
            .unwrap_or_default()
    }
}

ast_node!(IndexExpr, INDEX_EXPRESSION);

impl IndexExpr {
    pub fn object(&self) -> Option<Expr> {
        expr_field(&self.0, Field::Object)
    }

    first_child_method!(suffix, IndexSuffix);

    pub fn indices(&self) -> Vec<Expression> {
        self.suffix()
            .map(|suffix| suffix.indices().collect())
            .unwrap_or_default()
    }
}

// Two or more suffixes on one operand, such as `m[i][j]` or `f[x;][0]`
ast_node!(PostfixExpr, POSTFIX_EXPRESSION);

impl PostfixExpr {
    pub fn object(&self) -> Option<Expr> {
        expr_field(&self.0, Field::Object)
    }

    children_method!(suffixes, Suffix);
}

// ============================================================================
// Leading comma list
// ============================================================================

ast_node!(LeadingCommaList, LEADING_COMMA_LIST);

impl LeadingCommaList {
    children_method!(items, Expression);
}
