//! Recursive descent parser for wq
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::errors::{ErrorCode, ParseContext, SyntaxError, format_context_error};
use super::grammar::{ExpressionParser, parse_statement_sequence};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Typed root of the tree
    pub fn tree(&self) -> super::ast::SourceFile {
        super::ast::SourceFile::new(self.syntax())
    }

    /// Check if parsing succeeded without errors (warnings are allowed)
    pub fn ok(&self) -> bool {
        !self.errors.iter().any(|e| e.severity.is_error())
    }

    /// Render the tree as a tree-sitter style S-expression
    pub fn sexp(&self) -> String {
        super::sexp::to_sexp(&self.syntax())
    }
}

/// Parse wq source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.report_lexical_errors();
    parser.parse_source_file();
    let parse = parser.finish();
    tracing::debug!(
        bytes = input.len(),
        tokens = tokens.len(),
        errors = parse.errors.len(),
        "parsed wq source"
    );
    parse
}

/// Deepest expression nesting the recursive descent will follow
pub const MAX_NESTING_DEPTH: usize = 128;

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    contexts: Vec<ParseContext>,
    depth: usize,
    /// Set once the nesting limit swallowed the rest of the input
    gave_up: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            contexts: Vec::new(),
            depth: 0,
            gave_up: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Index of the next non-trivia token
    fn significant_index(&self) -> usize {
        let mut idx = self.pos;
        while idx < self.tokens.len() && self.tokens[idx].kind.is_trivia() {
            idx += 1;
        }
        idx
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.significant_index())
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        // Look ahead, skipping trivia
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Attach pending trivia to the node that is currently open
    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_any(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Lexer garbage is reported up front so recovery can skip it silently
    fn report_lexical_errors(&mut self) {
        for token in self.tokens.iter().filter(|t| t.kind == SyntaxKind::ERROR) {
            let error = if token.text.starts_with('"') {
                SyntaxError::new("unterminated string literal", token.range(), ErrorCode::E0102)
                    .with_hint("close the string with '\"'")
            } else {
                SyntaxError::new(
                    format!("invalid character {:?}", token.text),
                    token.range(),
                    ErrorCode::E0101,
                )
            };
            self.errors.push(error);
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = sep* (Statement (sep+ Statement)*)? sep*
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        self.push_context(ParseContext::TopLevel);

        parse_statement_sequence(self, &[]);

        self.pop_context();
        // Trailing trivia belongs to the file
        self.skip_trivia();
        if self.pos < self.tokens.len() {
            self.error(ErrorCode::E0999, "parser stopped before end of input");
            self.builder.start_node(SyntaxKind::ERROR.into());
            while self.pos < self.tokens.len() {
                self.bump_any();
            }
            self.builder.finish_node();
        }
        self.builder.finish_node();
    }
}

impl ExpressionParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        match self.current() {
            Some(token) => token.range(),
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.range().end())
                    .unwrap_or_else(|| TextSize::new(0));
                TextRange::empty(end)
            }
        }
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.current().is_none()
    }

    fn peek_kind(&self, n: usize) -> SyntaxKind {
        self.nth(n)
    }

    fn get_pos(&self) -> usize {
        self.significant_index()
    }

    fn bump(&mut self) {
        self.bump_any();
    }

    fn bump_as(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn push_error(&mut self, error: SyntaxError) {
        // Unwinding out of the swallowed nesting only produces noise
        if !self.gave_up {
            self.errors.push(error);
        }
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or(ParseContext::TopLevel)
    }

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn error_recover(&mut self, code: ErrorCode, message: String, recovery: &[SyntaxKind]) {
        // Lexer garbage was already reported
        if self.current_kind() != SyntaxKind::ERROR {
            self.error(code, message);
        }
        tracing::trace!(
            kind = ?self.current_kind(),
            context = ?self.context(),
            "recovering from syntax error"
        );
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump_any();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump_any();
        }
        self.finish_node();
    }

    fn recover_unexpected(&mut self) {
        let context = self.context();
        let kind = self.current_kind();
        let code = if kind.is_closing() { ErrorCode::E0205 } else { ErrorCode::E0901 };
        let error = format_context_error(&kind.display_name(), context, code, self.current_range());
        if kind != SyntaxKind::ERROR {
            self.push_error(error);
        }
        // Consume exactly the offending token; a closing delimiter that does
        // not belong here must not swallow what follows it
        self.start_node(SyntaxKind::ERROR);
        self.bump_any();
        if !kind.is_closing() {
            while !self.at_eof()
                && !self.at_any(context.recovery_tokens())
                && !self.current_kind().is_closing()
            {
                self.bump_any();
            }
        }
        self.finish_node();
    }

    fn enter_nesting(&mut self) -> bool {
        if self.gave_up {
            return false;
        }
        if self.depth < MAX_NESTING_DEPTH {
            self.depth += 1;
            return true;
        }

        let message = format!("expression nested more than {MAX_NESTING_DEPTH} levels deep");
        self.error(ErrorCode::E0903, message);
        tracing::debug!(pos = self.pos, "nesting limit reached, skipping rest of input");
        self.gave_up = true;
        self.builder.start_node(SyntaxKind::ERROR.into());
        while self.pos < self.tokens.len() {
            self.bump_any();
        }
        self.builder.finish_node();
        false
    }

    fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
