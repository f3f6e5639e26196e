//! Expression parsing for wq
//!
//! This module implements the expression grammar:
//!
//! ```text
//! Expression → Assignment | ConditionalExpression | ConditionalExpressionShort
//!     | WhileLoop | ForLoop | FunctionDefinition | LeadingCommaList
//!     | AdditiveExpression
//! AdditiveExpression → ComparisonExpression → MultiplicativeExpression
//!     → UnaryExpression → PostfixExpression → PrimaryExpression
//! ```
//!
//! Comparison binds tighter than addition, so `a + b == c` is
//! `a + (b == c)`. Each binary level is a flat, left-associative chain and
//! only gets its own node when an operator is present.

use rowan::{Checkpoint, TextRange};

use super::statements::{
    at_separator, at_statement_start, parse_statement, parse_statement_sequence,
};
use crate::parser::errors::{ErrorCode, ParseContext, Severity, SyntaxError};
use crate::parser::syntax_kind::SyntaxKind;

/// Trait for expression parsing operations
///
/// This trait defines the interface between the grammar functions and the
/// main parser. The main parser implements this trait to provide the
/// necessary infrastructure.
pub trait ExpressionParser {
    // Token inspection (trivia is always skipped)
    fn current_kind(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;
    fn at(&self, kind: SyntaxKind) -> bool;
    fn at_any(&self, kinds: &[SyntaxKind]) -> bool;
    fn at_eof(&self) -> bool;

    /// Peek at the kind of the nth token ahead (skipping trivia)
    fn peek_kind(&self, n: usize) -> SyntaxKind;

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);
    /// Consume the current token, storing it under a different kind
    fn bump_as(&mut self, kind: SyntaxKind);
    fn eat(&mut self, kind: SyntaxKind) -> bool;

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    // Error handling
    fn push_error(&mut self, error: SyntaxError);
    fn context(&self) -> ParseContext;
    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);
    /// Report an error and skip tokens into an ERROR node until one of
    /// `recovery` (always consuming at least one token)
    fn error_recover(&mut self, code: ErrorCode, message: String, recovery: &[SyntaxKind]);
    /// Skip a token that cannot start anything in the current context
    fn recover_unexpected(&mut self);

    /// Enter one level of expression nesting. Past the depth limit this
    /// reports E0903, swallows the rest of the input and returns false.
    fn enter_nesting(&mut self) -> bool;
    fn leave_nesting(&mut self);

    /// Report an error at the current token
    fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let range = self.current_range();
        self.push_error(SyntaxError::new(message, range, code));
    }
}

const ADDITIVE_OPERATORS: &[SyntaxKind] = &[SyntaxKind::PLUS, SyntaxKind::MINUS];

const COMPARISON_OPERATORS: &[SyntaxKind] = &[
    SyntaxKind::EQ_EQ,
    SyntaxKind::BANG_EQ,
    SyntaxKind::LT,
    SyntaxKind::LT_EQ,
    SyntaxKind::GT,
    SyntaxKind::GT_EQ,
];

const MULTIPLICATIVE_OPERATORS: &[SyntaxKind] =
    &[SyntaxKind::STAR, SyntaxKind::SLASH, SyntaxKind::PERCENT];

/// What an operand-level rule built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Operand {
    kind: SyntaxKind,
    /// Last bracket suffix of a postfix chain
    last_suffix: Option<SyntaxKind>,
}

impl Operand {
    fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            last_suffix: None,
        }
    }

    /// `x`, `x[i]`, and chains ending in an index such as `m[i][j]`
    fn is_assignable(self) -> bool {
        match self.kind {
            SyntaxKind::IDENTIFIER | SyntaxKind::INDEX_EXPRESSION => true,
            SyntaxKind::POSTFIX_EXPRESSION => self.last_suffix == Some(SyntaxKind::INDEX_SUFFIX),
            _ => false,
        }
    }
}

/// Tokens that can begin an expression
pub fn at_expression_start<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(&[
        SyntaxKind::IDENTIFIER,
        SyntaxKind::INTEGER,
        SyntaxKind::FLOAT,
        SyntaxKind::STRING,
        SyntaxKind::SYMBOL,
        SyntaxKind::TRUE_KW,
        SyntaxKind::FALSE_KW,
        SyntaxKind::W_KW,
        SyntaxKind::N_KW,
        SyntaxKind::L_PAREN,
        SyntaxKind::L_BRACE,
        SyntaxKind::DOLLAR,
        SyntaxKind::DOLLAR_DOT,
        SyntaxKind::COMMA,
        SyntaxKind::MINUS,
        SyntaxKind::HASH,
    ])
}

/// `W` and `N` only act as keywords in front of `[`
fn at_identifier<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::IDENTIFIER)
        || (p.at_any(&[SyntaxKind::W_KW, SyntaxKind::N_KW])
            && p.peek_kind(1) != SyntaxKind::L_BRACKET)
}

/// Parse an expression, returning true if any tokens were consumed
///
/// Entry point for all expressions; reports E0406 when nothing here can
/// start one.
pub fn parse_expression<P: ExpressionParser>(p: &mut P) -> bool {
    if !at_expression_start(p) {
        // Lexer garbage was already reported
        if !p.at(SyntaxKind::ERROR) {
            let found = p.current_kind().display_name();
            p.error(ErrorCode::E0406, format!("expected expression, found {found}"));
        }
        return false;
    }
    if !p.enter_nesting() {
        return false;
    }

    p.start_node(SyntaxKind::EXPRESSION);
    match p.current_kind() {
        SyntaxKind::DOLLAR => parse_conditional_expression(p),
        SyntaxKind::DOLLAR_DOT => parse_conditional_expression_short(p),
        SyntaxKind::W_KW if p.peek_kind(1) == SyntaxKind::L_BRACKET => {
            parse_loop(p, SyntaxKind::WHILE_LOOP)
        }
        SyntaxKind::N_KW if p.peek_kind(1) == SyntaxKind::L_BRACKET => {
            parse_loop(p, SyntaxKind::FOR_LOOP)
        }
        SyntaxKind::L_BRACE => parse_function_definition(p),
        SyntaxKind::COMMA => parse_leading_comma_list(p),
        _ => parse_assignment_or_operation(p),
    }
    p.finish_node();
    p.leave_nesting();
    true
}

/// Assignment = (Identifier | IndexExpression) ':' Expression
///
/// The target is parsed as an ordinary operand first and wrapped once the
/// `:` shows up; assignment is right-associative. An index expression may
/// sit at the end of a longer chain, as in `m[i][j]: 0`.
fn parse_assignment_or_operation<P: ExpressionParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    let target = parse_additive_expression(p);

    if !p.at(SyntaxKind::COLON) {
        return;
    }

    if !target.is_some_and(Operand::is_assignable) {
        let found = target
            .map(|operand| operand.kind.display_name())
            .unwrap_or_else(|| "nothing".to_string());
        let error = SyntaxError::new(
            format!("cannot assign to {found}"),
            p.current_range(),
            ErrorCode::E0302,
        )
        .with_hint("only names and indexed values like `x[i]` or `m[i][j]` can be assigned");
        p.push_error(error);
    }

    p.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT);
    p.bump(); // :
    parse_expression(p);
    p.finish_node();
}

/// Flat left-associative chain `operand (op operand)*`
///
/// Returns the kind of what was built: `kind` if an operator was present,
/// otherwise whatever the single operand produced.
fn parse_binary_chain<P: ExpressionParser>(
    p: &mut P,
    kind: SyntaxKind,
    operators: &[SyntaxKind],
    operand: fn(&mut P) -> Option<Operand>,
) -> Option<Operand> {
    let checkpoint = p.checkpoint();
    let first = operand(p);
    if first.is_none() || !p.at_any(operators) {
        return first;
    }

    p.start_node_at(checkpoint, kind);
    while p.at_any(operators) {
        p.bump(); // operator
        if operand(p).is_none() {
            let found = p.current_kind().display_name();
            p.error(
                ErrorCode::E0402,
                format!("expected operand after operator, found {found}"),
            );
            break;
        }
    }
    p.finish_node();
    Some(Operand::new(kind))
}

/// AdditiveExpression = ComparisonExpression (('+' | '-') ComparisonExpression)*
fn parse_additive_expression<P: ExpressionParser>(p: &mut P) -> Option<Operand> {
    parse_binary_chain(
        p,
        SyntaxKind::ADDITIVE_EXPRESSION,
        ADDITIVE_OPERATORS,
        parse_comparison_expression::<P>,
    )
}

/// ComparisonExpression = MultiplicativeExpression (CompOp MultiplicativeExpression)*
fn parse_comparison_expression<P: ExpressionParser>(p: &mut P) -> Option<Operand> {
    parse_binary_chain(
        p,
        SyntaxKind::COMPARISON_EXPRESSION,
        COMPARISON_OPERATORS,
        parse_multiplicative_expression::<P>,
    )
}

/// MultiplicativeExpression = UnaryExpression (('*' | '/' | '%') UnaryExpression)*
fn parse_multiplicative_expression<P: ExpressionParser>(p: &mut P) -> Option<Operand> {
    parse_binary_chain(
        p,
        SyntaxKind::MULTIPLICATIVE_EXPRESSION,
        MULTIPLICATIVE_OPERATORS,
        parse_unary_expression::<P>,
    )
}

/// UnaryExpression = ('-' | '#') UnaryExpression | PostfixExpression
fn parse_unary_expression<P: ExpressionParser>(p: &mut P) -> Option<Operand> {
    if !p.at_any(&[SyntaxKind::MINUS, SyntaxKind::HASH]) {
        return parse_postfix_expression(p);
    }

    p.start_node(SyntaxKind::UNARY_EXPRESSION);
    p.bump(); // - or #
    if p.enter_nesting() {
        if parse_unary_expression(p).is_none() {
            let found = p.current_kind().display_name();
            p.error(
                ErrorCode::E0402,
                format!("expected operand after unary operator, found {found}"),
            );
        }
        p.leave_nesting();
    }
    p.finish_node();
    Some(Operand::new(SyntaxKind::UNARY_EXPRESSION))
}

/// PostfixExpression = PrimaryExpression (CallSuffix | IndexSuffix)*
///
/// One suffix yields a call or index expression; longer chains stay flat
/// in a postfix expression.
fn parse_postfix_expression<P: ExpressionParser>(p: &mut P) -> Option<Operand> {
    let checkpoint = p.checkpoint();
    let primary = parse_primary_expression(p)?;

    let mut suffixes = Vec::new();
    while p.at(SyntaxKind::L_BRACKET) {
        suffixes.push(parse_bracket_suffix(p));
    }

    let kind = match suffixes.as_slice() {
        [] => return Some(Operand::new(primary)),
        [SyntaxKind::CALL_SUFFIX] => SyntaxKind::CALL_EXPRESSION,
        [_] => SyntaxKind::INDEX_EXPRESSION,
        _ => SyntaxKind::POSTFIX_EXPRESSION,
    };
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    Some(Operand {
        kind,
        last_suffix: suffixes.last().copied(),
    })
}

/// CallSuffix  = '[' (Expression (';' Expression)*)? ';' ']'
/// IndexSuffix = '[' Expression (';' Expression)* ']'
///
/// A `;` right before the closing bracket is what makes a call.
fn parse_bracket_suffix<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    let checkpoint = p.checkpoint();
    let open = p.current_range();
    p.bump(); // [
    p.push_context(ParseContext::ArgumentList);

    let mut trailing_semicolon = false;
    let mut count = 0;
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACKET) {
        if p.at(SyntaxKind::SEMICOLON) {
            // `[;]` calls with no arguments; any other `;` ends an argument
            let empty_call = count == 0 && p.peek_kind(1) == SyntaxKind::R_BRACKET;
            if !empty_call && (count == 0 || trailing_semicolon) {
                p.error(ErrorCode::E0406, "expected argument before ';'");
            }
            p.bump(); // ;
            trailing_semicolon = true;
            continue;
        }
        if !at_expression_start(p) {
            if p.current_kind().is_closing() {
                break;
            }
            p.recover_unexpected();
            continue;
        }

        parse_expression(p);
        count += 1;
        trailing_semicolon = false;
        if !p.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACKET])
            && !p.at_eof()
            && !p.current_kind().is_closing()
        {
            let found = p.current_kind().display_name();
            p.error_recover(
                ErrorCode::E0902,
                format!("expected ';' or ']' after argument, found {found}"),
                ParseContext::ArgumentList.recovery_tokens(),
            );
        }
    }

    let kind = if trailing_semicolon {
        SyntaxKind::CALL_SUFFIX
    } else {
        SyntaxKind::INDEX_SUFFIX
    };
    if kind == SyntaxKind::INDEX_SUFFIX && count == 0 {
        let error = SyntaxError::new("empty index", open, ErrorCode::E0403)
            .with_hint("a call without arguments is written `f[;]`");
        p.push_error(error);
    }

    finish_delimited(p, open, ErrorCode::E0204, "unclosed bracket");
    p.pop_context();
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    kind
}

/// PrimaryExpression = Identifier | Literal | ParenthesizedExpression
///     | EmptyList | MultiList | Dict
fn parse_primary_expression<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    match p.current_kind() {
        SyntaxKind::IDENTIFIER => {
            p.bump();
            Some(SyntaxKind::IDENTIFIER)
        }
        SyntaxKind::W_KW | SyntaxKind::N_KW => {
            p.bump_as(SyntaxKind::IDENTIFIER);
            Some(SyntaxKind::IDENTIFIER)
        }
        SyntaxKind::INTEGER => {
            if p.current_text().parse::<i64>().is_err() {
                let error = SyntaxError::new(
                    format!("integer literal {} does not fit in 64 bits", p.current_text()),
                    p.current_range(),
                    ErrorCode::E0104,
                )
                .with_severity(Severity::Warning);
                p.push_error(error);
            }
            parse_literal(p);
            Some(SyntaxKind::LITERAL)
        }
        SyntaxKind::FLOAT | SyntaxKind::STRING | SyntaxKind::SYMBOL => {
            parse_literal(p);
            Some(SyntaxKind::LITERAL)
        }
        SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => {
            p.start_node(SyntaxKind::LITERAL);
            p.start_node(SyntaxKind::BOOLEAN);
            p.bump();
            p.finish_node();
            p.finish_node();
            Some(SyntaxKind::LITERAL)
        }
        SyntaxKind::L_PAREN => Some(parse_paren_expression(p)),
        _ => None,
    }
}

fn parse_literal<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::LITERAL);
    p.bump();
    p.finish_node();
}

/// '(' ... ')' in all its forms:
///
/// ```text
/// EmptyList   = '(' ')'
/// Parenthesized = '(' Expression ')'
/// MultiList   = '(' Expression (sep Expression)+ sep? ')'
/// Dict        = '(' sep? Pair (sep Pair)* sep? ')'
/// ```
///
/// A trailing `;` turns a single item into a one-element list; a trailing
/// newline does not.
fn parse_paren_expression<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    let checkpoint = p.checkpoint();
    let open = p.current_range();
    p.bump(); // (
    p.push_context(ParseContext::List);

    let mut items = 0;
    let mut is_dict = false;
    let mut is_list = false;
    let mut separated = false;
    while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
        if at_separator(p) {
            if items > 0 {
                separated = true;
                is_list |= p.at(SyntaxKind::SEMICOLON);
            }
            p.bump();
            continue;
        }
        if !at_expression_start(p) {
            if p.current_kind().is_closing() {
                break;
            }
            p.recover_unexpected();
            continue;
        }

        if items == 0 {
            is_dict = p.at(SyntaxKind::SYMBOL) && p.peek_kind(1) == SyntaxKind::COLON;
        } else if separated {
            is_list = true;
        }

        if is_dict {
            parse_pair(p);
        } else {
            parse_expression(p);
        }
        items += 1;
        separated = false;

        if !at_separator(p)
            && !p.at(SyntaxKind::R_PAREN)
            && !p.at_eof()
            && !p.current_kind().is_closing()
        {
            let found = p.current_kind().display_name();
            p.error_recover(
                ErrorCode::E0201,
                format!("expected ';' or newline between list items, found {found}"),
                ParseContext::List.recovery_tokens(),
            );
        }
    }

    let kind = match (items, is_dict, is_list) {
        (0, _, _) => SyntaxKind::EMPTY_LIST,
        (_, true, _) => SyntaxKind::DICT,
        (1, false, false) => SyntaxKind::PARENTHESIZED_EXPRESSION,
        _ => SyntaxKind::MULTI_LIST,
    };

    finish_delimited(p, open, ErrorCode::E0203, "unclosed parenthesis");
    p.pop_context();
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    kind
}

/// Pair = Symbol ':' Expression
fn parse_pair<P: ExpressionParser>(p: &mut P) {
    if !(p.at(SyntaxKind::SYMBOL) && p.peek_kind(1) == SyntaxKind::COLON) {
        let found = p.current_kind().display_name();
        p.error_recover(
            ErrorCode::E0401,
            format!("expected `key: value pair in dictionary, found {found}"),
            ParseContext::List.recovery_tokens(),
        );
        return;
    }

    p.start_node(SyntaxKind::PAIR);
    p.bump(); // key
    p.bump(); // :
    parse_expression(p);
    p.finish_node();
}

/// ConditionalExpression = '$' '[' Expression ';' BranchSequence ';' BranchSequence ']'
fn parse_conditional_expression<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONDITIONAL_EXPRESSION);
    p.bump(); // $

    if let Some(open) = expect_open_bracket(p) {
        p.push_context(ParseContext::Branch);
        parse_expression(p); // condition
        if expect_branch_separator(p) {
            parse_branch_sequence(p, false); // true branch
            if expect_branch_separator(p) {
                parse_branch_sequence(p, true); // false branch
            }
        }
        finish_delimited(p, open, ErrorCode::E0204, "unclosed bracket");
        p.pop_context();
    }

    p.finish_node();
}

/// ConditionalExpressionShort = '$.' '[' Expression ';' BranchSequence ']'
fn parse_conditional_expression_short<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::CONDITIONAL_EXPRESSION_SHORT);
    p.bump(); // $.

    if let Some(open) = expect_open_bracket(p) {
        p.push_context(ParseContext::Branch);
        parse_expression(p); // condition
        if expect_branch_separator(p) {
            parse_branch_sequence(p, true);
        }
        finish_delimited(p, open, ErrorCode::E0204, "unclosed bracket");
        p.pop_context();
    }

    p.finish_node();
}

/// WhileLoop = 'W' '[' Expression ';' BranchSequence ']'
/// ForLoop   = 'N' '[' Expression ';' BranchSequence ']'
fn parse_loop<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump(); // W or N

    if let Some(open) = expect_open_bracket(p) {
        p.push_context(ParseContext::Branch);
        parse_expression(p); // condition or count
        if expect_branch_separator(p) {
            parse_branch_sequence(p, true); // body
        }
        finish_delimited(p, open, ErrorCode::E0204, "unclosed bracket");
        p.pop_context();
    }

    p.finish_node();
}

/// BranchSequence = Statement (sep Expression)*
///
/// Only the first item may be a control statement such as `@r x`. Within
/// a bracket `;` also separates branches, so only the last branch of a
/// form may continue across `;`; earlier branches continue across
/// newlines only.
fn parse_branch_sequence<P: ExpressionParser>(p: &mut P, last: bool) {
    p.start_node(SyntaxKind::BRANCH_SEQUENCE);

    if at_statement_start(p) {
        parse_statement(p);
    } else {
        let found = p.current_kind().display_name();
        p.error(ErrorCode::E0406, format!("expected branch expression, found {found}"));
    }

    while p.at(SyntaxKind::NEWLINE) || (last && p.at(SyntaxKind::SEMICOLON)) {
        p.bump(); // separator
        if at_expression_start(p) {
            parse_expression(p);
        } else if at_statement_start(p) {
            let found = p.current_kind().display_name();
            p.error_recover(
                ErrorCode::E0406,
                format!("expected expression, found {found}"),
                ParseContext::Branch.recovery_tokens(),
            );
        }
    }

    p.finish_node();
}

/// FunctionDefinition = '{' ParameterList? StatementList '}'
fn parse_function_definition<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUNCTION_DEFINITION);
    let open = p.current_range();
    p.bump(); // {

    if p.at(SyntaxKind::L_BRACKET) {
        parse_parameter_list(p);
    }

    p.push_context(ParseContext::FunctionBody);
    p.start_node(SyntaxKind::STATEMENT_LIST);
    let statements = parse_statement_sequence(p, &[SyntaxKind::R_BRACE]);
    p.finish_node();

    if statements == 0 {
        let error = SyntaxError::new(
            "function body has no statements",
            p.current_range(),
            ErrorCode::E0206,
        )
        .with_severity(Severity::Warning);
        p.push_error(error);
    }

    finish_delimited(p, open, ErrorCode::E0202, "unclosed brace");
    p.pop_context();
    p.finish_node();
}

/// ParameterList = '[' (Identifier (';' Identifier)*)? ']'
fn parse_parameter_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARAMETER_LIST);
    let open = p.current_range();
    p.bump(); // [
    p.push_context(ParseContext::ParameterList);

    if !p.at(SyntaxKind::R_BRACKET) {
        loop {
            if at_identifier(p) {
                p.bump_as(SyntaxKind::IDENTIFIER);
            } else {
                let found = p.current_kind().display_name();
                let message = format!("expected parameter name, found {found}");
                if p.at_eof() || p.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACKET]) {
                    p.error(ErrorCode::E0301, message);
                } else {
                    p.error_recover(
                        ErrorCode::E0301,
                        message,
                        ParseContext::ParameterList.recovery_tokens(),
                    );
                }
            }
            if !p.eat(SyntaxKind::SEMICOLON) {
                break;
            }
        }
    }

    finish_delimited(p, open, ErrorCode::E0204, "unclosed parameter list");
    p.pop_context();
    p.finish_node();
}

/// LeadingCommaList = ',' Expression (',' Expression)*
fn parse_leading_comma_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::LEADING_COMMA_LIST);
    p.push_context(ParseContext::Expression);

    while p.eat(SyntaxKind::COMMA) {
        parse_expression(p);
    }

    p.pop_context();
    p.finish_node();
}

// =========================================================================
// Delimiter helpers
// =========================================================================

fn expect_open_bracket<P: ExpressionParser>(p: &mut P) -> Option<TextRange> {
    if p.at(SyntaxKind::L_BRACKET) {
        let open = p.current_range();
        p.bump();
        Some(open)
    } else {
        let found = p.current_kind().display_name();
        p.error(ErrorCode::E0902, format!("expected '[', found {found}"));
        None
    }
}

fn expect_branch_separator<P: ExpressionParser>(p: &mut P) -> bool {
    if p.eat(SyntaxKind::SEMICOLON) {
        return true;
    }
    let found = p.current_kind().display_name();
    p.error(ErrorCode::E0902, format!("expected ';', found {found}"));
    false
}

/// Consume the closing delimiter of the current context, first skipping
/// anything that does not belong to the enclosing form; reports `code`
/// with an "opened here" note if it is missing.
fn finish_delimited<P: ExpressionParser>(
    p: &mut P,
    open: TextRange,
    code: ErrorCode,
    what: &str,
) {
    let context = p.context();
    // Only called with a bracketing context on top of the stack
    let Some(closing) = context.closing() else {
        return;
    };

    if !p.at(closing)
        && !p.at_eof()
        && !p.at(SyntaxKind::NEWLINE)
        && !p.current_kind().is_closing()
    {
        let found = p.current_kind().display_name();
        p.error_recover(
            ErrorCode::E0901,
            format!("unexpected {found} {}", context.description()),
            &[
                closing,
                SyntaxKind::NEWLINE,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACKET,
                SyntaxKind::R_BRACE,
            ],
        );
    }

    if !p.eat(closing) {
        let error = SyntaxError::builder(code)
            .message(format!("{what}: expected {}", closing.display_name()))
            .range(p.current_range())
            .related("opened here", open)
            .build();
        p.push_error(error);
    }
}
