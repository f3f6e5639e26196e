//! Statement parsing for wq
//!
//! ```text
//! Statement = ReturnStatement | BreakStatement | ContinueStatement
//!           | AssertStatement | Expression
//! StatementSequence = sep* (Statement (sep+ Statement)*)? sep*
//! ```
//!
//! Blank lines and doubled separators are accepted as empty statements.

use super::expressions::{ExpressionParser, at_expression_start, parse_expression};
use crate::parser::errors::ErrorCode;
use crate::parser::syntax_kind::SyntaxKind;

/// `;` or newline
pub fn at_separator<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::NEWLINE])
}

pub fn at_statement_start<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(&[
        SyntaxKind::RETURN_KW,
        SyntaxKind::BREAK_KW,
        SyntaxKind::CONTINUE_KW,
        SyntaxKind::ASSERT_KW,
    ]) || at_expression_start(p)
}

/// Parse one statement, returning true if any tokens were consumed
pub fn parse_statement<P: ExpressionParser>(p: &mut P) -> bool {
    match p.current_kind() {
        SyntaxKind::RETURN_KW => {
            p.start_node(SyntaxKind::RETURN_STATEMENT);
            p.bump(); // @r
            // A bare `@r` returns nothing
            if at_expression_start(p) {
                parse_expression(p);
            }
            p.finish_node();
            true
        }
        SyntaxKind::BREAK_KW => {
            p.start_node(SyntaxKind::BREAK_STATEMENT);
            p.bump();
            p.finish_node();
            true
        }
        SyntaxKind::CONTINUE_KW => {
            p.start_node(SyntaxKind::CONTINUE_STATEMENT);
            p.bump();
            p.finish_node();
            true
        }
        SyntaxKind::ASSERT_KW => {
            p.start_node(SyntaxKind::ASSERT_STATEMENT);
            p.bump(); // @a
            parse_expression(p);
            p.finish_node();
            true
        }
        _ => parse_expression(p),
    }
}

/// Parse separator-delimited statements until end of input or one of
/// `terminators`, which is left unconsumed. Returns the statement count.
pub fn parse_statement_sequence<P: ExpressionParser>(
    p: &mut P,
    terminators: &[SyntaxKind],
) -> usize {
    let mut count = 0;

    while !p.at_eof() && !p.at_any(terminators) {
        if at_separator(p) {
            p.bump();
            continue;
        }
        if !at_statement_start(p) {
            p.recover_unexpected();
            continue;
        }

        let pos_before = p.get_pos();
        parse_statement(p);
        count += 1;
        // Safety: if we didn't make progress, force-skip a token
        if p.get_pos() == pos_before {
            p.recover_unexpected();
            continue;
        }

        // Stray closing delimiters are reported by the loop itself
        if !at_separator(p)
            && !p.at_eof()
            && !p.at_any(terminators)
            && !p.current_kind().is_closing()
        {
            let context = p.context();
            let found = p.current_kind().display_name();
            p.error_recover(
                ErrorCode::E0201,
                format!("expected ';' or newline after statement, found {found}"),
                context.recovery_tokens(),
            );
        }
    }

    count
}
