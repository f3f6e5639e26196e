use super::*;

// ============================================================================
// Conditionals and loops
// ============================================================================

ast_node!(BranchSequence, BRANCH_SEQUENCE);

impl BranchSequence {
    children_method!(statements, Statement);
}

// `$[cond; then; else]`
ast_node!(ConditionalExpr, CONDITIONAL_EXPRESSION);

impl ConditionalExpr {
    field_method!(condition, Condition, Expression);
    field_method!(true_branch, TrueBranch, BranchSequence);
    field_method!(false_branch, FalseBranch, BranchSequence);
}

// `$.[cond; then]`
ast_node!(ConditionalShort, CONDITIONAL_EXPRESSION_SHORT);

impl ConditionalShort {
    field_method!(condition, Condition, Expression);
    field_method!(true_branch, TrueBranch, BranchSequence);
}

ast_node!(WhileLoop, WHILE_LOOP);

impl WhileLoop {
    field_method!(condition, Condition, Expression);
    field_method!(body, Body, BranchSequence);
}

ast_node!(ForLoop, FOR_LOOP);

impl ForLoop {
    field_method!(count, Count, Expression);
    field_method!(body, Body, BranchSequence);
}

// ============================================================================
// Functions
// ============================================================================

ast_node!(FunctionDefinition, FUNCTION_DEFINITION);

impl FunctionDefinition {
    first_child_method!(parameter_list, ParameterList);
    first_child_method!(body, StatementList);

    /// Declared parameter names; empty when there is no `[...]`
    pub fn parameters(&self) -> Vec<SmolStr> {
        self.parameter_list()
            .map(|list| list.names())
            .unwrap_or_default()
    }
}

ast_node!(ParameterList, PARAMETER_LIST);

impl ParameterList {
    pub fn names(&self) -> Vec<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter_map(Identifier::cast)
            .map(|ident| ident.name())
            .collect()
    }
}

ast_node!(StatementList, STATEMENT_LIST);

impl StatementList {
    children_method!(statements, Statement);
}

// ============================================================================
// Control statements
// ============================================================================

ast_node!(ReturnStatement, RETURN_STATEMENT);

impl ReturnStatement {
    // `None` for a bare `@r`
    first_child_method!(value, Expression);
}

ast_node!(AssertStatement, ASSERT_STATEMENT);

impl AssertStatement {
    first_child_method!(expression, Expression);
}

ast_node!(BreakStatement, BREAK_STATEMENT);
ast_node!(ContinueStatement, CONTINUE_STATEMENT);
