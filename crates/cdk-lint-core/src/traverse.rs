//! Recursive statement traversal for constructor bodies.
//!
//! Finds every construction expression reachable from a method or
//! constructor body through straight-line and branching control flow:
//! blocks, `if` consequents, and `switch` cases, nested to any depth.
//! Nested function and class bodies are never entered (they are not
//! representable inside [`Statement`]).
//!
//! Two reproduced behaviors of the convention this traversal models, kept
//! on purpose and pinned by tests:
//!
//! - the `else` branch of an `if` statement is not examined;
//! - only the first declarator of a multi-declarator variable statement is
//!   inspected.
//!
//! Rules that need every construction expression regardless of position use
//! the full traversal in [`crate::visit`] instead.

use tracing::trace;

use crate::ast::{Expression, NewExpression, Statement};

/// Collects construction expressions reachable from a body, in source order.
///
/// No deduplication is performed; each invocation appears exactly as often
/// as the traversal reaches it. Termination is guaranteed because every
/// recursive call strictly descends into a child node of a finite tree.
#[must_use]
pub fn collect_construct_invocations(body: &[Statement]) -> Vec<&NewExpression> {
    let mut found = Vec::new();
    for statement in body {
        collect_from_statement(statement, &mut found);
    }
    found
}

fn collect_from_statement<'a>(statement: &'a Statement, found: &mut Vec<&'a NewExpression>) {
    match statement {
        Statement::Block(block) => {
            for member in &block.statements {
                collect_from_statement(member, found);
            }
        }
        Statement::Expr(stmt) => {
            if let Expression::New(expr) = &stmt.expression {
                trace!(callee = %expr.callee, "construction expression in expression statement");
                found.push(expr);
            }
        }
        Statement::VarDecl(decl) => {
            // Only the first declarator is inspected.
            if let Some(Expression::New(expr)) = decl.declarators.first().and_then(|d| d.init.as_ref())
            {
                trace!(callee = %expr.callee, "construction expression in variable initializer");
                found.push(expr);
            }
        }
        // The else branch is intentionally not examined.
        Statement::If(stmt) => collect_from_statement(&stmt.consequent, found),
        Statement::Switch(stmt) => {
            // Case guards are irrelevant; fallthrough bodies are all visited.
            for case in &stmt.cases {
                for member in &case.body {
                    collect_from_statement(member, found);
                }
            }
        }
        Statement::Return(_) | Statement::Other(_) => {}
    }
}
