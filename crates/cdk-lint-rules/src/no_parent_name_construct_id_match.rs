//! Rule to keep construct IDs from echoing the parent construct name.
//!
//! # Rationale
//!
//! Construct IDs are scoped to their parent, so an ID that repeats the
//! enclosing class name ("TestClassBucket" inside `TestClass`) only makes
//! synthesized paths longer without adding information. IDs and class names
//! are compared in a casing-normalized form, so `my-stack-bucket` still
//! matches `MyStack`.
//!
//! # Detected Patterns
//!
//! Construction expressions anywhere in a constructor or method body,
//! including inside nested `if` consequents and `switch` cases. The `else`
//! branch of an `if` statement is not examined.

use cdk_lint_core::ast::{ClassDecl, ClassMember, MethodKind, NewExpression, NodeId, SourceFile};
use cdk_lint_core::utils::{is_construct_or_stack_type, is_construct_type, to_pascal_case};
use cdk_lint_core::visit::{self, Visit};
use cdk_lint_core::{collect_construct_invocations, Diagnostic, Rule, RuleContext, Severity};
use tracing::trace;

/// Rule code for no-parent-name-construct-id-match.
pub const CODE: &str = "CDK003";

/// Rule name for no-parent-name-construct-id-match.
pub const NAME: &str = "no-parent-name-construct-id-match";

const MESSAGE_ID: &str = "noParentNameConstructIdMatch";

/// Disallows construct IDs that contain the parent construct name.
#[derive(Debug, Clone)]
pub struct NoParentNameConstructIdMatch {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoParentNameConstructIdMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl NoParentNameConstructIdMatch {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoParentNameConstructIdMatch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Disallows construct IDs that match the parent construct name"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
        let mut visitor = ParentNameVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_source_file(file);
        visitor.diagnostics
    }
}

struct ParentNameVisitor<'a> {
    ctx: &'a RuleContext<'a>,
    rule: &'a NoParentNameConstructIdMatch,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for ParentNameVisitor<'_> {
    fn visit_class_decl(&mut self, node: &'ast ClassDecl) {
        self.check_class(node);
        visit::visit_class_decl(self, node);
    }
}

impl ParentNameVisitor<'_> {
    fn check_class(&mut self, class: &ClassDecl) {
        let ty = self.ctx.type_at(class.body.id);
        if !is_construct_or_stack_type(&ty) {
            return;
        }

        let Some(parent_name) = class.name.as_deref() else {
            return;
        };

        for member in &class.body.members {
            let ClassMember::Method(method) = member else {
                continue;
            };
            if !matches!(method.kind, MethodKind::Constructor | MethodKind::Method) {
                continue;
            }
            for invocation in collect_construct_invocations(&method.body) {
                self.check_invocation(class.body.id, invocation, parent_name);
            }
        }
    }

    fn check_invocation(&mut self, anchor: NodeId, expr: &NewExpression, parent_name: &str) {
        if expr.arguments.len() < 2 {
            return;
        }

        // The second argument is the construct ID by convention.
        let Some(construct_id) = expr.arguments[1].as_string_literal() else {
            return;
        };

        let ty = self.ctx.type_at(expr.id);
        if !is_construct_type(&ty) {
            trace!(rule = NAME, callee = %expr.callee, "invoked type is not a construct, skipping");
            return;
        }

        let formatted_id = to_pascal_case(construct_id);
        let formatted_parent = to_pascal_case(parent_name);

        if formatted_id.contains(&formatted_parent) {
            self.diagnostics.push(Diagnostic::new(
                CODE,
                NAME,
                MESSAGE_ID,
                self.rule.severity,
                anchor,
                format!(
                    "Construct ID '{construct_id}' should not match parent construct name \
                     '{parent_name}'. Use a more specific identifier."
                ),
            ));
        }
    }
}
