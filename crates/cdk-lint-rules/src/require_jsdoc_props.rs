//! Rule to require JSDoc comments on interface and construct properties.
//!
//! # Rationale
//!
//! Interface properties and the public properties of a construct are the
//! documented contract consumers code against. A documentation comment is
//! a block comment whose content begins with `*`; line comments do not
//! count. No autofix: synthesizing documentation content is out of scope.

use cdk_lint_core::ast::{
    Accessibility, ClassDecl, ClassMember, MemberKey, NodeId, PropertySignature, SourceFile,
};
use cdk_lint_core::utils::is_construct_type;
use cdk_lint_core::visit::{self, Visit};
use cdk_lint_core::{Diagnostic, Rule, RuleContext, Severity};

/// Rule code for require-jsdoc-props.
pub const CODE: &str = "CDK004";

/// Rule name for require-jsdoc-props.
pub const NAME: &str = "require-jsdoc-props";

const MESSAGE_ID: &str = "missingJSDoc";

/// Requires JSDoc comments for properties in interfaces and public
/// properties in constructs.
#[derive(Debug, Clone)]
pub struct RequireJsdocProps {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RequireJsdocProps {
    fn default() -> Self {
        Self::new()
    }
}

impl RequireJsdocProps {
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

impl Rule for RequireJsdocProps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires JSDoc comments for interface properties and public construct properties"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
        let mut visitor = JsdocVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_source_file(file);
        visitor.diagnostics
    }
}

struct JsdocVisitor<'a> {
    ctx: &'a RuleContext<'a>,
    rule: &'a RequireJsdocProps,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for JsdocVisitor<'_> {
    fn visit_property_signature(&mut self, node: &'ast PropertySignature) {
        if let MemberKey::Identifier(name) = &node.key {
            self.require_doc(node.id, name);
        }
        visit::visit_property_signature(self, node);
    }

    fn visit_class_decl(&mut self, node: &'ast ClassDecl) {
        self.check_class(node);
        visit::visit_class_decl(self, node);
    }
}

impl JsdocVisitor<'_> {
    fn check_class(&mut self, class: &ClassDecl) {
        // Only classes that extend a construct base carry the convention.
        if class.extends.is_none() {
            return;
        }
        if !is_construct_type(&self.ctx.type_at(class.id)) {
            return;
        }

        for member in &class.body.members {
            let ClassMember::Property(property) = member else {
                continue;
            };
            let MemberKey::Identifier(name) = &property.key else {
                continue;
            };
            if property.accessibility != Some(Accessibility::Public) {
                continue;
            }
            self.require_doc(property.id, name);
        }
    }

    fn require_doc(&mut self, node: NodeId, name: &str) {
        if self.ctx.has_doc_comment(node) {
            return;
        }
        self.diagnostics.push(Diagnostic::new(
            CODE,
            NAME,
            MESSAGE_ID,
            self.rule.severity,
            node,
            format!("Property '{name}' should have a JSDoc comment."),
        ));
    }
}
