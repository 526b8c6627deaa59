//! Rule to disallow class types in interface properties.
//!
//! # Rationale
//!
//! Interfaces describe data contracts; a property typed as a declared
//! class couples the contract to a concrete implementation and its
//! constructor. Structural aliases and interfaces stay valid.

use cdk_lint_core::ast::{MemberKey, PropertySignature, SourceFile};
use cdk_lint_core::visit::{self, Visit};
use cdk_lint_core::{Diagnostic, Rule, RuleContext, Severity, TypeKind};
use tracing::trace;

/// Rule code for no-class-in-interface.
pub const CODE: &str = "CDK001";

/// Rule name for no-class-in-interface.
pub const NAME: &str = "no-class-in-interface";

const MESSAGE_ID: &str = "noClassInInterfaceProps";

/// Disallows interface properties typed as a declared class.
#[derive(Debug, Clone)]
pub struct NoClassInInterface {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoClassInInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl NoClassInInterface {
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

impl Rule for NoClassInInterface {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Disallows class types in interface properties"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
        let mut visitor = ClassInInterfaceVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_source_file(file);
        visitor.diagnostics
    }
}

struct ClassInInterfaceVisitor<'a> {
    ctx: &'a RuleContext<'a>,
    rule: &'a NoClassInInterface,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for ClassInInterfaceVisitor<'_> {
    fn visit_property_signature(&mut self, node: &'ast PropertySignature) {
        self.check_signature(node);
        visit::visit_property_signature(self, node);
    }
}

impl ClassInInterfaceVisitor<'_> {
    fn check_signature(&mut self, node: &PropertySignature) {
        let MemberKey::Identifier(name) = &node.key else {
            return;
        };

        let ty = self.ctx.type_at(node.id);
        let is_class = ty
            .declared_types()
            .iter()
            .any(|declared| declared.kind == TypeKind::Class);
        if !is_class {
            trace!(rule = NAME, property = %name, "property type is not a declared class");
            return;
        }

        self.diagnostics.push(Diagnostic::new(
            CODE,
            NAME,
            MESSAGE_ID,
            self.rule.severity,
            node.id,
            format!(
                "Property '{name}' should not use a class type. \
                 Consider using an interface or type alias instead."
            ),
        ));
    }
}
