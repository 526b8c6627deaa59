//! Rule to disallow mutable public properties on constructs.
//!
//! # Rationale
//!
//! A construct's public surface is read by sibling constructs after
//! synthesis wiring; reassigning it from outside breaks that wiring in
//! ways the type checker cannot see. The fix inserts the `readonly`
//! modifier, keeping an explicit `public` keyword when one was written.

use cdk_lint_core::ast::{
    Accessibility, ClassDecl, ClassMember, MemberKey, PropertyDefinition, SourceFile,
};
use cdk_lint_core::utils::is_construct_or_stack_type;
use cdk_lint_core::visit::{self, Visit};
use cdk_lint_core::{Diagnostic, Fix, Rule, RuleContext, Severity};

/// Rule code for no-mutable-public-property-of-construct.
pub const CODE: &str = "CDK002";

/// Rule name for no-mutable-public-property-of-construct.
pub const NAME: &str = "no-mutable-public-property-of-construct";

const MESSAGE_ID: &str = "invalidPublicPropertyOfConstruct";

/// Disallows mutable public properties of a construct.
#[derive(Debug, Clone)]
pub struct NoMutablePublicPropertyOfConstruct {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoMutablePublicPropertyOfConstruct {
    fn default() -> Self {
        Self::new()
    }
}

impl NoMutablePublicPropertyOfConstruct {
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

impl Rule for NoMutablePublicPropertyOfConstruct {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Disallows mutable public properties of a construct"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
        let mut visitor = MutablePropertyVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_source_file(file);
        visitor.diagnostics
    }
}

struct MutablePropertyVisitor<'a> {
    ctx: &'a RuleContext<'a>,
    rule: &'a NoMutablePublicPropertyOfConstruct,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for MutablePropertyVisitor<'_> {
    fn visit_class_decl(&mut self, node: &'ast ClassDecl) {
        let ty = self.ctx.type_at(node.id);
        if is_construct_or_stack_type(&ty) {
            for member in &node.body.members {
                let ClassMember::Property(property) = member else {
                    continue;
                };
                self.check_property(property);
            }
        }
        visit::visit_class_decl(self, node);
    }
}

impl MutablePropertyVisitor<'_> {
    fn check_property(&mut self, property: &PropertyDefinition) {
        let MemberKey::Identifier(name) = &property.key else {
            return;
        };

        if matches!(
            property.accessibility,
            Some(Accessibility::Private | Accessibility::Protected)
        ) {
            return;
        }

        if property.readonly {
            return;
        }

        let mut diagnostic = Diagnostic::new(
            CODE,
            NAME,
            MESSAGE_ID,
            self.rule.severity,
            property.id,
            format!(
                "Public property '{name}' should be readonly. \
                 Consider adding the 'readonly' modifier."
            ),
        );
        if let Some(fix) = readonly_fix(property, &self.ctx.source_text(property.id)) {
            diagnostic = diagnostic.with_fix(fix);
        }
        self.diagnostics.push(diagnostic);
    }
}

/// Rewrites a property's source text to insert `readonly` after any
/// explicit `public` keyword, without duplicating `public`.
///
/// The member text is split at its first `:` so typed properties keep their
/// annotation untouched. Returns `None` when the host has no annotated text
/// for the member; the diagnostic is then reported without a fix.
fn readonly_fix(property: &PropertyDefinition, source: &str) -> Option<Fix> {
    let (key, value) = source.split_once(':')?;
    let visibility = if property.accessibility.is_some() {
        "public "
    } else {
        ""
    };
    let key = key.strip_prefix("public ").unwrap_or(key);
    Some(Fix::new(
        property.id,
        format!("{visibility}readonly {key}:{value}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{class_file, construct_type, plain_class_type, stack_type, FakeHost};
    use cdk_lint_core::ast::NodeId;

    fn property(
        id: u32,
        name: &str,
        accessibility: Option<Accessibility>,
        readonly: bool,
    ) -> ClassMember {
        ClassMember::Property(PropertyDefinition {
            id: NodeId(id),
            key: MemberKey::Identifier(name.into()),
            accessibility,
            readonly,
            is_static: false,
        })
    }

    fn check(host: &FakeHost, file: &SourceFile) -> Vec<Diagnostic> {
        let ctx = RuleContext::new(host);
        NoMutablePublicPropertyOfConstruct::new().check(&ctx, file)
    }

    #[test]
    fn reports_explicit_public_mutable_property_with_fix() {
        let file = class_file(
            1,
            2,
            "Storage",
            vec![property(10, "name", Some(Accessibility::Public), false)],
        );
        let host = FakeHost::new()
            .with_type(NodeId(1), construct_type())
            .with_source(NodeId(10), "public name: string;");

        let diagnostics = check(&host, &file);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'name'"));
        let fix = diagnostics[0].fix.as_ref().expect("fix");
        assert_eq!(fix.replacement, "public readonly name: string;");
    }

    #[test]
    fn fix_on_implicit_visibility_omits_public() {
        let file = class_file(1, 2, "Storage", vec![property(10, "name", None, false)]);
        let host = FakeHost::new()
            .with_type(NodeId(1), construct_type())
            .with_source(NodeId(10), "name: string;");

        let diagnostics = check(&host, &file);
        let fix = diagnostics[0].fix.as_ref().expect("fix");
        assert_eq!(fix.replacement, "readonly name: string;");
    }

    #[test]
    fn private_and_protected_properties_are_skipped() {
        let file = class_file(
            1,
            2,
            "Storage",
            vec![
                property(10, "hidden", Some(Accessibility::Private), false),
                property(11, "inner", Some(Accessibility::Protected), false),
            ],
        );
        let host = FakeHost::new().with_type(NodeId(1), construct_type());
        assert!(check(&host, &file).is_empty());
    }

    #[test]
    fn readonly_property_is_skipped() {
        let file = class_file(
            1,
            2,
            "Storage",
            vec![property(10, "name", Some(Accessibility::Public), true)],
        );
        let host = FakeHost::new().with_type(NodeId(1), construct_type());
        assert!(check(&host, &file).is_empty());
    }

    #[test]
    fn applies_to_stack_classes_too() {
        let file = class_file(1, 2, "MyStack", vec![property(10, "name", None, false)]);
        let host = FakeHost::new()
            .with_type(NodeId(1), stack_type())
            .with_source(NodeId(10), "name: string;");
        assert_eq!(check(&host, &file).len(), 1);
    }

    #[test]
    fn non_construct_class_is_skipped() {
        let file = class_file(
            1,
            2,
            "Storage",
            vec![property(10, "name", Some(Accessibility::Public), false)],
        );
        let host = FakeHost::new().with_type(NodeId(1), plain_class_type("Storage"));
        assert!(check(&host, &file).is_empty());
    }

    #[test]
    fn missing_source_text_reports_without_fix() {
        let file = class_file(1, 2, "Storage", vec![property(10, "name", None, false)]);
        let host = FakeHost::new().with_type(NodeId(1), construct_type());

        let diagnostics = check(&host, &file);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fix.is_none());
    }

    #[test]
    fn annotation_with_nested_colons_survives_the_fix() {
        let file = class_file(1, 2, "Storage", vec![property(10, "handlers", None, false)]);
        let host = FakeHost::new()
            .with_type(NodeId(1), construct_type())
            .with_source(NodeId(10), "handlers: Map<string, () => void>;");

        let diagnostics = check(&host, &file);
        let fix = diagnostics[0].fix.as_ref().expect("fix");
        assert_eq!(fix.replacement, "readonly handlers: Map<string, () => void>;");
    }
}
