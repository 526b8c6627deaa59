//! Rule to require passing `this` as the scope of a child construct.
//!
//! # Rationale
//!
//! Construct constructors take the parent scope as their first parameter.
//! Inside a construct, passing anything other than `this` re-parents the
//! child under some other construct, which silently changes the resource
//! tree. The fix replaces the offending argument with `this`.
//!
//! # Configuration
//!
//! - `check_non_scope`: also apply the check when the invoked constructor's
//!   first parameter is not named `scope` (default: false)

use cdk_lint_core::ast::{NewExpression, SourceFile};
use cdk_lint_core::utils::{constructor_parameter_names, is_construct_type};
use cdk_lint_core::visit::{self, Visit};
use cdk_lint_core::{Diagnostic, Fix, Rule, RuleContext, Severity};
use serde::Deserialize;
use tracing::trace;

use crate::registry::RegistryError;

/// Rule code for require-passing-this.
pub const CODE: &str = "CDK005";

/// Rule name for require-passing-this.
pub const NAME: &str = "require-passing-this";

const MESSAGE_ID: &str = "requirePassingThis";

/// Requires `this` as the first argument when instantiating a construct.
#[derive(Debug, Clone)]
pub struct RequirePassingThis {
    /// Custom severity.
    pub severity: Severity,
    /// Apply the check even when the first constructor parameter is not
    /// named `scope`.
    pub check_non_scope: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Options {
    #[serde(default)]
    check_non_scope: bool,
}

impl Default for RequirePassingThis {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirePassingThis {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            check_non_scope: false,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets whether to check constructors whose first parameter is not
    /// named `scope`.
    #[must_use]
    pub fn check_non_scope(mut self, check: bool) -> Self {
        self.check_non_scope = check;
        self
    }

    /// Builds the rule from a JSON options object, e.g.
    /// `{"checkNonScope": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidOptions`] when the value does not
    /// deserialize to the rule's options.
    pub fn from_options(value: &serde_json::Value) -> Result<Self, RegistryError> {
        let options: Options = serde_json::from_value(value.clone())
            .map_err(|source| RegistryError::InvalidOptions { rule: NAME, source })?;
        Ok(Self::new().check_non_scope(options.check_non_scope))
    }
}

impl Rule for RequirePassingThis {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires passing `this` in a construct instantiation"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
        let mut visitor = PassingThisVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_source_file(file);
        visitor.diagnostics
    }
}

struct PassingThisVisitor<'a> {
    ctx: &'a RuleContext<'a>,
    rule: &'a RequirePassingThis,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for PassingThisVisitor<'_> {
    fn visit_new_expression(&mut self, node: &'ast NewExpression) {
        self.check_invocation(node);
        visit::visit_new_expression(self, node);
    }
}

impl PassingThisVisitor<'_> {
    fn check_invocation(&mut self, node: &NewExpression) {
        let ty = self.ctx.type_at(node.id);
        if !is_construct_type(&ty) || node.arguments.is_empty() {
            return;
        }

        let argument = &node.arguments[0];
        if argument.is_this() {
            return;
        }

        if !self.rule.check_non_scope {
            let parameter_names = constructor_parameter_names(&ty);
            if parameter_names.first().map(String::as_str) != Some("scope") {
                trace!(
                    rule = NAME,
                    callee = %node.callee,
                    "first constructor parameter is not `scope`, skipping"
                );
                return;
            }
        }

        self.diagnostics.push(
            Diagnostic::new(
                CODE,
                NAME,
                MESSAGE_ID,
                self.rule.severity,
                node.id,
                "Require passing `this` in a constructor.",
            )
            .with_fix(Fix::new(argument.node_id(), "this")),
        );
    }
}
