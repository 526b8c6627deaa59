//! Rule trait for defining construct convention lint rules.

use crate::ast::SourceFile;
use crate::context::RuleContext;
use crate::types::{Diagnostic, Severity};

/// A per-file lint rule over the construct syntax tree model.
///
/// Implement this trait to create rules that analyze individual source
/// files. Rules receive the tree and a [`RuleContext`] carrying the host
/// capabilities, and return their diagnostics for the host to aggregate.
/// Rules are stateless across invocations; configuration lives in the rule
/// struct itself.
///
/// # Example
///
/// ```ignore
/// use cdk_lint_core::{Diagnostic, Rule, RuleContext, Severity};
/// use cdk_lint_core::ast::SourceFile;
///
/// pub struct NoAnonymousConstructs;
///
/// impl Rule for NoAnonymousConstructs {
///     fn name(&self) -> &'static str { "no-anonymous-constructs" }
///     fn code(&self) -> &'static str { "CDK900" }
///
///     fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic> {
///         let mut visitor = AnonymousVisitor::new(ctx);
///         visitor.visit_source_file(file);
///         visitor.diagnostics
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "require-passing-this").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CDK005").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Host capabilities for the file being checked
    /// * `file` - The syntax tree of the file
    fn check(&self, ctx: &RuleContext<'_>, file: &SourceFile) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
