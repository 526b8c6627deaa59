//! Core types for lint diagnostics.

use serde::{Deserialize, Serialize};

use crate::ast::NodeId;

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// An automatic code fix: replace one node's text.
///
/// The replacement must be a syntactically valid substitution for the whole
/// node it names. Overlapping fixes from different diagnostics are the
/// host's problem to serialize or reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    /// Node whose source text is replaced.
    pub node: NodeId,
    /// New text for the node.
    pub replacement: String,
}

impl Fix {
    /// Creates a new fix.
    #[must_use]
    pub fn new(node: NodeId, replacement: impl Into<String>) -> Self {
        Self {
            node,
            replacement: replacement.into(),
        }
    }
}

/// A lint diagnostic produced by a rule.
///
/// Anchors to a real node of the tree under analysis and is handed back to
/// the host for aggregation and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "CDK005").
    pub code: String,
    /// Rule name (e.g., "require-passing-this").
    pub rule: String,
    /// Stable message identifier (e.g., "requirePassingThis").
    pub message_id: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Node the diagnostic anchors to.
    pub node: NodeId,
    /// Human-readable message.
    pub message: String,
    /// Optional automatic fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Creates a new diagnostic without a fix.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        message_id: impl Into<String>,
        severity: Severity,
        node: NodeId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            message_id: message_id.into(),
            severity,
            node,
            message: message.into(),
            fix: None,
        }
    }

    /// Attaches an automatic fix.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{} {} at node {}\n", self.code, self.rule, self.node);
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(fix) = &self.fix {
            let _ = writeln!(output, "  = fix: replace node {} with `{}`", fix.node, fix.replacement);
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "node {}: {} [{}] {}",
            self.node, self.severity, self.code, self.message
        )
    }
}
