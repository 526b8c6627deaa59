//! Context passed to rule execution.

use crate::ast::NodeId;
use crate::host::{Comment, Host};
use crate::type_info::TypeDescriptor;

/// Context provided to rules for a single file pass.
///
/// Wraps the host capabilities behind convenience forwarders. The context
/// holds no state of its own; every query goes straight back to the host,
/// so a rule invoked twice for the same node simply resolves twice.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    host: &'a dyn Host,
}

impl<'a> RuleContext<'a> {
    /// Creates a context over a host.
    #[must_use]
    pub fn new(host: &'a dyn Host) -> Self {
        Self { host }
    }

    /// Resolves the type at a syntax position.
    #[must_use]
    pub fn type_at(&self, node: NodeId) -> TypeDescriptor {
        self.host.type_at(node)
    }

    /// Returns the comment tokens immediately preceding a node.
    #[must_use]
    pub fn comments_before(&self, node: NodeId) -> Vec<Comment> {
        self.host.comments_before(node)
    }

    /// Returns the exact original source text of a node.
    #[must_use]
    pub fn source_text(&self, node: NodeId) -> String {
        self.host.source_text(node)
    }

    /// Returns true when a documentation comment immediately precedes the
    /// node.
    #[must_use]
    pub fn has_doc_comment(&self, node: NodeId) -> bool {
        self.comments_before(node).iter().any(Comment::is_doc)
    }
}
