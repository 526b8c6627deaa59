//! Capability interface onto the host engine.
//!
//! Everything the rules need from the surrounding analysis host goes
//! through the [`Host`] trait: type resolution, preceding comments, and
//! exact source text. Implementations are synchronous and may be called
//! many times for the same node; any caching is the host's business. Test
//! doubles implement the trait over hash maps, no real host required.

use crate::ast::NodeId;
use crate::type_info::TypeDescriptor;

/// The kind of a source comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// A `//` line comment.
    Line,
    /// A `/* */` block comment.
    Block,
}

/// A comment token preceding a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Line or block.
    pub kind: CommentKind,
    /// Comment text without the delimiters.
    pub text: String,
}

impl Comment {
    /// Creates a line comment.
    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Line,
            text: text.into(),
        }
    }

    /// Creates a block comment.
    #[must_use]
    pub fn block(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Block,
            text: text.into(),
        }
    }

    /// Returns true if this is a documentation comment: a block comment
    /// whose content begins with `*`.
    #[must_use]
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Block && self.text.starts_with('*')
    }
}

/// Narrow capability interface the rules require from their host.
pub trait Host {
    /// Resolves the type at a syntax position.
    ///
    /// Returns [`TypeDescriptor::Unknown`] for unresolved or `any`-like
    /// positions; rules treat that as a non-match, never an error.
    fn type_at(&self, node: NodeId) -> TypeDescriptor;

    /// Returns the comment tokens immediately preceding a node, in source
    /// order.
    fn comments_before(&self, node: NodeId) -> Vec<Comment>;

    /// Returns the exact original source text of a node.
    ///
    /// Empty when the host has no text for the node.
    fn source_text(&self, node: NodeId) -> String;
}
