//! # cdk-lint-core
//!
//! Core framework for linting infrastructure-as-code construct conventions.
//!
//! This crate provides the foundational types for building construct
//! convention lint rules on top of a host analysis engine:
//!
//! - [`ast`] - closed sum-type model of the syntax tree under analysis
//! - [`Host`] - the narrow capability interface onto the host engine
//! - [`Rule`] - trait implemented by every lint rule
//! - [`Diagnostic`] - a lint finding, optionally carrying a [`Fix`]
//! - [`collect_construct_invocations`] - recursive constructor body traversal
//! - [`visit`] - full-tree visitor in the `syn::visit` style
//!
//! The host engine, type checker, and configuration loader are external
//! collaborators: rules only reach them through [`Host`], so unit tests run
//! against hash-map-backed doubles.
//!
//! ## Example
//!
//! ```ignore
//! use cdk_lint_core::{Rule, RuleContext};
//!
//! let ctx = RuleContext::new(&host);
//! for rule in rules {
//!     diagnostics.extend(rule.check(&ctx, &file));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod context;
mod host;
mod rule;
mod traverse;
mod type_info;
mod types;
pub mod visit;

/// Utility modules for rule implementations.
pub mod utils;

pub use ast::NodeId;
pub use context::RuleContext;
pub use host::{Comment, CommentKind, Host};
pub use rule::{Rule, RuleBox};
pub use traverse::collect_construct_invocations;
pub use type_info::{DeclaredType, TypeDescriptor, TypeKind};
pub use types::{Diagnostic, Fix, Severity};
