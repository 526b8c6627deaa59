//! # cdk-lint-rules
//!
//! Built-in construct convention lint rules for cdk-lint.
//!
//! Each rule inspects the syntax tree model from `cdk-lint-core` and
//! resolves types through the host capability interface, so the whole set
//! runs against test doubles without a real analysis host.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CDK001 | `no-class-in-interface` | Disallows class types in interface properties |
//! | CDK002 | `no-mutable-public-property-of-construct` | Disallows mutable public properties of a construct |
//! | CDK003 | `no-parent-name-construct-id-match` | Disallows construct IDs that match the parent construct name |
//! | CDK004 | `require-jsdoc-props` | Requires JSDoc comments for interface and public construct properties |
//! | CDK005 | `require-passing-this` | Requires passing `this` in a construct instantiation |
//!
//! ## Usage
//!
//! ```ignore
//! use cdk_lint_core::RuleContext;
//! use cdk_lint_rules::recommended_rules;
//!
//! let ctx = RuleContext::new(&host);
//! for rule in recommended_rules() {
//!     diagnostics.extend(rule.check(&ctx, &file));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_class_in_interface;
mod no_mutable_public_property_of_construct;
mod no_parent_name_construct_id_match;
mod presets;
mod registry;
mod require_jsdoc_props;
mod require_passing_this;

#[cfg(test)]
mod test_util;

pub use no_class_in_interface::NoClassInInterface;
pub use no_mutable_public_property_of_construct::NoMutablePublicPropertyOfConstruct;
pub use no_parent_name_construct_id_match::NoParentNameConstructIdMatch;
pub use presets::{all_rules, recommended_rules, strict_rules, Preset};
pub use registry::{rule_by_name, RegistryError};
pub use require_jsdoc_props::RequireJsdocProps;
pub use require_passing_this::RequirePassingThis;

/// Re-export core types for convenience.
pub use cdk_lint_core::{Diagnostic, Rule, RuleContext, Severity};
