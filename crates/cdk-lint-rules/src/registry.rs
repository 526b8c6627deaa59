//! Name-based rule construction.
//!
//! Maps the kebab-case rule names a configuration names to configured rule
//! boxes. Options arrive as JSON values; rules that take none reject
//! anything but an absent, null, or empty-object value.

use cdk_lint_core::RuleBox;
use serde_json::Value;
use tracing::debug;

use crate::no_class_in_interface::{self, NoClassInInterface};
use crate::no_mutable_public_property_of_construct::{self, NoMutablePublicPropertyOfConstruct};
use crate::no_parent_name_construct_id_match::{self, NoParentNameConstructIdMatch};
use crate::require_jsdoc_props::{self, RequireJsdocProps};
use crate::require_passing_this::{self, RequirePassingThis};

/// Error building a rule from its configured name and options.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The rule name is not known.
    #[error("unknown rule `{name}`")]
    UnknownRule {
        /// The unrecognized name.
        name: String,
    },
    /// The options value does not deserialize to the rule's options.
    #[error("invalid options for rule `{rule}`")]
    InvalidOptions {
        /// The rule the options were meant for.
        rule: &'static str,
        /// The deserialization failure.
        #[source]
        source: serde_json::Error,
    },
    /// Options were supplied to a rule that takes none.
    #[error("rule `{rule}` takes no options")]
    UnexpectedOptions {
        /// The rule the options were meant for.
        rule: &'static str,
    },
}

/// Builds a configured rule from its kebab-case name.
///
/// # Errors
///
/// Returns [`RegistryError`] when the name is unknown, when options are
/// supplied to a rule that takes none, or when the options value does not
/// deserialize.
pub fn rule_by_name(name: &str, options: Option<&Value>) -> Result<RuleBox, RegistryError> {
    debug!(rule = name, configured = options.is_some(), "building rule");
    match name {
        no_class_in_interface::NAME => {
            reject_options(no_class_in_interface::NAME, options)?;
            Ok(Box::new(NoClassInInterface::new()))
        }
        no_mutable_public_property_of_construct::NAME => {
            reject_options(no_mutable_public_property_of_construct::NAME, options)?;
            Ok(Box::new(NoMutablePublicPropertyOfConstruct::new()))
        }
        no_parent_name_construct_id_match::NAME => {
            reject_options(no_parent_name_construct_id_match::NAME, options)?;
            Ok(Box::new(NoParentNameConstructIdMatch::new()))
        }
        require_jsdoc_props::NAME => {
            reject_options(require_jsdoc_props::NAME, options)?;
            Ok(Box::new(RequireJsdocProps::new()))
        }
        require_passing_this::NAME => match supplied(options) {
            Some(value) => Ok(Box::new(RequirePassingThis::from_options(value)?)),
            None => Ok(Box::new(RequirePassingThis::new())),
        },
        _ => Err(RegistryError::UnknownRule {
            name: name.to_string(),
        }),
    }
}

fn supplied(options: Option<&Value>) -> Option<&Value> {
    options.filter(|value| !value.is_null())
}

fn reject_options(rule: &'static str, options: Option<&Value>) -> Result<(), RegistryError> {
    match supplied(options) {
        Some(Value::Object(map)) if map.is_empty() => Ok(()),
        Some(_) => Err(RegistryError::UnexpectedOptions { rule }),
        None => Ok(()),
    }
}
