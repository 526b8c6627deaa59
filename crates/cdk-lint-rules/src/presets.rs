//! Rule presets for common configurations.

use cdk_lint_core::RuleBox;

use crate::{
    NoClassInInterface, NoMutablePublicPropertyOfConstruct, NoParentNameConstructIdMatch,
    RequireJsdocProps, RequirePassingThis,
};

/// Preset configurations for cdk-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules for maximum convention coverage.
    Strict,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
        }
    }
}

/// Returns the recommended set of rules: every rule with its defaults.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoClassInInterface::new()),
        Box::new(NoMutablePublicPropertyOfConstruct::new()),
        Box::new(NoParentNameConstructIdMatch::new()),
        Box::new(RequireJsdocProps::new()),
        Box::new(RequirePassingThis::new()),
    ]
}

/// Returns the strict set of rules.
///
/// Same rules as [`recommended_rules`], with `require-passing-this` also
/// checking constructors whose first parameter is not named `scope`.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoClassInInterface::new()),
        Box::new(NoMutablePublicPropertyOfConstruct::new()),
        Box::new(NoParentNameConstructIdMatch::new()),
        Box::new(RequireJsdocProps::new()),
        Box::new(RequirePassingThis::new().check_non_scope(true)),
    ]
}

/// Returns all available rules with their defaults.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
