//! Classification of construct-like types.
//!
//! A type is construct-like when its own name or any name in its base-type
//! chain equals a recognized marker. The classification is exact: no
//! partial or fuzzy matching, and unresolved types never match.

use crate::type_info::{DeclaredType, TypeDescriptor};

const CONSTRUCT: &str = "Construct";
const STACK: &str = "Stack";

/// Returns true if the type is a construct type.
///
/// Unions are flattened and match if any member matches; the unresolved
/// sentinel never matches.
#[must_use]
pub fn is_construct_type(ty: &TypeDescriptor) -> bool {
    matches_any_marker(ty, &[CONSTRUCT])
}

/// Returns true if the type is a construct or stack type.
///
/// The broader category used by rules that also apply to root-level
/// constructs.
#[must_use]
pub fn is_construct_or_stack_type(ty: &TypeDescriptor) -> bool {
    matches_any_marker(ty, &[CONSTRUCT, STACK])
}

fn matches_any_marker(ty: &TypeDescriptor, markers: &[&str]) -> bool {
    ty.declared_types()
        .iter()
        .any(|declared| declared_matches(declared, markers))
}

fn declared_matches(declared: &DeclaredType, markers: &[&str]) -> bool {
    markers.contains(&declared.name.as_str())
        || declared
            .bases
            .iter()
            .any(|base| declared_matches(base, markers))
}
