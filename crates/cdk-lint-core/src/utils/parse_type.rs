//! Constructor signature extraction.

use crate::type_info::TypeDescriptor;

/// Returns the constructor parameter names of a type, in declaration order.
///
/// Unresolved types, unions, and types without an explicit constructor
/// yield an empty vector. Callers treat empty as "no convention to check",
/// never as an error.
#[must_use]
pub fn constructor_parameter_names(ty: &TypeDescriptor) -> Vec<String> {
    match ty {
        TypeDescriptor::Declared(declared) => declared.constructor_params.clone(),
        TypeDescriptor::Unknown | TypeDescriptor::Union(_) => Vec::new(),
    }
}
