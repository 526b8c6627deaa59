//! Identifier casing normalization.

/// Converts an identifier written in any common casing convention into a
/// Pascal-like canonical form for convention-independent comparison.
///
/// Any run of non-alphanumeric characters is a word boundary; the first
/// alphanumeric character of each word is upper-cased and interior
/// characters keep their case. Deterministic, locale-independent, and
/// idempotent.
///
/// # Examples
///
/// ```
/// use cdk_lint_core::utils::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my-bucket"), "MyBucket");
/// assert_eq!(to_pascal_case("my_bucket"), "MyBucket");
/// assert_eq!(to_pascal_case("myBucket"), "MyBucket");
/// assert_eq!(to_pascal_case("MyBucket"), "MyBucket");
/// ```
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_boundary = true;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if at_boundary {
                output.extend(ch.to_uppercase());
            } else {
                output.push(ch);
            }
            at_boundary = false;
        } else {
            at_boundary = true;
        }
    }
    output
}
