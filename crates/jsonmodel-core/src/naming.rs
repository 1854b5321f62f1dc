//! Naming convention utilities for model file and namespace derivation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `snake_or-kebab` | [`to_pascal_case`] | `SnakeOrKebab` |
//! | `my-order.schema` | [`class_name`] | `MyOrder` |

/// Capitalize the first letter of a string, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Derive a model class name from an input file's base name.
///
/// Strips a trailing `.schema` token, then PascalCases the remainder:
/// `my-order.schema` becomes `MyOrder`.
pub fn class_name(base: &str) -> String {
    let base = base.strip_suffix(".schema").unwrap_or(base);
    to_pascal_case(base)
}
