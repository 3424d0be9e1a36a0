//! Ingredient name normalization.
//!
//! Comparison keys are lower-case ASCII letters and digits only, so
//! "Soy Sauce", "soy-sauce" and "SOY SAUCE!" all compare equal.

/// Canonical comparison key for an ingredient or pantry name.
///
/// Lower-cases the input and drops every character that is not an ASCII
/// letter or digit. Total: any input yields a (possibly empty) key.
#[must_use]
pub fn normalize_ingredient(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Bidirectional substring containment between two keys.
///
/// True when either key contains the other, so "garlic"
/// matches "garliccloves" and "tomato" matches "tomatosauce".
#[must_use]
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
