//! Selection among `zero | one | many` message variants.

use crate::path;
use crate::tree::Namespace;

/// Separator between the variants of a pluralizable message.
pub const VARIANT_SEPARATOR: char = '|';

fn variant_index(quantity: f64) -> usize {
    if quantity == 0.0 {
        0
    } else if quantity.abs() == 1.0 {
        1
    } else {
        2
    }
}

/// Picks the variant of `message` matching `quantity`.
///
/// `0` selects the first variant, `1` and `-1` the second, anything else the
/// third. Messages with fewer variants clamp to the last one they have, so a
/// message without any separator is returned (trimmed) for every quantity.
pub fn select_variant(message: &str, quantity: f64) -> &str {
    let wanted = variant_index(quantity);

    message
        .split(VARIANT_SEPARATOR)
        .map(str::trim)
        .take(wanted + 1)
        .last()
        .unwrap_or(message)
}

/// Resolves `key` in `root` and selects the variant for `quantity`.
///
/// Returns `key` itself when it does not resolve to a message.
pub fn pluralize<'a>(root: &'a Namespace, key: &'a str, quantity: f64) -> &'a str {
    match path::resolve(root, key) {
        Some(message) => select_variant(message, quantity),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::namespace_from_value;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0.0, "Zero")]
    #[case(-0.0, "Zero")]
    #[case(1.0, "Um")]
    #[case(-1.0, "Um")]
    #[case(-1000.0, "Muito!")]
    #[case(2.0, "Muito!")]
    #[case(100.0, "Muito!")]
    #[case(0.5, "Muito!")]
    #[case(f64::NAN, "Muito!")]
    fn three_variants(#[case] quantity: f64, #[case] expected: &str) {
        assert_eq!(select_variant("Zero | Um | Muito!", quantity), expected);
    }

    #[rstest]
    #[case(0.0, "item")]
    #[case(1.0, "items")]
    #[case(5.0, "items")]
    fn two_variants_clamp_to_last(#[case] quantity: f64, #[case] expected: &str) {
        assert_eq!(select_variant("item | items", quantity), expected);
    }

    #[test]
    fn single_variant_is_always_used() {
        assert_eq!(select_variant("  only  ", 0.0), "only");
        assert_eq!(select_variant("  only  ", 7.0), "only");
    }

    #[test]
    fn extra_variants_are_ignored() {
        assert_eq!(select_variant("a|b|c|d", 42.0), "c");
    }

    #[test]
    fn pluralize_falls_back_to_key() {
        let root = namespace_from_value(json!({
            "pluralization": "Zero | Um | Muito!",
            "nested": { "n": "none|one|many" }
        }))
        .unwrap();

        assert_eq!(pluralize(&root, "pluralization", 1.0), "Um");
        assert_eq!(pluralize(&root, "nested.n", 3.0), "many");
        assert_eq!(pluralize(&root, "missing", 1.0), "missing");
        assert_eq!(pluralize(&root, "nested", 1.0), "nested");
    }
}
