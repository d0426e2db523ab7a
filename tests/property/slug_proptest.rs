//! Property-based tests for slug derivation

use proptest::prelude::*;

use roomcast::backend::rooms::service::slugify;

proptest! {
    #[test]
    fn test_slug_alphabet_is_restricted(name in ".*") {
        let slug = slugify(&name);
        prop_assert!(slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'));
    }

    #[test]
    fn test_slug_never_starts_or_ends_with_a_dash(name in ".*") {
        let slug = slugify(&name);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_slug_has_no_double_dashes(name in ".*") {
        let slug = slugify(&name);
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slugify_is_idempotent(name in ".*") {
        let slug = slugify(&name);
        prop_assert_eq!(slugify(&slug), slug.clone());
    }

    #[test]
    fn test_alphanumeric_names_always_produce_a_slug(name in "[a-zA-Z0-9]{1,32}") {
        prop_assert!(!slugify(&name).is_empty());
    }
}
