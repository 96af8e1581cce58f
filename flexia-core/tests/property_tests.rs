//! Property tests for inflection invariants

use flexia_core::{inflect, pluralize, render_price_long, singularize, slug, Plurality};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_uses_only_lowercase_ascii_and_separator(text in "\\PC{0,40}") {
        let result = slug(&text);
        prop_assert!(!result.is_empty());
        prop_assert!(!result.contains("--"));
        prop_assert!(result
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn slug_of_ascii_words_has_clean_edges(text in "[a-il-z0-9]{1,8}( [a-il-z0-9]{1,8}){0,4}") {
        let result = slug(&text);
        prop_assert!(!result.starts_with('-') && !result.ends_with('-'));
        prop_assert_eq!(result, text.replace(' ', "-"));
    }

    #[test]
    fn teens_always_take_many_form(hundreds in 0u64..1_000_000, teen in 11u64..=14) {
        let n = hundreds * 100 + teen;
        prop_assert_eq!(Plurality::of(n), Plurality::Many);
        prop_assert_eq!(inflect(n, "one", "few", "many"), "many");
    }

    #[test]
    fn agreement_depends_on_last_two_digits(n in 0u64..u64::MAX / 2) {
        prop_assert_eq!(Plurality::of(n), Plurality::of(n % 100));
    }

    #[test]
    fn regular_nouns_round_trip(stem in "[bcdfgklmnprt][aeiou][bdgklmnprt]er") {
        let plural = pluralize(&stem);
        prop_assert_eq!(&plural, &format!("{stem}s"));
        prop_assert_eq!(singularize(&plural), stem);
    }

    #[test]
    fn whole_amounts_render_in_ukrainian(n in 1u64..1_000_000_000_000) {
        let words = render_price_long(n, false, "uah", Some("ua")).unwrap();
        prop_assert!(!words.contains("  "));
        let last = words.rsplit(' ').next().unwrap();
        prop_assert!(["гривна", "гривні", "гривень"].contains(&last));
    }
}
