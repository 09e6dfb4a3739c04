//! Integration property tests for destroy-invalids.
//!
//! These tests check the sanitizer's output invariants on generated input.

use destroy_invalids::{
    flags_only, non_flags_only, CharSet, Language, RecordingObserver, Sanitizer, SanitizerConfig,
    NULL_SENTINEL,
};
use proptest::prelude::*;

fn quiet(limit: i64) -> Sanitizer<RecordingObserver> {
    Sanitizer::with_observer(SanitizerConfig::new(limit), RecordingObserver::new())
}

// Strategy: extras made of literal punctuation, never a malformed spec
fn arb_extras() -> impl Strategy<Value = String> {
    prop::string::string_regex("[.,:;+@#]{0,4}").unwrap()
}

proptest! {
    /// Property: alphanumeric output contains only word characters and extras, no spaces
    #[test]
    fn proptest_alphanumeric_only_allowed_chars(
        inputs in prop::collection::vec(any::<String>(), 0..6),
        extras in arb_extras()
    ) {
        let sanitizer = quiet(0);
        let output = sanitizer.alphanumeric_only(&inputs, "proptest", &extras).unwrap();

        prop_assert_eq!(output.len(), inputs.len());
        for value in &output {
            prop_assert!(!value.contains(' '));
            prop_assert!(value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || extras.contains(c)));
        }
    }

    /// Property: applying alphanumeric_only to its own output changes nothing
    #[test]
    fn proptest_alphanumeric_only_idempotent(
        inputs in prop::collection::vec(any::<String>(), 0..6),
        extras in arb_extras()
    ) {
        let sanitizer = quiet(0);
        let once = sanitizer.alphanumeric_only(&inputs, "proptest", &extras).unwrap();
        let twice = sanitizer.alphanumeric_only(&once, "proptest", &extras).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: anything returns the sentinel or only allowed characters
    #[test]
    fn proptest_anything_output_is_allowed(value in any::<String>()) {
        let sanitizer = quiet(0);
        let allowed = CharSet::parse("a-zA-Z0-9").unwrap();
        let output = sanitizer.anything(&value, "a-zA-Z0-9").unwrap();

        let kept: String = value.chars().filter(|c| allowed.contains(*c)).collect();
        if kept.is_empty() {
            prop_assert_eq!(output, NULL_SENTINEL);
        } else {
            prop_assert_eq!(output, kept);
        }
    }

    /// Property: numeric coercion is total and finds plain integers
    #[test]
    fn proptest_numeric_only_finds_embedded_integer(
        prefix in "[a-z ]{0,5}",
        number in 0u32..1_000_000,
        suffix in "[a-z ]{0,5}",
        limit in any::<i64>()
    ) {
        let sanitizer = quiet(limit);
        let input = format!("{}{}{}", prefix, number, suffix);
        prop_assert_eq!(sanitizer.numeric_only(&input, str::parse::<u32>), number);
    }

    /// Property: numeric coercion never panics
    #[test]
    fn proptest_numeric_only_never_panics(input in any::<String>()) {
        let sanitizer = quiet(-1);
        let _ = sanitizer.numeric_only(&input, str::parse::<f64>);
        let _ = sanitizer.numeric_only(&input, str::parse::<i8>);
    }

    /// Property: flag partitions never keep an entry on the wrong side
    #[test]
    fn proptest_flag_partitions(list in prop::collection::vec("[./a-z]{0,4}", 0..10)) {
        let mut plain = list.clone();
        let mut flagged = list.clone();
        flags_only(&mut plain);
        non_flags_only(&mut flagged);

        prop_assert!(plain.iter().all(|s| !s.starts_with('/') && !s.starts_with('.')));
        prop_assert!(flagged.iter().all(|s| s.starts_with('/') || s.starts_with('.')));
        prop_assert_eq!(plain.len() + flagged.len(), list.len());
    }

    /// Property: arguments made only of language switches always resolve
    #[test]
    fn proptest_language_switches_resolve(
        args in prop::collection::vec(prop_oneof![Just("-EN"), Just("-ES")], 0..4)
    ) {
        let language = Language::from_args(&args).unwrap();
        let expected = if args.contains(&"-EN") || args.is_empty() {
            Language::English
        } else {
            Language::Spanish
        };
        prop_assert_eq!(language, expected);
    }
}
