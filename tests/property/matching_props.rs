//! Containment properties that hold for every input.

use proptest::prelude::*;
use seqpat::{contains, contains_with_separator, occurrences, MatchResult, SequenceError};

use super::common::{any_bytes, small_alphabet_seq};

proptest! {
    #[test]
    fn prop_self_containment(s in any_bytes(50)) {
        prop_assert_eq!(contains(&s, &s).position().map(|p| p.get()), Some(1));
    }

    #[test]
    fn prop_planted_needle_found(
        prefix in small_alphabet_seq(20),
        needle in small_alphabet_seq(6),
        suffix in small_alphabet_seq(20),
    ) {
        let haystack = [prefix.as_slice(), needle.as_slice(), suffix.as_slice()].concat();
        let result = contains(&haystack, &needle);
        let position = result.position().expect("planted needle must be found").get();
        // An earlier occurrence may exist; the planted one bounds it.
        prop_assert!(position <= prefix.len() + 1);
        prop_assert_eq!(&haystack[position - 1..position - 1 + needle.len()], needle.as_slice());
    }

    #[test]
    fn prop_absent_needle_not_found(haystack in small_alphabet_seq(30), tail in small_alphabet_seq(3)) {
        // 'd' never appears in the small alphabet.
        let needle = [b"d".as_slice(), tail.as_slice()].concat();
        prop_assert_eq!(contains(&haystack, &needle), MatchResult::NOT_FOUND);
    }

    #[test]
    fn prop_first_occurrence_is_contains(
        haystack in small_alphabet_seq(30),
        needle in small_alphabet_seq(3),
    ) {
        prop_assume!(!needle.is_empty());
        let first = occurrences(&haystack, &needle).first().copied();
        prop_assert_eq!(first, contains(&haystack, &needle).position());
    }

    #[test]
    fn prop_separator_variant_agrees_or_rejects(haystack in any_bytes(30), needle in any_bytes(3)) {
        match contains_with_separator(&haystack, &needle, b'$') {
            Ok(result) => prop_assert_eq!(result, contains(&haystack, &needle)),
            Err(SequenceError::SeparatorInInput { .. }) => {
                prop_assert!(haystack.contains(&b'$') || needle.contains(&b'$'));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
