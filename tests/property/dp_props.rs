//! Properties of the two dynamic-programming analyses.

use proptest::prelude::*;
use seqpat::{longest_common_substring, longest_palindrome, Span};

use super::common::{small_alphabet_seq, spaced_text};

/// Bytes 0..n with no repeats: no palindrome longer than one unit exists.
fn distinct_bytes() -> impl Strategy<Value = Vec<u8>> {
    (1usize..64).prop_map(|n| (0..n as u8).collect())
}

proptest! {
    #[test]
    fn prop_no_mirrors_gives_single_unit(s in distinct_bytes()) {
        let result = longest_palindrome(&s);
        prop_assert_eq!(result.span, Span::new(1, 1).unwrap());
        prop_assert_eq!(result.text, vec![0u8]);
    }

    #[test]
    fn prop_planted_palindrome_length(half in small_alphabet_seq(8)) {
        // "x" + half + reverse(half) + "y" holds an even palindrome of 2 * |half|.
        let mirrored: Vec<u8> = half.iter().rev().copied().collect();
        let s = [b"x".as_slice(), half.as_slice(), mirrored.as_slice(), b"y".as_slice()].concat();
        let result = longest_palindrome(&s);
        prop_assert!(result.span.len() >= (2 * half.len()).max(1));
    }

    #[test]
    fn prop_palindrome_span_within_input(s in spaced_text(40)) {
        let result = longest_palindrome(&s);
        prop_assert!(result.span.within(s.len()).is_ok());
        prop_assert_eq!(result.span.is_empty(), s.is_empty());
    }

    #[test]
    fn prop_common_text_in_both(a in small_alphabet_seq(25), b in small_alphabet_seq(25)) {
        let result = longest_common_substring(&a, &b);
        prop_assert_eq!(&a[result.span.range()], result.text.as_slice());
        prop_assert_eq!(&b[result.other_span.range()], result.text.as_slice());
    }

    #[test]
    fn prop_common_swap_symmetric(a in small_alphabet_seq(25), b in small_alphabet_seq(25)) {
        let forward = longest_common_substring(&a, &b);
        let backward = longest_common_substring(&b, &a);
        prop_assert_eq!(forward.len(), backward.len());
        prop_assert_eq!(forward.is_empty(), backward.is_empty());
    }

    #[test]
    fn prop_disjoint_alphabets_share_nothing(
        a in prop::collection::vec(b'a'..=b'm', 0..20),
        b in prop::collection::vec(b'n'..=b'z', 0..20),
    ) {
        let result = longest_common_substring(&a, &b);
        prop_assert_eq!(result.span, Span::EMPTY);
        prop_assert!(result.text.is_empty());
    }
}
