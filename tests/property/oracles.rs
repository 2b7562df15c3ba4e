//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. Quadratic or worse, which is fine
//! at property-test sizes. The optimized analyses must agree with them exactly,
//! tie-breaking included.

use proptest::prelude::*;
use seqpat::{contains, longest_common_substring, longest_palindrome, z_array, CodeUnit};

use super::common::{any_bytes, small_alphabet_seq, spaced_text};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Z-array by direct comparison at every position.
pub fn oracle_z_array(s: &[u8]) -> Vec<usize> {
    (0..s.len())
        .map(|i| {
            if i == 0 {
                0
            } else {
                s[i..].iter().zip(s).take_while(|(a, b)| a == b).count()
            }
        })
        .collect()
}

/// Leftmost match offset by sliding window.
pub fn oracle_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Longest palindrome by trying every window, longest first, leftmost first.
/// Returns (0-based start, length).
pub fn oracle_palindrome(s: &[u8]) -> (usize, usize) {
    for len in (1..=s.len()).rev() {
        for start in 0..=s.len() - len {
            let w = &s[start..start + len];
            if w.iter().eq(w.iter().rev()) {
                return (start, len);
            }
        }
    }
    (0, 0)
}

/// Length of the longest common substring by brute force.
pub fn oracle_common_len(a: &[u8], b: &[u8]) -> usize {
    let mut best = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let run = a[i..].iter().zip(&b[j..]).take_while(|(x, y)| x == y).count();
            best = best.max(run);
        }
    }
    best
}

// =============================================================================
// DIFFERENTIAL PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_z_array_matches_oracle(s in small_alphabet_seq(40)) {
        prop_assert_eq!(z_array(&s), oracle_z_array(&s));
    }

    #[test]
    fn prop_contains_matches_oracle(
        haystack in small_alphabet_seq(30),
        needle in small_alphabet_seq(4),
    ) {
        let expected = oracle_find(&haystack, &needle).map(|offset| offset + 1);
        let actual = contains(&haystack, &needle).position().map(|p| p.get());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_contains_any_bytes(haystack in any_bytes(40), needle in any_bytes(3)) {
        let expected = oracle_find(&haystack, &needle).map(|offset| offset + 1);
        let actual = contains(&haystack, &needle).position().map(|p| p.get());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_palindrome_matches_oracle(s in small_alphabet_seq(30)) {
        let result = longest_palindrome(&s);
        let (start, len) = oracle_palindrome(&s);
        prop_assert_eq!(result.span.len(), len);
        if len > 0 {
            prop_assert_eq!(result.span.start(), start + 1);
        }
    }

    #[test]
    fn prop_palindrome_text_is_window_without_whitespace(s in spaced_text(30)) {
        let result = longest_palindrome(&s);
        let expected: Vec<u8> = s[result.span.range()]
            .iter()
            .copied()
            .filter(|b| !CodeUnit::is_whitespace(*b))
            .collect();
        prop_assert_eq!(result.text, expected);
    }

    #[test]
    fn prop_common_len_matches_oracle(a in small_alphabet_seq(20), b in small_alphabet_seq(20)) {
        prop_assert_eq!(longest_common_substring(&a, &b).len(), oracle_common_len(&a, &b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracles_on_known_inputs() {
        assert_eq!(oracle_z_array(b"aaaaa"), vec![0, 4, 3, 2, 1]);
        assert_eq!(oracle_find(b"ABCXYZABC", b"XYZ"), Some(3));
        assert_eq!(oracle_palindrome(b"babad"), (0, 3));
        assert_eq!(oracle_common_len(b"GeeksforGeeks", b"GeeksQuiz"), 5);
    }
}
