// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on everything the analyses return.
//!
//! Every public analysis calls the matching check right before returning. They
//! are `debug_assert!`s: tests and debug builds panic on a violation, release
//! builds compile them away. All of them are linear in the size of the result,
//! never in the size of the DP table, so leaving them on in tests is cheap.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                                    |
//! |-----------------------------|-------------------------------------------------------------|
//! | `check_z_array`             | `z[0] = 0`, `i + z[i] <= n`, every run stops at a mismatch   |
//! | `check_match`               | reported window equals the needle                           |
//! | `check_palindrome`          | span in bounds, window reads the same both ways, text = window minus whitespace |
//! | `check_common_substring`    | both spans in bounds, both windows equal `text`             |

use crate::types::{CodeUnit, CommonSubstringResult, MatchResult, PalindromeResult, Span};
use crate::util::zarray::ZSource;

// ============================================================================
// Z-ARRAY
// ============================================================================

/// Check the shape of a Z-array.
///
/// Verifies maximality (each run ends at a mismatch or the end of input) and
/// bounds. Prefix equality itself would be O(n²) to re-verify, so it is left
/// to the property tests.
#[inline]
pub fn check_z_array<S: ZSource + ?Sized>(s: &S, z: &[usize]) {
    let n = s.len();
    debug_assert_eq!(
        z.len(),
        n,
        "Contract violation: z.len() {} != input length {}",
        z.len(),
        n
    );

    if let Some(&first) = z.first() {
        debug_assert_eq!(first, 0, "Contract violation: z[0] = {} (expected 0)", first);
    }

    for (i, &run) in z.iter().enumerate().skip(1) {
        debug_assert!(
            i + run <= n,
            "Contract violation: z[{}] = {} runs past the end ({})",
            i,
            run,
            n
        );
        if i + run < n {
            debug_assert!(
                !s.same(run, i + run),
                "Contract violation: z[{}] = {} is not maximal",
                i,
                run
            );
        }
    }
}

// ============================================================================
// CONTAINMENT
// ============================================================================

/// Check that a reported match actually holds.
#[inline]
pub fn check_match<T: PartialEq>(haystack: &[T], needle: &[T], result: &MatchResult) {
    let Some(position) = result.position() else {
        return;
    };
    let start = position.offset();

    if needle.is_empty() {
        debug_assert_eq!(
            start, 0,
            "Contract violation: empty needle reported at position {}",
            position
        );
        return;
    }

    debug_assert!(
        haystack
            .get(start..start + needle.len())
            .is_some_and(|window| window == needle),
        "Contract violation: needle does not occur at position {}",
        position
    );
}

// ============================================================================
// PALINDROME
// ============================================================================

/// Check a palindrome result against the sequence it came from.
#[inline]
pub fn check_palindrome<T: CodeUnit>(s: &[T], result: &PalindromeResult<T>) {
    if s.is_empty() {
        debug_assert_eq!(
            result.span,
            Span::EMPTY,
            "Contract violation: empty input produced span {}",
            result.span
        );
        return;
    }

    check_span(result.span, s.len(), "sequence");
    let Some(window) = s.get(result.span.range()) else {
        return;
    };

    debug_assert!(
        !window.is_empty(),
        "Contract violation: non-empty input produced an empty palindrome"
    );
    debug_assert!(
        window.iter().eq(window.iter().rev()),
        "Contract violation: window {} is not a palindrome",
        result.span
    );
    debug_assert!(
        window
            .iter()
            .filter(|unit| !unit.is_whitespace())
            .eq(result.text.iter()),
        "Contract violation: text does not match window {} minus whitespace",
        result.span
    );
}

// ============================================================================
// COMMON SUBSTRING
// ============================================================================

/// Check a common-substring result against both inputs.
#[inline]
pub fn check_common_substring<T: CodeUnit>(a: &[T], b: &[T], result: &CommonSubstringResult<T>) {
    debug_assert_eq!(
        result.span.len(),
        result.text.len(),
        "Contract violation: span {} disagrees with text length {}",
        result.span,
        result.text.len()
    );
    debug_assert_eq!(
        result.other_span.len(),
        result.text.len(),
        "Contract violation: other_span {} disagrees with text length {}",
        result.other_span,
        result.text.len()
    );

    check_span(result.span, a.len(), "a");
    check_span(result.other_span, b.len(), "b");

    debug_assert!(
        a.get(result.span.range()) == Some(result.text.as_slice()),
        "Contract violation: a[{}] differs from text",
        result.span
    );
    debug_assert!(
        b.get(result.other_span.range()) == Some(result.text.as_slice()),
        "Contract violation: b[{}] differs from text",
        result.other_span
    );
}

#[inline]
fn check_span(span: Span, len: usize, what: &str) {
    debug_assert!(
        span.within(len).is_ok(),
        "Contract violation: span {} exceeds {} length {}",
        span,
        what,
        len
    );
}
