// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest palindromic substring via interval DP.
//!
//! `is_pal[i][j]` says whether `s[i..=j]` reads the same both ways:
//!
//! ```text
//! len 1:  is_pal[i][i]     = true
//! len 2:  is_pal[i][i+1]   = s[i] == s[i+1]
//! len 3+: is_pal[i][j]     = s[i] == s[j] && is_pal[i+1][j-1]
//! ```
//!
//! Filling by increasing length means the inner interval is always ready. The
//! first palindrome of a new maximum length wins, and within one length we scan
//! left to right, so ties go to the leftmost.
//!
//! O(n²) time and space. The inputs this is meant for are short.

use crate::types::{CodeUnit, PalindromeResult, Span};
use crate::util::table::Table;
use crate::verify::contracts::check_palindrome;

/// Find the leftmost longest palindromic substring of `s`.
///
/// Whitespace is stripped from the returned text but not from the span, which
/// still covers the original window. An empty `s` gives `Span::EMPTY` and no text.
pub fn longest_palindrome<T: CodeUnit>(s: &[T]) -> PalindromeResult<T> {
    let n = s.len();
    if n == 0 {
        return PalindromeResult::empty();
    }

    let mut is_pal = Table::new(n, n, false);
    for i in 0..n {
        is_pal[(i, i)] = true;
    }

    let (mut start, mut best) = (0usize, 1usize);
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            if s[i] == s[j] && (len == 2 || is_pal[(i + 1, j - 1)]) {
                is_pal[(i, j)] = true;
                if len > best {
                    start = i;
                    best = len;
                }
            }
        }
    }

    let span = Span::from_offsets(start, best);
    let text = s[span.range()]
        .iter()
        .copied()
        .filter(|unit| !unit.is_whitespace())
        .collect();

    let result = PalindromeResult { span, text };
    check_palindrome(s, &result);
    result
}
