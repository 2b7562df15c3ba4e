// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest common substring via suffix-length DP.
//!
//! `len[i][j]` is the length of the longest common suffix of `a[..i]` and
//! `b[..j]`. Substrings must be contiguous, so a mismatch resets to zero:
//!
//! ```text
//! len[i][j] = len[i-1][j-1] + 1   if a[i-1] == b[j-1]
//!           = 0                   otherwise
//! ```
//!
//! The largest cell is the answer; its `(i, j)` gives the end in both inputs.
//! Cells are visited row-major and only a strictly larger value replaces the
//! best, so the first maximum found in that order wins.
//!
//! O(m·n) time and space.

use crate::types::{CodeUnit, CommonSubstringResult, Span};
use crate::util::table::Table;
use crate::verify::contracts::check_common_substring;

/// Find the longest contiguous run shared by `a` and `b`.
///
/// `span` is relative to `a`, `other_span` to `b`. When nothing is shared both
/// spans are `Span::EMPTY` and the text is empty.
pub fn longest_common_substring<T: CodeUnit>(a: &[T], b: &[T]) -> CommonSubstringResult<T> {
    let (m, n) = (a.len(), b.len());
    let mut suffix = Table::new(m + 1, n + 1, 0usize);

    let (mut best, mut end_a, mut end_b) = (0usize, 0usize, 0usize);
    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                let len = suffix[(i - 1, j - 1)] + 1;
                suffix[(i, j)] = len;
                if len > best {
                    best = len;
                    end_a = i;
                    end_b = j;
                }
            }
        }
    }

    if best == 0 {
        return CommonSubstringResult::empty();
    }

    let (start_a, start_b) = (end_a - best, end_b - best);
    let result = CommonSubstringResult {
        span: Span::from_offsets(start_a, best),
        other_span: Span::from_offsets(start_b, best),
        text: a[start_a..end_a].to_vec(),
    };

    check_common_substring(a, b, &result);
    result
}
