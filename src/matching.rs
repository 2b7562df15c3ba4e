// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring containment via the Z-function.
//!
//! Run the Z-function over `needle ⋄ haystack`. Any position past the boundary
//! whose Z-value reaches `|needle|` is a place where the haystack agrees with the
//! whole needle, i.e. an occurrence. The boundary stops runs from leaking out of
//! the needle, so Z-values there can never exceed `|needle|`.
//!
//! ```text
//! needle = XYZ, haystack = ABCXYZABC
//!
//!   X Y Z ⋄ A B C X Y Z A B C
//!   0 0 0 0 0 0 0 3 0 0 0 0 0
//!                 ^ combined index 7 → haystack offset 7 - 3 - 1 = 3 → position 4
//! ```
//!
//! O(|needle| + |haystack|) time and space.

use crate::error::SequenceError;
use crate::types::{MatchResult, Position};
use crate::util::zarray::{z_array, z_array_by, Joined, ZSource};
use crate::verify::contracts::check_match;

/// Find the leftmost occurrence of `needle` in `haystack`.
///
/// An empty needle occurs at position 1 of every haystack, the empty one
/// included.
pub fn contains<T: PartialEq>(haystack: &[T], needle: &[T]) -> MatchResult {
    let result = if needle.is_empty() {
        MatchResult::at(Position::from_offset(0))
    } else {
        match_offsets(&Joined::new(needle, haystack), needle.len())
            .next()
            .map_or(MatchResult::NOT_FOUND, |offset| {
                MatchResult::at(Position::from_offset(offset))
            })
    };

    check_match(haystack, needle, &result);
    result
}

/// [`contains`] with a literal separator unit between needle and haystack.
///
/// The separator must not occur in either input; if it does, the join could
/// produce matches that straddle it, so the call fails before computing anything.
pub fn contains_with_separator<T: Clone + PartialEq>(
    haystack: &[T],
    needle: &[T],
    separator: T,
) -> Result<MatchResult, SequenceError> {
    if let Some(offset) = needle.iter().position(|unit| *unit == separator) {
        return Err(SequenceError::SeparatorInInput {
            input: "needle",
            offset,
        });
    }
    if let Some(offset) = haystack.iter().position(|unit| *unit == separator) {
        return Err(SequenceError::SeparatorInInput {
            input: "haystack",
            offset,
        });
    }
    if needle.is_empty() {
        return Ok(MatchResult::at(Position::from_offset(0)));
    }

    let mut combined = Vec::with_capacity(needle.len() + 1 + haystack.len());
    combined.extend_from_slice(needle);
    combined.push(separator);
    combined.extend_from_slice(haystack);

    let m = needle.len();
    let result = z_array(&combined)
        .into_iter()
        .enumerate()
        .skip(m + 1)
        .find(|&(_, run)| run >= m)
        .map_or(MatchResult::NOT_FOUND, |(i, _)| {
            MatchResult::at(Position::from_offset(i - m - 1))
        });

    check_match(haystack, needle, &result);
    Ok(result)
}

/// Every start position of `needle` in `haystack`, overlapping ones included,
/// leftmost first. An empty needle has no occurrences.
pub fn occurrences<T: PartialEq>(haystack: &[T], needle: &[T]) -> Vec<Position> {
    if needle.is_empty() {
        return Vec::new();
    }
    match_offsets(&Joined::new(needle, haystack), needle.len())
        .map(Position::from_offset)
        .collect()
}

/// Haystack offsets (0-based) where the combined Z-array reaches `m`.
fn match_offsets<S: ZSource + ?Sized>(combined: &S, m: usize) -> impl Iterator<Item = usize> {
    z_array_by(combined)
        .into_iter()
        .enumerate()
        .skip(m + 1)
        .filter(move |&(_, run)| run >= m)
        .map(move |(i, _)| i - m - 1)
}
