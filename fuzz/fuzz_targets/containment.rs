// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Z-function containment.
//!
//! Arbitrary bytes, separator bytes included. The structural boundary must
//! never let a match straddle the join, and the answer must agree with a
//! sliding-window scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqpat::{contains, contains_with_separator, occurrences};

#[derive(Debug, Arbitrary)]
struct ContainsInput {
    haystack: Vec<u8>,
    needle: Vec<u8>,
    separator: u8,
}

fuzz_target!(|input: ContainsInput| {
    let haystack = &input.haystack[..input.haystack.len().min(4096)];
    let needle = &input.needle[..input.needle.len().min(64)];

    let result = contains(haystack, needle);
    let expected = if needle.is_empty() {
        Some(0)
    } else {
        haystack.windows(needle.len()).position(|w| w == needle)
    };
    assert_eq!(result.position().map(|p| p.offset()), expected);

    if !needle.is_empty() {
        let all = occurrences(haystack, needle);
        assert_eq!(all.first().copied(), result.position());
        for position in all {
            let start = position.offset();
            assert_eq!(&haystack[start..start + needle.len()], needle);
        }
    }

    if let Ok(literal) = contains_with_separator(haystack, needle, input.separator) {
        assert_eq!(literal, result);
    }
});
