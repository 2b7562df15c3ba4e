// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the longest-palindrome DP.
//!
//! Quadratic memory, so inputs are capped. Checks the span is in bounds and
//! reads the same both ways; the crate's own contracts check the text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqpat::longest_palindrome;

fuzz_target!(|data: &[u8]| {
    let s = &data[..data.len().min(512)];
    let result = longest_palindrome(s);

    assert_eq!(result.span.is_empty(), s.is_empty());
    let window = &s[result.span.range()];
    assert!(window.iter().eq(window.iter().rev()));
    assert!(result.text.len() <= window.len());
});
