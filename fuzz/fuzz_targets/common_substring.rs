// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the longest-common-substring DP.
//!
//! The reported text must sit at both spans, and swapping the inputs must not
//! change the length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqpat::longest_common_substring;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: PairInput| {
    let a = &input.a[..input.a.len().min(512)];
    let b = &input.b[..input.b.len().min(512)];

    let forward = longest_common_substring(a, b);
    assert_eq!(&a[forward.span.range()], forward.text.as_slice());
    assert_eq!(&b[forward.other_span.range()], forward.text.as_slice());

    let backward = longest_common_substring(b, a);
    assert_eq!(forward.len(), backward.len());
});
