//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use std::path::PathBuf;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets make repeats, palindromes and shared runs likely.
pub fn small_alphabet_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..=max_len)
}

/// Arbitrary bytes, including `$`, NUL and 0xFF.
pub fn any_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Text with spaces and newlines mixed in.
pub fn spaced_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop::sample::select(vec![b'a', b'b', b' ', b'\n']),
        0..=max_len,
    )
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Two transmissions and three candidate codes, in the shape of a typical batch run.
pub const TRANSMISSION_1: &str = "ABCDEF12345\nXYZ0101XYZ\n";
pub const TRANSMISSION_2: &str = "98765ABCDEF\n0101racecar\n";
pub const CODES: [&str; 3] = ["XYZ", "1234", "QQQ"];

/// Write `(name, contents)` pairs into a fresh temp dir.
pub fn write_files(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = files
        .iter()
        .map(|(name, contents)| {
            let path = dir.path().join(name);
            std::fs::write(&path, contents).expect("write fixture");
            path
        })
        .collect();
    (dir, paths)
}
