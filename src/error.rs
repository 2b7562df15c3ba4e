// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one error type the library returns.
//!
//! The algorithms themselves are total: empty inputs are edge cases with defined
//! answers, not faults. What can fail is construction of the boundary types
//! (`Position`, `Span`) from caller-supplied numbers, the literal-separator
//! matcher when the separator collides with the input alphabet, and loading a
//! sequence from an external source.

use std::path::PathBuf;

/// Everything that can go wrong at the library boundary.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Positions are 1-based; zero is never a valid position.
    #[error("position must be 1-based, got 0")]
    ZeroPosition,

    /// Span endpoints must satisfy `1 <= start <= end`.
    #[error("invalid span ({start}, {end}): expected 1 <= start <= end")]
    InvalidSpan { start: usize, end: usize },

    /// Span extends past the end of the sequence it refers to.
    #[error("span ({start}, {end}) exceeds sequence length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// The literal separator occurs in one of the inputs, so the combined
    /// sequence could report a match that straddles the join.
    #[error("separator occurs in {input} at offset {offset}")]
    SeparatorInInput { input: &'static str, offset: usize },

    /// A file-backed source could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PartialEq for SequenceError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SequenceError::ZeroPosition, SequenceError::ZeroPosition) => true,
            (
                SequenceError::InvalidSpan { start: a, end: b },
                SequenceError::InvalidSpan { start: c, end: d },
            ) => a == c && b == d,
            (
                SequenceError::SpanOutOfBounds { start: a, end: b, len: l },
                SequenceError::SpanOutOfBounds { start: c, end: d, len: m },
            ) => a == c && b == d && l == m,
            (
                SequenceError::SeparatorInInput { input: a, offset: o },
                SequenceError::SeparatorInInput { input: b, offset: p },
            ) => a == b && o == p,
            (
                SequenceError::Io { path: a, source: e },
                SequenceError::Io { path: b, source: f },
            ) => a == b && e.kind() == f.kind(),
            _ => false,
        }
    }
}
