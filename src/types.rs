// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by every analysis.
//!
//! A sequence is just a borrowed slice of code units (`&[T]`). Internally all
//! arithmetic is on 0-based offsets; the types here exist for the API boundary,
//! where positions are 1-based and inclusive because that's what people reading
//! the output expect.
//!
//! # Invariants
//!
//! - **Position**: always `>= 1`. Backed by `NonZeroUsize`, so zero can't sneak in.
//!
//! - **Span**: either `Span::EMPTY` (`(0, 0)`) or `1 <= start <= end`.
//!   Whether `end <= len(sequence)` holds depends on which sequence you ask about,
//!   so that part is checked by `Span::within`.
//!
//! - **MatchResult**: `found()` iff `position().is_some()`. There's only one field,
//!   so the two can't disagree.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::SequenceError;

// =============================================================================
// CODE UNITS
// =============================================================================

/// A fixed-width element of a sequence.
///
/// Analyses compare units for equality and nothing else. There is no grapheme
/// or normalization awareness: `é` as one `char` and `e` + combining acute as two
/// are different sequences.
pub trait CodeUnit: Copy + Eq + Send + Sync + fmt::Debug {
    /// Whitespace as far as display normalization is concerned.
    fn is_whitespace(self) -> bool;
}

impl CodeUnit for u8 {
    /// Matches C `isspace` in the default locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
    #[inline]
    fn is_whitespace(self) -> bool {
        matches!(self, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn is_whitespace(self) -> bool {
        u8::try_from(self).is_ok_and(CodeUnit::is_whitespace)
    }
}

impl CodeUnit for char {
    #[inline]
    fn is_whitespace(self) -> bool {
        char::is_whitespace(self)
    }
}

// =============================================================================
// POSITIONS AND SPANS
// =============================================================================

/// A 1-based index into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Validate a 1-based position.
    pub fn new(value: usize) -> Result<Self, SequenceError> {
        NonZeroUsize::new(value)
            .map(Position)
            .ok_or(SequenceError::ZeroPosition)
    }

    /// Convert a 0-based offset.
    #[inline]
    pub fn from_offset(offset: usize) -> Self {
        Position(NonZeroUsize::MIN.saturating_add(offset))
    }

    /// The 1-based value.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based offset this position denotes.
    #[inline]
    pub fn offset(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive, 1-based `(start, end)` pair, or the empty span `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// The span reported when there is nothing to report.
    pub const EMPTY: Span = Span { start: 0, end: 0 };

    /// Validate `1 <= start <= end`.
    pub fn new(start: usize, end: usize) -> Result<Self, SequenceError> {
        if start == 0 || start > end {
            return Err(SequenceError::InvalidSpan { start, end });
        }
        Ok(Span { start, end })
    }

    /// Build a span from a 0-based start offset and a length.
    ///
    /// A zero length gives `Span::EMPTY` regardless of `offset`.
    #[inline]
    pub fn from_offsets(offset: usize, len: usize) -> Self {
        if len == 0 {
            return Span::EMPTY;
        }
        Span {
            start: offset + 1,
            end: offset + len,
        }
    }

    /// Check that the span fits inside a sequence of length `len`.
    pub fn within(self, len: usize) -> Result<Self, SequenceError> {
        if self.end > len {
            return Err(SequenceError::SpanOutOfBounds {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(self)
    }

    #[inline]
    pub fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(self) -> usize {
        self.end
    }

    /// Number of units covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == 0
    }

    /// The 0-based half-open range, suitable for slicing.
    #[inline]
    pub fn range(self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start - 1..self.end
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Outcome of a containment test: the leftmost match start, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    position: Option<Position>,
}

impl MatchResult {
    pub const NOT_FOUND: MatchResult = MatchResult { position: None };

    #[inline]
    pub fn at(position: Position) -> Self {
        MatchResult {
            position: Some(position),
        }
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.position.is_some()
    }

    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchResult", 2)?;
        state.serialize_field("found", &self.found())?;
        state.serialize_field("position", &self.position)?;
        state.end()
    }
}

/// The longest palindromic substring of a sequence.
///
/// `span` denotes the palindrome in the original sequence. `text` is that
/// substring with whitespace removed, so `text.len()` can be smaller than
/// `span.len()`. This asymmetry is part of the contract: the span is for
/// locating, the text is for displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromeResult<T = u8> {
    pub span: Span,
    pub text: Vec<T>,
}

impl<T> PalindromeResult<T> {
    /// The answer for an empty sequence.
    pub fn empty() -> Self {
        PalindromeResult {
            span: Span::EMPTY,
            text: Vec::new(),
        }
    }
}

impl PalindromeResult<u8> {
    /// The text as UTF-8, replacing invalid bytes.
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// The longest common substring of two sequences `a` and `b`.
///
/// `span` locates the match in `a`, `other_span` the first-discovered matching
/// occurrence in `b`. Both are `Span::EMPTY` when the sequences share nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonSubstringResult<T = u8> {
    pub span: Span,
    pub other_span: Span,
    pub text: Vec<T>,
}

impl<T> CommonSubstringResult<T> {
    /// The answer when no unit is shared.
    pub fn empty() -> Self {
        CommonSubstringResult {
            span: Span::EMPTY,
            other_span: Span::EMPTY,
            text: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl CommonSubstringResult<u8> {
    /// The text as UTF-8, replacing invalid bytes.
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}
