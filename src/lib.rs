// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence pattern analysis over fixed-width code units.
//!
//! Three independent analyses, each a pure function of borrowed input:
//!
//! | Analysis                    | Function                    | Cost     |
//! |-----------------------------|-----------------------------|----------|
//! | Exact containment           | [`contains`]                | O(n + m) |
//! | Longest palindromic substring | [`longest_palindrome`]    | O(n²)    |
//! | Longest common substring    | [`longest_common_substring`]| O(n·m)   |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ util::zarray │────▶│  matching.rs │   contains, occurrences
//! └──────────────┘     └──────────────┘
//! ┌──────────────┐     ┌──────────────┐
//! │ util::table  │────▶│ palindrome.rs│   longest_palindrome
//! │ (flat DP)    │────▶│  common.rs   │   longest_common_substring
//! └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────┐
//! │        verify::contracts            │
//! │  (debug-only checks on every result)│
//! └─────────────────────────────────────┘
//! ```
//!
//! `batch` runs the analyses over many inputs (in parallel with the `parallel`
//! feature) and `source` loads inputs from files or memory.
//!
//! Positions in results are 1-based and inclusive. Everything internal is 0-based.
//!
//! # Usage
//!
//! ```
//! use seqpat::{contains, longest_common_substring, longest_palindrome};
//!
//! let found = contains(b"ABCXYZABC", b"XYZ");
//! assert_eq!(found.position().map(|p| p.get()), Some(4));
//!
//! let pal = longest_palindrome(b"babad");
//! assert_eq!((pal.span.start(), pal.span.end()), (1, 3));
//!
//! let common = longest_common_substring(b"GeeksforGeeks", b"GeeksQuiz");
//! assert_eq!(common.text, b"Geeks");
//! ```

pub mod batch;
mod common;
mod error;
mod matching;
mod palindrome;
pub mod source;
mod types;
pub mod util;
pub mod verify;

pub use batch::{analyze, scan_pairs, PairOutcome, Report};
pub use common::longest_common_substring;
pub use error::SequenceError;
pub use matching::{contains, contains_with_separator, occurrences};
pub use palindrome::longest_palindrome;
pub use source::{load_all, FileSource, MemorySource, SequenceSource};
pub use types::{
    CodeUnit, CommonSubstringResult, MatchResult, PalindromeResult, Position, Span,
};
pub use util::zarray::{z_array, z_array_by, Joined, Symbol, ZSource};
