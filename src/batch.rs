// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch analysis: every pattern against every target, plus the per-target runs.
//!
//! Each (target, pattern) pair is an independent unit of work with no shared
//! state, so with the `parallel` feature the Cartesian product goes through
//! `par_iter()`. Rayon's indexed collect keeps results in input order, which is
//! target-major: all patterns for target 0, then all for target 1, and so on.
//! Without the feature the same pipeline runs on a plain iterator.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::common::longest_common_substring;
use crate::matching::contains;
use crate::palindrome::longest_palindrome;
use crate::types::{CommonSubstringResult, MatchResult, PalindromeResult};

/// Containment result for one (target, pattern) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    /// Index into the targets slice.
    pub target: usize,
    /// Index into the patterns slice.
    pub pattern: usize,
    pub result: MatchResult,
}

/// The full three-part analysis of a set of targets and patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Every pattern checked against every target, target-major.
    pub containment: Vec<PairOutcome>,
    /// Longest palindrome of each target, in target order.
    pub palindromes: Vec<PalindromeResult>,
    /// Longest common substring of the first two targets, if there are two.
    pub common: Option<CommonSubstringResult>,
}

/// Check every pattern against every target.
pub fn scan_pairs<S: AsRef<[u8]> + Sync>(targets: &[S], patterns: &[S]) -> Vec<PairOutcome> {
    let pairs: Vec<(usize, usize)> = (0..targets.len())
        .flat_map(|target| (0..patterns.len()).map(move |pattern| (target, pattern)))
        .collect();

    debug!(
        targets = targets.len(),
        patterns = patterns.len(),
        pairs = pairs.len(),
        "scanning pairs"
    );

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    iter.map(|&(target, pattern)| PairOutcome {
        target,
        pattern,
        result: contains(targets[target].as_ref(), patterns[pattern].as_ref()),
    })
    .collect()
}

/// Longest palindrome of every target, in order.
pub fn palindromes<S: AsRef<[u8]> + Sync>(targets: &[S]) -> Vec<PalindromeResult> {
    #[cfg(feature = "parallel")]
    let iter = targets.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = targets.iter();

    iter.map(|target| longest_palindrome(target.as_ref())).collect()
}

/// Run containment, palindrome, and common-substring analysis in one go.
pub fn analyze<S: AsRef<[u8]> + Sync>(targets: &[S], patterns: &[S]) -> Report {
    let containment = scan_pairs(targets, patterns);
    let palindromes = palindromes(targets);
    let common = match targets {
        [first, second, ..] => Some(longest_common_substring(first.as_ref(), second.as_ref())),
        _ => None,
    };

    debug!(
        matches = containment.iter().filter(|pair| pair.result.found()).count(),
        common_len = common.as_ref().map_or(0, CommonSubstringResult::len),
        "analysis complete"
    );

    Report {
        containment,
        palindromes,
        common,
    }
}
