// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Z-function: for every position, how far does the sequence agree with its own prefix?
//!
//! ```text
//! s = a a b x a a b
//! z = 0 1 0 0 3 1 0
//!             ^ "aab" starting at 4 matches the prefix "aab"
//! ```
//!
//! One left-to-right pass, O(n). The trick is the window `[l, r)`: the rightmost
//! stretch already known to equal a prefix. Any `i` inside it has a mirror at
//! `i - l` whose answer we already have, so we start from that (clamped to the
//! window) and only compare characters beyond `r`. Each comparison that succeeds
//! pushes `r` right, so there are at most `n` of them in total.
//!
//! # Joined sequences
//!
//! Substring search runs the Z-function over `needle ⋄ haystack`. The classic
//! version glues them with a literal character like `$` and hopes it never shows
//! up in the input. [`Joined`] uses a structural boundary instead: the unit
//! between the two halves is [`Symbol::Boundary`], which compares unequal to
//! everything (itself included). No alphabet assumption, no copy of either input.

use crate::verify::contracts::check_z_array;

/// Something the Z-function can run over.
///
/// Only needs a length and positional equality, which is what lets the same
/// routine serve plain slices and [`Joined`] views.
pub trait ZSource {
    fn len(&self) -> usize;

    /// Does the unit at `a` equal the unit at `b`?
    fn same(&self, a: usize, b: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq> ZSource for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn same(&self, a: usize, b: usize) -> bool {
        self[a] == self[b]
    }
}

/// A unit of a [`Joined`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<T> {
    Unit(T),
    /// The join point. Never matches anything.
    Boundary,
}

impl<T: PartialEq> Symbol<T> {
    #[inline]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Symbol::Unit(a), Symbol::Unit(b)) => a == b,
            _ => false,
        }
    }
}

/// `head ⋄ tail` without materializing it.
#[derive(Debug, Clone, Copy)]
pub struct Joined<'a, T> {
    head: &'a [T],
    tail: &'a [T],
}

impl<'a, T> Joined<'a, T> {
    pub fn new(head: &'a [T], tail: &'a [T]) -> Self {
        Joined { head, tail }
    }

    /// Index of the boundary symbol (equals `head.len()`).
    #[inline]
    pub fn boundary(&self) -> usize {
        self.head.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Symbol<&'a T> {
        let boundary = self.boundary();
        if index < boundary {
            Symbol::Unit(&self.head[index])
        } else if index == boundary {
            Symbol::Boundary
        } else {
            Symbol::Unit(&self.tail[index - boundary - 1])
        }
    }
}

impl<T: PartialEq> ZSource for Joined<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.head.len() + 1 + self.tail.len()
    }

    #[inline]
    fn same(&self, a: usize, b: usize) -> bool {
        self.get(a).matches(&self.get(b))
    }
}

/// Z-array of a slice. `z[0]` is 0 by convention; callers never read it.
pub fn z_array<T: PartialEq>(s: &[T]) -> Vec<usize> {
    z_array_by(s)
}

/// Z-array of any [`ZSource`].
pub fn z_array_by<S: ZSource + ?Sized>(s: &S) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0usize; n];
    let (mut l, mut r) = (0usize, 0usize);

    for i in 1..n {
        if i < r {
            z[i] = (r - i).min(z[i - l]);
        }
        while i + z[i] < n && s.same(z[i], i + z[i]) {
            z[i] += 1;
        }
        if i + z[i] > r {
            l = i;
            r = i + z[i];
        }
    }

    check_z_array(s, &z);
    z
}
