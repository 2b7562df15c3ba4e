// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row-major 2-D table in a single allocation.
//!
//! Both DP analyses index `(row, col)` pairs in tight loops. One `Vec` with a
//! computed offset keeps neighbouring cells adjacent and costs one allocation
//! instead of one per row.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// A `rows x cols` table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Table {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Table<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} table",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }
}
