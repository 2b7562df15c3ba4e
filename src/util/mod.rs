// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Low-level building blocks shared by the analyses.
//!
//! The Z-function for containment, and a flat row-major table for the two
//! dynamic programs.

pub mod table;
pub mod zarray;
