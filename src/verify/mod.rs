// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts on every analysis result.
//!
//! The boundary types in `types` already make the structural invariants
//! unrepresentable (no zero positions, no inverted spans). What they can't
//! express is "this span really is a palindrome in that sequence". The
//! contracts check exactly that, in debug builds, on every call.

pub mod contracts;
