// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helper for verifying wipe-on-drop.

use crate::traits::{AssertZeroizeOnDrop, ZeroizationProbe};

/// Drops `value` and asserts that its sentinel was marked while dropping.
///
/// # Panics
///
/// Panics if the value's `Drop` did not zeroize it.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_zeroized());
    drop(value);
    assert!(sentinel.is_zeroized());
}
