// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::BitOr;

/// Effect reported back to a drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Drop refused.
    None,
    /// Dropped text is copied.
    Copy,
    /// Dropped text is moved.
    Move,
}

/// Set of effects the drag source allows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllowedEffects(u8);

impl AllowedEffects {
    /// Nothing allowed.
    pub const NONE: Self = Self(0);
    /// Copy allowed.
    pub const COPY: Self = Self(1);
    /// Move allowed.
    pub const MOVE: Self = Self(1 << 1);

    /// Returns `true` if every effect in `other` is allowed.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for AllowedEffects {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
