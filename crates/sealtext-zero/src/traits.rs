// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

use crate::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Trait for verifying that a value has been zeroized.
///
/// ```rust
/// use sealtext_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut ch = 'x';
/// assert!(!ch.is_zeroized());
///
/// ch.fast_zeroize();
/// assert!(ch.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is 0.
    fn is_zeroized(&self) -> bool;
}

/// Metadata about the zeroization strategy of a type.
///
/// Not dyn-compatible (associated constant). Use [`FastZeroizable`] for trait
/// objects.
pub trait ZeroizeMetadata {
    /// `true` when all-zeros is a valid bit pattern and a memset suffices.
    ///
    /// `false` for types owning heap memory (`Vec`, `String`), which must be
    /// walked element by element.
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Trait for types that can be zeroized in place.
pub trait FastZeroizable {
    /// Overwrites every sensitive byte of the value with zeros.
    fn fast_zeroize(&mut self);
}

/// Trait for types that verify zeroization happened before drop.
///
/// Implementors hold a [`ZeroizeOnDropSentinel`] which their `Drop` impl
/// marks when it wipes the value.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal sentinel so it can be inspected after drop.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts the sentinel was marked.
    ///
    /// # Panics
    ///
    /// Panics if the value was not zeroized while being dropped.
    fn assert_zeroize_on_drop(self);
}
