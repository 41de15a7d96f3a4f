// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for slices, arrays, `Vec<T>` and `String`.

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
use crate::util;

// === === === === === === === === === ===
// [T] - slices
// === === === === === === === === === ===

#[inline(always)]
fn slice_fast_zeroize<T: FastZeroizable + ZeroizeMetadata + Copy>(slice: &mut [T]) {
    if T::CAN_BE_BULK_ZEROIZED {
        util::fast_zeroize_slice(slice);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
        }
    }
    compiler_fence(Ordering::SeqCst);
}

impl<T> FastZeroizable for [T]
where
    T: FastZeroizable + ZeroizeMetadata + Copy,
{
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(|elem| elem.is_zeroized())
    }
}

// === === === === === === === === === ===
// [T; N] - arrays
// === === === === === === === === === ===

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T, const N: usize> FastZeroizable for [T; N]
where
    T: FastZeroizable + ZeroizeMetadata + Copy,
{
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(|elem| elem.is_zeroized())
    }
}

// === === === === === === === === === ===
// Vec<T>
// === === === === === === === === === ===

impl<T> ZeroizeMetadata for Vec<T> {
    // ptr/len/capacity: never memset from outside
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> FastZeroizable for Vec<T>
where
    T: FastZeroizable + ZeroizeMetadata + Copy,
{
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        if T::CAN_BE_BULK_ZEROIZED {
            util::fast_zeroize_vec(self);
        } else {
            for elem in self.iter_mut() {
                elem.fast_zeroize();
            }
            util::zeroize_spare_capacity(self);
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Vec<T> {
    /// Checks elements and spare capacity.
    ///
    /// Only meaningful after `fast_zeroize()`: a fresh allocation may carry
    /// garbage in its spare capacity.
    fn is_zeroized(&self) -> bool {
        self.iter().all(|elem| elem.is_zeroized()) && util::is_spare_capacity_zeroized(self)
    }
}

// === === === === === === === === === ===
// String
// === === === === === === === === === ===

impl ZeroizeMetadata for String {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for String {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        // SAFETY: all-zero bytes are valid UTF-8 (NUL characters).
        unsafe {
            util::fast_zeroize_vec(self.as_mut_vec());
        }
        compiler_fence(Ordering::SeqCst);
    }
}

impl ZeroizationProbe for String {
    fn is_zeroized(&self) -> bool {
        util::is_slice_zeroized(self.as_bytes())
    }
}
