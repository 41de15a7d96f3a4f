// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level wipe and compare helpers.

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Zeroizes a single primitive value using a volatile write.
///
/// Valid for every type where all-zeros is a valid representation
/// (integers, `bool`, `char`).
///
/// ```
/// use sealtext_zero::zeroize_primitive;
///
/// let mut ch = 'k';
/// zeroize_primitive(&mut ch);
/// assert_eq!(ch, '\0');
/// ```
#[inline(always)]
pub fn zeroize_primitive<T: Copy>(val: &mut T) {
    // SAFETY: callers only instantiate this for primitives whose all-zero
    // pattern is valid; write_volatile keeps the store from being elided.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Bulk memset of a slice, kept alive by a volatile read.
///
/// ```
/// use sealtext_zero::fast_zeroize_slice;
///
/// let mut units = [0xD83Du16, 0xDE00];
/// fast_zeroize_slice(&mut units);
/// assert_eq!(units, [0, 0]);
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Copy>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the slice is valid for `byte_len` bytes and `T: Copy` has no
    // drop glue; only instantiated for primitives.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr().cast::<u8>(), 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr().cast::<u8>());
    }
}

/// Bulk memset of a `Vec` over its whole allocation, spare capacity included.
///
/// ```
/// use sealtext_zero::{fast_zeroize_vec, is_spare_capacity_zeroized};
///
/// let mut bytes = b"correct horse".to_vec();
/// bytes.truncate(7);
///
/// fast_zeroize_vec(&mut bytes);
/// assert!(bytes.iter().all(|&b| b == 0));
/// assert!(is_spare_capacity_zeroized(&bytes));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T: Copy>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    // SAFETY: the allocation is valid for `capacity` elements.
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr().cast::<u8>(), 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr().cast::<u8>());
    }
}

/// Zeroizes only the region between `len` and `capacity`.
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    let byte_len = spare * core::mem::size_of::<T>();
    // SAFETY: `[len, capacity)` lies inside the allocation and holds no
    // initialized `T`, so writing bytes there cannot break an invariant.
    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len()).cast::<u8>();
        core::ptr::write_bytes(spare_ptr, 0, byte_len);
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Returns `true` if every byte of `slice` is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the spare capacity of `vec` is all zeros.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len = vec.len();
    let cap = vec.capacity();

    if cap == len {
        return true;
    }

    let len_bytes = len * core::mem::size_of::<T>();
    let cap_bytes = cap * core::mem::size_of::<T>();

    // SAFETY: reads bytes only, inside the allocation, never constructs `T`.
    unsafe {
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        core::slice::from_raw_parts(spare_ptr, cap_bytes - len_bytes)
            .iter()
            .all(|&b| b == 0)
    }
}

/// Constant-time equality for byte slices.
///
/// Length mismatches return `false` immediately; lengths are not secret
/// here (a masked field shows one glyph per character).
///
/// ```
/// use sealtext_zero::constant_time_eq;
///
/// assert!(constant_time_eq(b"newpass", b"newpass"));
/// assert!(!constant_time_eq(b"newpass", b"newpasS"));
/// assert!(!constant_time_eq(b"newpass", b"newpas"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
