// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{
    constant_time_eq, fast_zeroize_vec, is_slice_zeroized, is_spare_capacity_zeroized,
    zeroize_spare_capacity,
};

#[test]
fn test_constant_time_eq_equal() {
    assert!(constant_time_eq(b"abcd", b"abcd"));
}

#[test]
fn test_constant_time_eq_empty() {
    assert!(constant_time_eq(b"", b""));
}

#[test]
fn test_constant_time_eq_single_byte_difference() {
    assert!(!constant_time_eq(&[0, 0, 0, 0, 0], &[0, 0, 1, 0, 0]));
}

#[test]
fn test_constant_time_eq_different_lengths() {
    assert!(!constant_time_eq(b"abcd", b"abc"));
    assert!(!constant_time_eq(b"", b"a"));
}

#[test]
fn test_zeroize_spare_capacity_leaves_elements() {
    let mut vec = vec![0xFFu8; 64];
    vec.truncate(8);

    zeroize_spare_capacity(&mut vec);

    assert!(vec.iter().all(|&b| b == 0xFF));
    assert!(is_spare_capacity_zeroized(&vec));
}

#[test]
fn test_fast_zeroize_vec_whole_allocation() {
    let mut vec = b"correct horse battery staple".to_vec();
    vec.truncate(4);

    fast_zeroize_vec(&mut vec);

    assert!(is_slice_zeroized(&vec));
    assert!(is_spare_capacity_zeroized(&vec));
}

proptest! {
    #[test]
    fn prop_constant_time_eq_matches_slice_eq(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert_eq!(constant_time_eq(&a, &b), a == b);
        prop_assert!(constant_time_eq(&a, &a.clone()));
    }
}
