// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata, is_spare_capacity_zeroized};

#[test]
fn test_vec_is_never_bulk_zeroizable() {
    assert!(!Vec::<u8>::CAN_BE_BULK_ZEROIZED);
    assert!(!Vec::<char>::CAN_BE_BULK_ZEROIZED);
    assert!(!String::CAN_BE_BULK_ZEROIZED);
}

#[test]
fn test_array_inherits_bulk_flag() {
    assert!(<[u8; 32]>::CAN_BE_BULK_ZEROIZED);
    assert!(<[char; 4]>::CAN_BE_BULK_ZEROIZED);
}

#[test]
fn test_vec_char_fast_zeroize_includes_spare_capacity() {
    let mut chars: Vec<char> = "hunter2".chars().collect();
    chars.truncate(3);

    chars.fast_zeroize();

    assert!(chars.iter().all(|&c| c == '\0'));
    assert!(is_spare_capacity_zeroized(&chars));
    assert!(chars.is_zeroized());
}

#[test]
fn test_string_fast_zeroize_keeps_length() {
    let mut s = String::from("newpass");

    s.fast_zeroize();

    assert_eq!(s.len(), 7);
    assert!(s.is_zeroized());
    assert!(s.chars().all(|c| c == '\0'));
}

#[test]
fn test_slice_and_array_fast_zeroize() {
    let mut key = [0xA5u8; 32];
    key.fast_zeroize();
    assert!(key.is_zeroized());

    let mut units = vec![0xD83Du16, 0xDE00, 0x0041];
    units.as_mut_slice().fast_zeroize();
    assert!(units.as_slice().is_zeroized());
}

#[test]
fn test_probe_detects_single_non_zero_element() {
    let mut bytes = vec![0u8; 16];
    bytes.fast_zeroize();
    assert!(bytes.is_zeroized());

    bytes[9] = 1;
    assert!(!bytes.is_zeroized());
}
