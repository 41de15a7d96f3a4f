// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

#[test]
fn test_primitives_are_bulk_zeroizable() {
    assert!(u8::CAN_BE_BULK_ZEROIZED);
    assert!(u16::CAN_BE_BULK_ZEROIZED);
    assert!(u32::CAN_BE_BULK_ZEROIZED);
    assert!(char::CAN_BE_BULK_ZEROIZED);
    assert!(bool::CAN_BE_BULK_ZEROIZED);
}

#[test]
fn test_char_fast_zeroize() {
    let mut ch = '\u{25CF}';
    assert!(!ch.is_zeroized());

    ch.fast_zeroize();

    assert!(ch.is_zeroized());
    assert_eq!(ch, '\0');
}

#[test]
fn test_integer_and_bool_fast_zeroize() {
    let mut len = 42usize;
    let mut seed = 0xDEAD_BEEF_u64;
    let mut flag = true;

    len.fast_zeroize();
    seed.fast_zeroize();
    flag.fast_zeroize();

    assert_eq!(len, 0);
    assert_eq!(seed, 0);
    assert!(!flag);
}
