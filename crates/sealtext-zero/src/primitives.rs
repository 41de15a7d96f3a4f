// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for scalar types.

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
use crate::util::zeroize_primitive;

macro_rules! impl_zeroize_primitive {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $t {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $t {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    zeroize_primitive(self);
                }
            }

            impl ZeroizationProbe for $t {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_zeroize_primitive!(
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    bool => false,
    char => '\0',
);
