// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel,
    assert_zeroize_on_drop,
};

#[test]
fn test_sentinel_zeroizes_clone() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let observer = sentinel.clone();

    assert!(!observer.is_zeroized());
    sentinel.fast_zeroize();
    assert!(observer.is_zeroized());
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    sentinel.fast_zeroize();
    assert!(sentinel.is_zeroized());

    sentinel.reset();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_sentinel_on_custom_drop() {
    struct TypedChars {
        chars: Vec<char>,
        __sentinel: ZeroizeOnDropSentinel,
    }

    impl Drop for TypedChars {
        fn drop(&mut self) {
            self.chars.fast_zeroize();
            self.__sentinel.fast_zeroize();
        }
    }

    impl AssertZeroizeOnDrop for TypedChars {
        fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
            self.__sentinel.clone()
        }

        fn assert_zeroize_on_drop(self) {
            assert_zeroize_on_drop(self);
        }
    }

    let typed = TypedChars {
        chars: vec!['a', 'b', 'c'],
        __sentinel: ZeroizeOnDropSentinel::default(),
    };
    let observer = typed.clone_sentinel();

    typed.assert_zeroize_on_drop();

    assert!(observer.is_zeroized());
}

#[test]
#[should_panic]
fn test_assert_zeroize_on_drop_panics_without_wipe() {
    struct Leaky {
        __sentinel: ZeroizeOnDropSentinel,
    }

    impl AssertZeroizeOnDrop for Leaky {
        fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
            self.__sentinel.clone()
        }

        fn assert_zeroize_on_drop(self) {
            assert_zeroize_on_drop(self);
        }
    }

    Leaky {
        __sentinel: ZeroizeOnDropSentinel::default(),
    }
    .assert_zeroize_on_drop();
}
