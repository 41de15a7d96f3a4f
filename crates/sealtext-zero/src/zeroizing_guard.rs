// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for owned values that auto-zeroizes on drop.

use alloc::boxed::Box;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use crate::assert::assert_zeroize_on_drop;
use crate::traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
use crate::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Heap-owned sensitive value that is wiped when the guard drops.
///
/// This is how plaintext leaves a protected buffer: decrypted UTF-8 bytes,
/// decoded `char`s and estimator inputs are all handed out inside a
/// `ZeroizingGuard`, so forgetting to clear them is not possible.
///
/// - Stores `Box<T>` so moving the guard never copies the secret
/// - `from_mut` swaps the source with `T::default()` and wipes the source
/// - `Debug` is redacted
///
/// ```rust
/// use sealtext_zero::{ZeroizationProbe, ZeroizingGuard};
///
/// fn decode() -> ZeroizingGuard<Vec<u8>> {
///     ZeroizingGuard::new(b"abcd".to_vec())
/// }
///
/// let bytes = decode();
/// assert_eq!(bytes.as_slice(), b"abcd");
/// assert!(!bytes.is_zeroized());
/// ```
pub struct ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    inner: Box<T>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<T> fmt::Debug for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingGuard]")
    }
}

impl<T> ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    /// Takes ownership of `value`.
    ///
    /// The value is moved into a fresh box; prefer [`from_mut`](Self::from_mut)
    /// when the source location must be wiped as well.
    pub fn new(value: T) -> Self {
        Self {
            inner: Box::new(value),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Moves the value out of `value`, leaving a wiped default behind.
    pub fn from_mut(value: &mut T) -> Self {
        let mut boxed = Box::new(T::default());
        mem::swap(&mut *boxed, value);
        value.fast_zeroize();

        Self {
            inner: boxed,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Creates a guard around `T::default()`.
    #[inline(always)]
    pub fn from_default() -> Self {
        Self::new(T::default())
    }

    /// Releases the value without wiping it.
    ///
    /// The caller becomes responsible for zeroizing the returned value.
    pub fn into_inner(mut self) -> T {
        let value = mem::take(&mut *self.inner);
        // The box now holds a default value; mark the guard as handled.
        self.__sentinel.fast_zeroize();
        value
    }
}

impl<T> Deref for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> FastZeroizable for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn fast_zeroize(&mut self) {
        self.inner.fast_zeroize();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.fast_zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T> ZeroizationProbe for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<T> AssertZeroizeOnDrop for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

impl<T> Drop for ZeroizingGuard<T>
where
    T: FastZeroizable + ZeroizationProbe + Default,
{
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
