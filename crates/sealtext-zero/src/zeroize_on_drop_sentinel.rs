// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Runtime proof that a value was wiped before it was dropped.
///
/// Wraps a shared flag (`Arc<AtomicBool>`) that starts out pristine. Calling
/// [`fast_zeroize`](FastZeroizable::fast_zeroize) marks it, and every clone
/// observes the mark, so a test can keep a clone, drop the owner and check.
///
/// ```rust
/// use sealtext_zero::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Puts the sentinel back into the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::SeqCst) == other.0.load(Ordering::SeqCst)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}
