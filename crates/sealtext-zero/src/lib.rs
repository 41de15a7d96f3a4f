// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sealtext_zero
//!
//! Zeroization primitives used by every sealtext crate that touches password
//! material.
//!
//! ## Core Types
//!
//! - [`ZeroizingGuard`]: owns a sensitive value on the heap and wipes it on drop
//! - [`ZeroizeOnDropSentinel`]: shared flag proving that a wipe happened
//!
//! ## Traits
//!
//! - [`FastZeroizable`]: in-place wipe (dyn-compatible)
//! - [`ZeroizeMetadata`]: whether a type can be wiped with a single memset
//! - [`ZeroizationProbe`]: runtime check that a value is all zeros
//! - [`AssertZeroizeOnDrop`]: test hook verifying wipe-on-drop
//!
//! ## Example
//!
//! ```rust
//! use sealtext_zero::ZeroizingGuard;
//!
//! let mut typed: Vec<char> = "hunter2".chars().collect();
//! let guard = ZeroizingGuard::from_mut(&mut typed);
//!
//! assert!(typed.is_empty());
//! assert_eq!(guard.len(), 7);
//! // guard drops here, the chars are overwritten with '\0' first
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod collections;
mod primitives;
mod traits;
mod util;
mod zeroize_on_drop_sentinel;
mod zeroizing_guard;

pub use assert::assert_zeroize_on_drop;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeMetadata};
pub use util::{
    constant_time_eq, fast_zeroize_slice, fast_zeroize_vec, is_slice_zeroized,
    is_spare_capacity_zeroized, zeroize_primitive, zeroize_spare_capacity,
};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
pub use zeroizing_guard::ZeroizingGuard;
