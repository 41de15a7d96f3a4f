// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sealtext_buffer
//!
//! [`ProtectedText`] is the backing store behind a masked password field: the
//! real characters the user typed, while the on-screen control only holds
//! mask glyphs.
//!
//! - Content is kept encrypted (ChaCha20 keystream under a per-buffer key,
//!   fresh nonce on every mutation)
//! - Plaintext only leaves the buffer inside a [`ZeroizingGuard`](sealtext_zero::ZeroizingGuard)
//!   or for the duration of an [`open`](ProtectedText::open) closure
//! - Every intermediate copy is wiped, and the whole buffer is wiped on drop
//! - Positions and lengths are counted in `char`s
//!
//! ## Example
//!
//! ```rust
//! use sealtext_buffer::{BufferError, ProtectedText};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut text = ProtectedText::new()?;
//!
//!     text.set_from_str("abc");
//!     text.splice(3, 0, "d")?;
//!
//!     assert_eq!(text.len(), 4);
//!     assert_eq!(text.read_utf8().as_slice(), b"abcd");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod protected_text;

pub use error::BufferError;
pub use protected_text::ProtectedText;
