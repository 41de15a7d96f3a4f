// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sealtext_rand
//!
//! Randomness for the secure edit stack.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`CryptoRandomStream`]: ChaCha20 keystream seeded once from an entropy
//!   source, used to draw decoy characters and salts without a syscall per byte
//!
//! ## Example
//!
//! ```rust
//! use sealtext_rand::{CryptoRandomStream, EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut salt = [0u8; 16];
//! entropy.fill_bytes(&mut salt).expect("Failed to fill_bytes()");
//!
//! let mut stream = CryptoRandomStream::from_entropy(&entropy).expect("Failed to seed stream");
//! let index = stream.next_index(62);
//! assert!(index < 62);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod chacha20;
mod error;
mod stream;
mod system;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use chacha20::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, chacha20_xor};
pub use error::EntropyError;
pub use stream::CryptoRandomStream;
pub use system::SystemEntropySource;
pub use traits::EntropySource;
