// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for sealtext-buffer.

use sealtext_rand::EntropyError;
use thiserror::Error;

/// Errors that can occur when working with a [`ProtectedText`](crate::ProtectedText).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// No key could be generated for the buffer.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),

    /// A splice reached past the end of the buffer.
    #[error("range {at}+{count} out of bounds for length {len}")]
    OutOfRange {
        /// First character position of the range.
        at: usize,
        /// Number of characters in the range.
        count: usize,
        /// Buffer length in characters.
        len: usize,
    },

    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// Decrypted content failed to decode.
    #[error("protected content is corrupted")]
    Corrupted,
}
