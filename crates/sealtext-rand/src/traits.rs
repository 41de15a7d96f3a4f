// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// `Send + Sync` so a single source can be shared with the decoy and quality
/// worker threads.
pub trait EntropySource: Send + Sync {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source cannot
    /// produce random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
