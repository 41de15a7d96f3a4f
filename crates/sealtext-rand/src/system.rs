// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

type FillFn = dyn Fn(&mut [u8]) -> Result<(), GetRandomError>;

/// The operating system CSPRNG, reached through `getrandom`.
///
/// Every buffer key, decoy seed and quality salt in sealtext ultimately
/// comes from here. Zero-sized, so it can be created wherever a source is
/// needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Runs `fill` and folds any platform error into
    /// [`EntropyError::EntropyNotAvailable`]. Split out so tests can inject
    /// a failing `fill`.
    pub(crate) fn fill_bytes_with(fill: &FillFn, dest: &mut [u8]) -> Result<(), EntropyError> {
        match fill(dest) {
            Ok(()) => Ok(()),
            Err(_) => {
                dest.fill(0);
                Err(EntropyError::EntropyNotAvailable)
            }
        }
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
