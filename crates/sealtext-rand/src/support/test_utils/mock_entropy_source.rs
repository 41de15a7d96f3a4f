// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behaviour for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Delegates to the system source.
    None,
    /// Fills every request with the given byte, for reproducible streams.
    Constant(u8),
    /// Every call fails.
    FailAlways,
    /// The Nth call fails (1-indexed).
    FailAtNthFillBytes(usize),
}

/// Entropy source that can simulate failures or produce fixed output.
///
/// Thread-safe, so it can be handed to worker threads just like
/// [`SystemEntropySource`].
#[derive(Debug)]
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: AtomicUsize,
}

impl MockEntropySource {
    /// Creates a new mock with the given behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            fill_bytes_count: AtomicUsize::new(0),
        }
    }

    /// Changes the behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.fill_bytes_count.store(0, Ordering::SeqCst);
    }

    /// Number of `fill_bytes` calls so far.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.load(Ordering::SeqCst)
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::Constant(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current + 1 == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.inner.fill_bytes(dest),
        }
    }
}
