// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::quality::{CharSpaceEstimator, StrengthEstimator};

/// Estimator whose workers block until the test opens the gate.
///
/// Lets tests hold estimations in flight and observe de-duplication and
/// stale-result handling deterministically.
#[derive(Debug, Default)]
pub struct GatedEstimator {
    open: Mutex<bool>,
    opened: Condvar,
    started: AtomicUsize,
    finished: AtomicUsize,
}

impl GatedEstimator {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets every current and future estimation complete.
    pub fn open(&self) {
        *self.open.lock().unwrap_or_else(PoisonError::into_inner) = true;
        self.opened.notify_all();
    }

    /// Number of estimations that have started.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of estimations that have finished.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// Spins until `count` estimations started. Returns `false` on timeout.
    pub fn wait_started(&self, count: usize, timeout: Duration) -> bool {
        wait_until(|| self.started() >= count, timeout)
    }

    /// Spins until `count` estimations finished. Returns `false` on timeout.
    pub fn wait_finished(&self, count: usize, timeout: Duration) -> bool {
        wait_until(|| self.finished() >= count, timeout)
    }
}

impl StrengthEstimator for GatedEstimator {
    fn estimate(&self, password: &[char]) -> u32 {
        self.started.fetch_add(1, Ordering::SeqCst);

        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        while !*open {
            open = self
                .opened
                .wait(open)
                .unwrap_or_else(PoisonError::into_inner);
        }
        drop(open);

        let bits = CharSpaceEstimator.estimate(password);
        self.finished.fetch_add(1, Ordering::SeqCst);
        bits
    }
}

fn wait_until(condition: impl Fn() -> bool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;

    while !condition() {
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    true
}
