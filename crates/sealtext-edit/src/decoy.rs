// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory decoys: look-alike strings kept next to the real password.
//!
//! A memory scraper that finds password-shaped strings in the heap finds
//! several, of the same length and character class, regenerated whenever the
//! real one changes.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use sealtext_rand::{CryptoRandomStream, EntropySource, SystemEntropySource};
use sealtext_zero::FastZeroizable;

use crate::config::DecoyConfig;
use crate::error::EditError;

/// Character class a decoy is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoyAlphabet {
    /// `A-Z`, `a-z`, `0-9`.
    Alphanumeric,
    /// Printable ASCII punctuation and symbols.
    Special,
    /// Letters from the BMP outside ASCII (Latin-1, Greek, Cyrillic).
    Wide,
}

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x00FF),
    (0x0391, 0x03A1),
    (0x03A3, 0x03A9),
    (0x03B1, 0x03C9),
    (0x0410, 0x044F),
];

impl DecoyAlphabet {
    const ALL: [Self; 3] = [Self::Alphanumeric, Self::Special, Self::Wide];

    /// Returns `true` if `ch` belongs to this alphabet.
    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Alphanumeric => ch.is_ascii_alphanumeric(),
            Self::Special => ch.is_ascii() && SPECIAL.contains(&(ch as u8)),
            Self::Wide => {
                let cp = u32::from(ch);
                WIDE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
            }
        }
    }

    fn draw(self, stream: &mut CryptoRandomStream) -> char {
        match self {
            Self::Alphanumeric => char::from(ALPHANUMERIC[stream.next_index(ALPHANUMERIC.len())]),
            Self::Special => char::from(SPECIAL[stream.next_index(SPECIAL.len())]),
            Self::Wide => {
                let total: u32 = WIDE_RANGES.iter().map(|&(lo, hi)| hi - lo + 1).sum();
                let mut pick = stream.next_index(total as usize) as u32;

                for &(lo, hi) in WIDE_RANGES {
                    let size = hi - lo + 1;
                    if pick < size {
                        return char::from_u32(lo + pick).unwrap_or('\u{00C0}');
                    }
                    pick -= size;
                }

                '\u{00C0}'
            }
        }
    }
}

struct PoolState {
    decoys: Vec<String>,
    generation: u64,
}

struct Shared {
    state: Mutex<PoolState>,
    refreshed: Condvar,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Background-regenerated set of decoy strings.
///
/// [`request_refresh`](Self::request_refresh) only sends a message; a
/// dedicated worker thread draws the new decoys from a ChaCha20 stream and
/// swaps them in under a mutex. Bursts of requests collapse into one
/// refresh for the latest length. The worker exits when the last handle is
/// dropped.
///
/// Each decoy is `len` or `len + 1` characters long (capped at
/// [`DecoyConfig::max_len`]) and drawn from one [`DecoyAlphabet`].
#[derive(Clone)]
pub struct DecoyPool {
    config: DecoyConfig,
    requests: Sender<usize>,
    shared: Arc<Shared>,
}

impl DecoyPool {
    /// Starts a pool seeded from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::WorkerSpawn`] if the worker cannot be started.
    pub fn spawn(config: DecoyConfig) -> Result<Self, EditError> {
        Self::spawn_with_entropy(config, Arc::new(SystemEntropySource {}))
    }

    /// Starts a pool seeded from `entropy`.
    ///
    /// The worker seeds itself; if that fails, every refresh is logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::WorkerSpawn`] if the worker cannot be started.
    pub fn spawn_with_entropy(
        config: DecoyConfig,
        entropy: Arc<dyn EntropySource>,
    ) -> Result<Self, EditError> {
        let (requests, inbox) = mpsc::channel();
        let shared = Arc::new(Shared {
            state: Mutex::new(PoolState {
                decoys: Vec::new(),
                generation: 0,
            }),
            refreshed: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker_config = config.clone();

        thread::Builder::new()
            .name("sealtext-decoys".into())
            .spawn(move || run_worker(worker_config, entropy, inbox, worker_shared))
            .map_err(|err| {
                warn!(error = %err, "failed to spawn decoy worker");
                EditError::WorkerSpawn
            })?;

        debug!(
            enabled = config.enabled,
            count = config.count,
            "decoy pool started"
        );

        Ok(Self {
            config,
            requests,
            shared,
        })
    }

    /// Asks the worker to regenerate decoys for a buffer of `len` characters.
    ///
    /// Never blocks. No-op when decoys are disabled.
    pub fn request_refresh(&self, len: usize) {
        if !self.config.enabled {
            return;
        }

        if self.requests.send(len).is_err() {
            warn!("decoy worker is gone, refresh skipped");
        }
    }

    /// Number of completed refreshes.
    pub fn generation(&self) -> u64 {
        self.shared.state().generation
    }

    /// Waits until at least `generation` refreshes completed.
    ///
    /// Returns `false` on timeout. A timeout too large to represent as a
    /// deadline waits without one.
    pub fn wait_for_generation(&self, generation: u64, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut state = self.shared.state();

        while state.generation < generation {
            state = match deadline {
                None => self
                    .shared
                    .refreshed
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner),
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }

                    match self.shared.refreshed.wait_timeout(state, deadline - now) {
                        Ok((guard, _)) => guard,
                        Err(poisoned) => poisoned.into_inner().0,
                    }
                }
            };
        }

        true
    }

    /// Character lengths of the current decoys.
    pub fn decoy_lengths(&self) -> Vec<usize> {
        self.shared
            .state()
            .decoys
            .iter()
            .map(|decoy| decoy.chars().count())
            .collect()
    }

    /// Runs `f` over the current decoys.
    pub fn inspect<R>(&self, f: impl FnOnce(&[String]) -> R) -> R {
        f(&self.shared.state().decoys)
    }

    /// Settings the pool was started with.
    pub fn config(&self) -> &DecoyConfig {
        &self.config
    }
}

impl core::fmt::Debug for DecoyPool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecoyPool")
            .field("config", &self.config)
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

fn run_worker(
    config: DecoyConfig,
    entropy: Arc<dyn EntropySource>,
    inbox: Receiver<usize>,
    shared: Arc<Shared>,
) {
    let mut stream = match CryptoRandomStream::from_entropy(entropy.as_ref()) {
        Ok(stream) => Some(stream),
        Err(err) => {
            warn!(error = %err, "decoy worker could not seed, refreshes disabled");
            None
        }
    };

    while let Ok(mut len) = inbox.recv() {
        // Collapse a burst of keystrokes into one refresh.
        loop {
            match inbox.try_recv() {
                Ok(next) => len = next,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        let Some(stream) = stream.as_mut() else {
            warn!("decoy refresh skipped, no random stream");
            continue;
        };

        let fresh = generate(&config, len, stream);

        let mut state = shared.state();
        let mut stale = std::mem::replace(&mut state.decoys, fresh);
        state.generation += 1;
        drop(state);
        shared.refreshed.notify_all();

        for decoy in stale.iter_mut() {
            decoy.fast_zeroize();
        }

        trace!(len, "decoys refreshed");
    }

    debug!("decoy worker stopped");
}

fn generate(config: &DecoyConfig, len: usize, stream: &mut CryptoRandomStream) -> Vec<String> {
    (0..config.count)
        .map(|_| {
            let decoy_len = (len + stream.next_index(2)).min(config.max_len);
            let alphabet = DecoyAlphabet::ALL[stream.next_index(DecoyAlphabet::ALL.len())];

            (0..decoy_len).map(|_| alphabet.draw(stream)).collect()
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn generate_for_test(
    config: &DecoyConfig,
    len: usize,
    stream: &mut CryptoRandomStream,
) -> Vec<String> {
    generate(config, len, stream)
}
