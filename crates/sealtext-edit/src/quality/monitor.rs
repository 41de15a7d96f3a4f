// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread;

use sha2::{Digest, Sha256};
use tracing::{debug, trace, warn};

use sealtext_rand::{EntropySource, SystemEntropySource};
use sealtext_zero::{FastZeroizable, ZeroizingGuard};

use crate::config::QualityConfig;
use crate::error::EditError;
use crate::quality::estimator::{QualityReport, StrengthEstimator};

/// Unit of work marshalled onto the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Posts work to the thread that owns the UI.
///
/// Implementations typically wrap the toolkit's "invoke on UI thread"
/// primitive.
pub trait UiDispatcher: Send + Sync {
    /// Schedules `task` to run on the UI thread.
    fn post(&self, task: UiTask);
}

/// Receives strength results on the UI thread.
pub trait QualitySink: Send + Sync {
    /// Called with the estimate for the most recently submitted content.
    fn on_quality(&self, report: QualityReport);
}

/// What [`QualityMonitor::submit`] did with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Estimation is disabled by configuration (or no monitor is attached).
    Disabled,
    /// A worker was started for this content.
    Started,
    /// Identical content is already being estimated; its result will be
    /// delivered instead.
    AlreadyRunning,
}

const SALT_SIZE: usize = 32;

type ContentHash = [u8; 32];

#[derive(Default)]
struct MonitorState {
    latest: Option<ContentHash>,
    in_flight: HashSet<ContentHash>,
}

struct Shared {
    config: QualityConfig,
    salt: [u8; SALT_SIZE],
    estimator: Arc<dyn StrengthEstimator>,
    dispatcher: Arc<dyn UiDispatcher>,
    sink: Weak<dyn QualitySink>,
    state: Mutex<MonitorState>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_latest(&self, hash: &ContentHash) -> bool {
        self.state().latest.as_ref() == Some(hash)
    }

    fn complete(shared: &Arc<Self>, hash: ContentHash, bits: u32) {
        let is_latest = {
            let mut state = shared.state();
            state.in_flight.remove(&hash);
            state.latest == Some(hash)
        };

        if !is_latest {
            trace!("stale quality estimate dropped");
            return;
        }

        let weak_shared = Arc::downgrade(shared);
        let sink = Weak::clone(&shared.sink);

        shared.dispatcher.post(Box::new(move || {
            let Some(shared) = weak_shared.upgrade() else {
                trace!("quality monitor gone before delivery");
                return;
            };

            if !shared.is_latest(&hash) {
                trace!("stale quality estimate dropped on UI thread");
                return;
            }

            let Some(sink) = sink.upgrade() else {
                debug!("quality sink gone before delivery");
                return;
            };

            sink.on_quality(QualityReport::from_bits(bits));
        }));
    }
}

/// Membership of one hash in the in-flight set, owned by its worker.
///
/// Dropping the entry without completing it (worker panic, failed spawn)
/// still removes the hash, so the content can be submitted again.
struct InFlightEntry {
    shared: Arc<Shared>,
    hash: ContentHash,
    completed: bool,
}

impl InFlightEntry {
    fn complete(mut self, bits: u32) {
        self.completed = true;
        Shared::complete(&self.shared, self.hash, bits);
    }
}

impl Drop for InFlightEntry {
    fn drop(&mut self) {
        if !self.completed {
            warn!("quality estimation aborted");
            self.shared.state().in_flight.remove(&self.hash);
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.salt.fast_zeroize();
    }
}

/// Runs strength estimation off the UI thread.
///
/// Content is identified by a salted SHA-256 hash, never kept in clear:
///
/// - Submitting content that is already being estimated starts nothing
/// - A finished estimate is delivered only if its content is still the
///   latest submitted and [`content_changed`](Self::content_changed) was not
///   called since; other results are dropped
/// - Delivery goes through the [`UiDispatcher`] to a weakly held
///   [`QualitySink`], so a closed dialog simply receives nothing
///
/// Cloning yields another handle to the same monitor.
#[derive(Clone)]
pub struct QualityMonitor {
    shared: Arc<Shared>,
}

impl QualityMonitor {
    /// Creates a monitor with a salt drawn from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Entropy`] if no salt can be generated.
    pub fn new(
        config: QualityConfig,
        estimator: Arc<dyn StrengthEstimator>,
        dispatcher: Arc<dyn UiDispatcher>,
        sink: Weak<dyn QualitySink>,
    ) -> Result<Self, EditError> {
        Self::with_entropy(config, estimator, dispatcher, sink, &SystemEntropySource {})
    }

    /// Creates a monitor with a salt drawn from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Entropy`] if `entropy` fails.
    pub fn with_entropy<E: EntropySource + ?Sized>(
        config: QualityConfig,
        estimator: Arc<dyn StrengthEstimator>,
        dispatcher: Arc<dyn UiDispatcher>,
        sink: Weak<dyn QualitySink>,
        entropy: &E,
    ) -> Result<Self, EditError> {
        let mut salt = [0u8; SALT_SIZE];
        entropy.fill_bytes(&mut salt)?;

        debug!(enabled = config.enabled, "quality monitor created");

        let monitor = Self {
            shared: Arc::new(Shared {
                config,
                salt,
                estimator,
                dispatcher,
                sink,
                state: Mutex::new(MonitorState::default()),
            }),
        };
        salt.fast_zeroize();

        Ok(monitor)
    }

    /// Queues `password` for estimation.
    ///
    /// The characters are copied into a zeroizing buffer owned by the
    /// worker; the caller may wipe its own copy right away.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::WorkerSpawn`] if the worker thread could not be
    /// started.
    pub fn submit(&self, password: &[char]) -> Result<Submission, EditError> {
        if !self.shared.config.enabled {
            return Ok(Submission::Disabled);
        }

        let hash = self.content_hash(password);

        {
            let mut state = self.shared.state();
            state.latest = Some(hash);

            if !state.in_flight.insert(hash) {
                trace!("identical content already being estimated");
                return Ok(Submission::AlreadyRunning);
            }
        }

        let mut copy = Vec::with_capacity(password.len());
        copy.extend_from_slice(password);
        let chars = ZeroizingGuard::from_mut(&mut copy);

        let entry = InFlightEntry {
            shared: Arc::clone(&self.shared),
            hash,
            completed: false,
        };
        let spawned = thread::Builder::new()
            .name("sealtext-quality".into())
            .spawn(move || {
                let bits = entry.shared.estimator.estimate(&chars);
                drop(chars);

                entry.complete(bits);
            });

        if let Err(err) = spawned {
            // The closure, and with it the entry, was dropped: the hash is
            // no longer in flight.
            warn!(error = %err, "failed to spawn quality worker");
            return Err(EditError::WorkerSpawn);
        }

        trace!(len = password.len(), "quality estimation started");
        Ok(Submission::Started)
    }

    /// Marks the content as changed since the last submission.
    ///
    /// Results still running for earlier content are dropped instead of
    /// delivered, until the new content is submitted.
    pub fn content_changed(&self) {
        if self.shared.state().latest.take().is_some() {
            trace!("pending quality estimates invalidated");
        }
    }

    /// Number of estimations currently running.
    pub fn in_flight(&self) -> usize {
        self.shared.state().in_flight.len()
    }

    /// Returns `true` if estimation is enabled.
    pub fn is_enabled(&self) -> bool {
        self.shared.config.enabled
    }

    fn content_hash(&self, password: &[char]) -> ContentHash {
        let mut utf8 = ZeroizingGuard::new(Vec::with_capacity(password.len() * 4));
        let mut scratch = [0u8; 4];

        for ch in password {
            utf8.extend_from_slice(ch.encode_utf8(&mut scratch).as_bytes());
        }
        scratch.fast_zeroize();

        let mut hasher = Sha256::new();
        hasher.update(self.shared.salt);
        hasher.update(utf8.as_slice());

        hasher.finalize().into()
    }
}

impl core::fmt::Debug for QualityMonitor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QualityMonitor")
            .field("enabled", &self.shared.config.enabled)
            .field("in_flight", &self.in_flight())
            .finish_non_exhaustive()
    }
}
