// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! sealtext_guard - Process hardening for password entry
//!
//! Typed passwords live in process memory for as long as the field is open.
//! [`harden_process`] keeps that memory out of core dumps and away from
//! ptrace on Linux by applying `PR_SET_DUMPABLE = 0` and `RLIMIT_CORE = 0`
//! exactly once per process.

#![warn(missing_docs)]


use std::sync::OnceLock;

use tracing::{debug, warn};

/// Outcome of [`harden_process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardeningStatus {
    /// `prctl(PR_SET_DUMPABLE, 0)` succeeded: no core dumps, no ptrace
    /// attach by non-root peers.
    pub dumpable_disabled: bool,

    /// `setrlimit(RLIMIT_CORE, 0)` succeeded.
    pub core_limit_zeroed: bool,
}

impl HardeningStatus {
    /// Returns `true` if at least one protection is active.
    pub fn is_applied(&self) -> bool {
        self.dumpable_disabled || self.core_limit_zeroed
    }

    /// Returns `true` if every protection is active.
    pub fn is_fully_applied(&self) -> bool {
        self.dumpable_disabled && self.core_limit_zeroed
    }
}

static STATUS: OnceLock<HardeningStatus> = OnceLock::new();

/// Applies process-level protections on first call and returns the result.
///
/// Later calls, from any thread, return the cached status without touching
/// the process again. On platforms other than Linux nothing is applied and
/// both flags are `false`.
///
/// ```
/// use sealtext_guard::harden_process;
///
/// let status = harden_process();
/// assert_eq!(status, harden_process());
/// ```
pub fn harden_process() -> HardeningStatus {
    *STATUS.get_or_init(apply)
}

fn apply() -> HardeningStatus {
    let status = HardeningStatus {
        dumpable_disabled: prctl_set_not_dumpable(),
        core_limit_zeroed: setrlimit_core_zero(),
    };

    if status.is_fully_applied() {
        debug!("process hardening applied");
    } else {
        warn!(
            dumpable_disabled = status.dumpable_disabled,
            core_limit_zeroed = status.core_limit_zeroed,
            "process hardening incomplete"
        );
    }

    status
}

#[cfg(target_os = "linux")]
fn prctl_set_not_dumpable() -> bool {
    // SAFETY: PR_SET_DUMPABLE takes plain integer arguments.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) == 0 }
}

#[cfg(not(target_os = "linux"))]
fn prctl_set_not_dumpable() -> bool {
    false
}

#[cfg(target_os = "linux")]
fn setrlimit_core_zero() -> bool {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: `limit` is a valid rlimit for the duration of the call.
    unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) == 0 }
}

#[cfg(not(target_os = "linux"))]
fn setrlimit_core_zero() -> bool {
    false
}
