// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Dispatchers, sinks, estimators and user-input drivers for tests.

mod dispatchers;
mod estimators;
mod input;
mod sinks;

pub use dispatchers::{InlineDispatcher, QueueDispatcher};
pub use estimators::GatedEstimator;
pub use input::{backspace, delete_forward, type_text};
pub use sinks::{RecordingSink, weak_sink};
