// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Password strength estimation and its background delivery.

mod estimator;
mod monitor;

pub use estimator::{CharSpaceEstimator, QualityReport, StrengthEstimator};
pub use monitor::{QualityMonitor, QualitySink, Submission, UiDispatcher, UiTask};
