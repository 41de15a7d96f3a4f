// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::quality::{QualityReport, QualitySink};

/// Sink that remembers every report it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<QualityReport>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far, oldest first.
    pub fn reports(&self) -> Vec<QualityReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Weak trait-object handle to `sink`, as the quality monitor takes it.
pub fn weak_sink(sink: &Arc<RecordingSink>) -> Weak<dyn QualitySink> {
    let sink_dyn: Arc<dyn QualitySink> = sink.clone();
    Arc::downgrade(&sink_dyn)
}

impl QualitySink for RecordingSink {
    fn on_quality(&self, report: QualityReport) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report);
    }
}
