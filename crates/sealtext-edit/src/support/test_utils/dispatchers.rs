// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::{Mutex, PoisonError};

use crate::quality::{UiDispatcher, UiTask};

/// Runs posted tasks immediately on the posting thread.
#[derive(Debug, Default)]
pub struct InlineDispatcher;

impl UiDispatcher for InlineDispatcher {
    fn post(&self, task: UiTask) {
        task();
    }
}

/// Queues posted tasks until the test "pumps" the UI loop.
#[derive(Default)]
pub struct QueueDispatcher {
    tasks: Mutex<Vec<UiTask>>,
}

impl QueueDispatcher {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Runs every queued task on the calling thread, returning how many ran.
    pub fn run_pending(&self) -> usize {
        let tasks: Vec<UiTask> = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        let count = tasks.len();

        for task in tasks {
            task();
        }

        count
    }
}

impl UiDispatcher for QueueDispatcher {
    fn post(&self, task: UiTask) {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(task);
    }
}
