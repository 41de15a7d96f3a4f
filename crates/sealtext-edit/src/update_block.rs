// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter that suppresses change notifications while the engine
/// writes to the control itself.
///
/// Platform adapters that receive native change events synchronously while
/// [`EditControl::set_text`](crate::EditControl::set_text) runs keep a clone
/// and drop those events when [`is_blocked`](Self::is_blocked) is `true`.
/// Not `Send`: it lives on the UI thread with the engine.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlock(Rc<Cell<u32>>);

impl UpdateBlock {
    /// Blocks notifications until the returned guard is dropped. Nests.
    pub fn enter(&self) -> UpdateBlockGuard {
        self.0.set(self.0.get() + 1);
        UpdateBlockGuard(Rc::clone(&self.0))
    }

    /// Returns `true` while at least one guard is alive.
    pub fn is_blocked(&self) -> bool {
        self.0.get() > 0
    }
}

/// RAII guard returned by [`UpdateBlock::enter`].
#[derive(Debug)]
pub struct UpdateBlockGuard(Rc<Cell<u32>>);

impl Drop for UpdateBlockGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
