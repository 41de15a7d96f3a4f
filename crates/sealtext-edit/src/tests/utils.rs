// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::time::{Duration, Instant};

use crate::control::MemoryControl;
use crate::secure_edit::SecureEdit;
use crate::selection::Selection;

pub(crate) const TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) fn attached(protected: bool) -> SecureEdit<MemoryControl> {
    let mut edit = SecureEdit::new().expect("Failed to new()");
    edit.attach(MemoryControl::new(), protected);
    edit
}

pub(crate) fn buffer_string(edit: &SecureEdit<MemoryControl>) -> String {
    String::from_utf8(edit.get_buffer_utf8().to_vec()).expect("Failed to from_utf8()")
}

pub(crate) fn display(edit: &SecureEdit<MemoryControl>) -> String {
    edit.control()
        .map(|control| control.text().to_string())
        .unwrap_or_default()
}

pub(crate) fn selection(edit: &SecureEdit<MemoryControl>) -> Selection {
    edit.control()
        .map(crate::EditControl::selection)
        .unwrap_or_default()
}

pub(crate) fn select(edit: &mut SecureEdit<MemoryControl>, selection: Selection) {
    if let Some(control) = edit.control_mut() {
        crate::EditControl::set_selection(control, selection);
    }
}

pub(crate) fn wait_until(condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + TIMEOUT;

    while !condition() {
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    true
}
