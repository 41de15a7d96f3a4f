// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drive a [`SecureEdit`] the way a native text box would: edit the
//! control's text, then report the change.

use crate::control::{ControlEdit, MemoryControl};
use crate::secure_edit::SecureEdit;

fn report(edit: &mut SecureEdit<MemoryControl>, change: Option<ControlEdit>) {
    if let Some(change) = change {
        edit.on_display_text_changed(&change.text, change.selection.start, change.selection.len);
    }
}

/// Types `input` over the control's selection.
pub fn type_text(edit: &mut SecureEdit<MemoryControl>, input: &str) {
    let change = edit.control_mut().map(|control| control.type_text(input));
    report(edit, change);
}

/// Presses backspace.
pub fn backspace(edit: &mut SecureEdit<MemoryControl>) {
    let change = edit.control_mut().map(MemoryControl::backspace);
    report(edit, change);
}

/// Presses delete.
pub fn delete_forward(edit: &mut SecureEdit<MemoryControl>) {
    let change = edit.control_mut().map(MemoryControl::delete_forward);
    report(edit, change);
}
