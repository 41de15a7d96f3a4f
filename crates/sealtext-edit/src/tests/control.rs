// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::control::{EditControl, MemoryControl};
use crate::selection::Selection;

#[test]
fn test_set_text_is_recorded() {
    let mut control = MemoryControl::new();

    control.set_text("●●");
    control.set_text("●●●");

    assert_eq!(control.text(), "●●●");
    assert_eq!(control.char_len(), 3);
    assert_eq!(control.text_pushes(), 2);
}

#[test]
fn test_type_text_replaces_selection() {
    let mut control = MemoryControl::new();
    control.set_text("abcdef");
    control.set_selection(Selection::new(1, 3));

    let change = control.type_text("XY");

    assert_eq!(change.text, "aXYef");
    assert_eq!(change.selection, Selection::caret(3));
    assert_eq!(control.text(), "aXYef");
}

#[test]
fn test_backspace() {
    let mut control = MemoryControl::new();
    control.set_text("a€c");
    control.set_selection(Selection::caret(2));

    let change = control.backspace();
    assert_eq!(change.text, "ac");
    assert_eq!(change.selection, Selection::caret(1));

    control.set_selection(Selection::caret(0));
    let change = control.backspace();
    assert_eq!(change.text, "ac");
}

#[test]
fn test_backspace_with_selection() {
    let mut control = MemoryControl::new();
    control.set_text("abcd");
    control.set_selection(Selection::new(1, 2));

    let change = control.backspace();

    assert_eq!(change.text, "ad");
    assert_eq!(change.selection, Selection::caret(1));
}

#[test]
fn test_delete_forward() {
    let mut control = MemoryControl::new();
    control.set_text("abc");
    control.set_selection(Selection::caret(1));

    let change = control.delete_forward();
    assert_eq!(change.text, "ac");
    assert_eq!(change.selection, Selection::caret(1));

    control.set_selection(Selection::caret(2));
    let change = control.delete_forward();
    assert_eq!(change.text, "ac");
}

#[test]
fn test_debug_redacted() {
    let mut control = MemoryControl::new();
    control.set_text("plaintext");

    let debug = format!("{:?}", control);

    assert!(!debug.contains("plaintext"));
    assert!(debug.contains("len: 9"));
}
