// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sealtext_zero::FastZeroizable;

use crate::selection::Selection;

/// Platform edit control driven by a [`SecureEdit`](crate::SecureEdit).
///
/// Implementations wrap a native text box. The engine pushes the display
/// text (mask glyphs or, when revealed, the real characters) and the
/// selection; the platform reports user edits back through
/// [`SecureEdit::on_display_text_changed`](crate::SecureEdit::on_display_text_changed).
///
/// Positions are `char` indices. Controls that work in UTF-16 units convert
/// with [`Selection::from_utf16`] and [`Selection::to_utf16`].
pub trait EditControl {
    /// Replaces the visible text.
    fn set_text(&mut self, text: &str);

    /// Current selection.
    fn selection(&self) -> Selection;

    /// Moves the selection.
    fn set_selection(&mut self, selection: Selection);
}

/// Result of a simulated user edit on a [`MemoryControl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEdit {
    /// Visible text after the edit.
    pub text: String,
    /// Selection after the edit.
    pub selection: Selection,
}

impl Drop for ControlEdit {
    fn drop(&mut self) {
        self.text.fast_zeroize();
    }
}

/// Headless edit control.
///
/// Records what the engine pushes to it and can simulate what a native text
/// box does on user input, so front ends without a widget toolkit (and tests)
/// can drive a [`SecureEdit`](crate::SecureEdit). Replaced text is wiped.
#[derive(Default)]
pub struct MemoryControl {
    text: String,
    selection: Selection,
    text_pushes: usize,
}

impl MemoryControl {
    /// Creates an empty control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the shown text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of [`set_text`](EditControl::set_text) calls received.
    pub fn text_pushes(&self) -> usize {
        self.text_pushes
    }

    /// Types `input` over the current selection, like a keyboard or paste.
    pub fn type_text(&mut self, input: &str) -> ControlEdit {
        let selection = self.selection.clamp(self.char_len());
        let caret = selection.start + input.chars().count();

        self.replace_range(selection, input);
        self.selection = Selection::caret(caret);

        self.snapshot()
    }

    /// Backspace: removes the selection, or the character before the caret.
    pub fn backspace(&mut self) -> ControlEdit {
        let selection = self.selection.clamp(self.char_len());
        let range = match (selection.is_empty(), selection.start) {
            (false, _) => selection,
            (true, 0) => return self.snapshot(),
            (true, start) => Selection::new(start - 1, 1),
        };

        self.replace_range(range, "");
        self.selection = Selection::caret(range.start);

        self.snapshot()
    }

    /// Delete key: removes the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> ControlEdit {
        let text_len = self.char_len();
        let selection = self.selection.clamp(text_len);
        let range = if !selection.is_empty() {
            selection
        } else if selection.start < text_len {
            Selection::new(selection.start, 1)
        } else {
            return self.snapshot();
        };

        self.replace_range(range, "");
        self.selection = Selection::caret(range.start);

        self.snapshot()
    }

    fn replace_range(&mut self, range: Selection, input: &str) {
        let mut next = String::with_capacity(self.text.len() + input.len());
        next.extend(self.text.chars().take(range.start));
        next.push_str(input);
        next.extend(self.text.chars().skip(range.end()));

        self.text.fast_zeroize();
        self.text = next;
    }

    fn snapshot(&self) -> ControlEdit {
        ControlEdit {
            text: self.text.clone(),
            selection: self.selection,
        }
    }
}

impl EditControl for MemoryControl {
    fn set_text(&mut self, text: &str) {
        self.text.fast_zeroize();
        self.text = String::from(text);
        self.text_pushes += 1;
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}

impl Drop for MemoryControl {
    fn drop(&mut self) {
        self.text.fast_zeroize();
    }
}

impl core::fmt::Debug for MemoryControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryControl")
            .field("len", &self.char_len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
