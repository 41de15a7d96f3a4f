// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::min;

/// Selected range of a text control, in `char` units.
///
/// A zero-length selection is a caret.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// First selected character.
    pub start: usize,
    /// Number of selected characters.
    pub len: usize,
}

impl Selection {
    /// Creates a selection of `len` characters at `start`.
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Creates a caret (empty selection) at `pos`.
    pub const fn caret(pos: usize) -> Self {
        Self { start: pos, len: 0 }
    }

    /// Selects all of a text of `text_len` characters.
    pub const fn all(text_len: usize) -> Self {
        Self {
            start: 0,
            len: text_len,
        }
    }

    /// One past the last selected character.
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Returns `true` for a caret.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Restricts the selection to a text of `text_len` characters.
    ///
    /// The start moves back to the end of the text if needed, then the length
    /// is cut so that `start + len <= text_len`.
    pub fn clamp(self, text_len: usize) -> Self {
        let start = min(self.start, text_len);
        let len = min(self.len, text_len - start);

        Self { start, len }
    }

    /// Converts a selection given in UTF-16 code units into `char` units.
    ///
    /// An offset that falls between the two halves of a surrogate pair snaps
    /// forward to the end of that code point. Offsets past the end clamp to
    /// the end of `text`.
    ///
    /// ```
    /// use sealtext_edit::Selection;
    ///
    /// // 'a' = 1 unit, '😀' = 2 units, 'b' = 1 unit
    /// assert_eq!(Selection::from_utf16("a😀b", 1, 2), Selection::new(1, 1));
    /// assert_eq!(Selection::from_utf16("a😀b", 2, 0), Selection::caret(2));
    /// ```
    pub fn from_utf16(text: &str, start_units: usize, len_units: usize) -> Self {
        let start = char_index_at_utf16(text, start_units);
        let end = char_index_at_utf16(text, start_units.saturating_add(len_units));

        Self {
            start,
            len: end - start,
        }
    }

    /// Converts the selection into `(start, len)` UTF-16 code units of `text`.
    pub fn to_utf16(self, text: &str) -> (usize, usize) {
        let units_before = |chars: usize| -> usize {
            text.chars().take(chars).map(char::len_utf16).sum()
        };

        let start = units_before(self.start);
        let end = units_before(self.end());

        (start, end - start)
    }
}

/// Number of chars starting strictly before UTF-16 offset `units`.
fn char_index_at_utf16(text: &str, units: usize) -> usize {
    let mut offset = 0usize;
    let mut index = 0usize;

    for ch in text.chars() {
        if offset >= units {
            break;
        }
        offset += ch.len_utf16();
        index += 1;
    }

    index
}
