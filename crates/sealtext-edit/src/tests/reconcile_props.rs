// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drives an engine and a plain-text control through the same keystrokes
//! and checks that the engine's buffer always holds what the plain control
//! shows.

use proptest::prelude::*;

use crate::control::{EditControl, MemoryControl};
use crate::selection::Selection;
use crate::support::test_utils::{backspace, delete_forward, type_text};
use crate::tests::utils::{attached, buffer_string, select, selection};

#[derive(Debug, Clone)]
enum Key {
    Type(String),
    Backspace,
    Delete,
    Select(usize, usize),
    Toggle,
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => "[a-zA-Z0-9 €😀ß]{0,4}".prop_map(Key::Type),
        2 => Just(Key::Backspace),
        1 => Just(Key::Delete),
        2 => (0usize..20, 0usize..20).prop_map(|(start, len)| Key::Select(start, len)),
        1 => Just(Key::Toggle),
    ]
}

proptest! {
    #[test]
    fn prop_buffer_tracks_plain_control(
        start_protected in any::<bool>(),
        keys in proptest::collection::vec(key_strategy(), 0..40),
    ) {
        let mut edit = attached(start_protected);
        let mut plain = MemoryControl::new();

        for key in keys {
            plain.set_selection(selection(&edit));

            match key {
                Key::Type(input) => {
                    type_text(&mut edit, &input);
                    plain.type_text(&input);
                }
                Key::Backspace => {
                    backspace(&mut edit);
                    plain.backspace();
                }
                Key::Delete => {
                    delete_forward(&mut edit);
                    plain.delete_forward();
                }
                Key::Select(start, sel_len) => {
                    let len = edit.len();
                    select(&mut edit, Selection::new(start, sel_len).clamp(len));
                }
                Key::Toggle => {
                    let before = buffer_string(&edit);
                    edit.set_protection_enabled(!edit.is_protection_enabled());
                    prop_assert_eq!(buffer_string(&edit), before);
                }
            }

            prop_assert_eq!(buffer_string(&edit), plain.text());
            prop_assert!(selection(&edit).end() <= edit.len());
        }
    }

    #[test]
    fn prop_masked_display_is_all_glyphs(input in "[a-z€😀]{0,16}") {
        let mut edit = attached(true);
        for ch in input.chars() {
            type_text(&mut edit, ch.encode_utf8(&mut [0u8; 4]));
        }

        let display = edit.control().map(|c| c.text().to_string()).unwrap_or_default();

        prop_assert_eq!(display.chars().count(), input.chars().count());
        prop_assert!(display.chars().all(|ch| ch == edit.config().mask_char));
        prop_assert_eq!(buffer_string(&edit), input);
    }
}
