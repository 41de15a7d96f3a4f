// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use sealtext_rand::EntropyError;
use sealtext_rand::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use sealtext_zero::{FastZeroizable, ZeroizationProbe};

use crate::error::BufferError;
use crate::protected_text::ProtectedText;

fn text_of(buffer: &ProtectedText) -> String {
    buffer
        .open(|text| text.to_string())
        .expect("Failed to open()")
}

#[test]
fn test_new_is_empty() {
    let buffer = ProtectedText::new().expect("Failed to new()");

    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert!(buffer.read_utf8().is_empty());
}

#[test]
fn test_with_entropy_fails_on_key() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let result = ProtectedText::with_entropy(&entropy);

    assert!(matches!(
        result,
        Err(BufferError::Entropy(EntropyError::EntropyNotAvailable))
    ));
}

#[test]
fn test_with_entropy_fails_on_nonce_stream() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let result = ProtectedText::with_entropy(&entropy);

    assert!(matches!(result, Err(BufferError::Entropy(_))));
}

#[test]
fn test_set_from_str_and_read() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("hunter2");

    assert_eq!(buffer.len(), 7);
    assert_eq!(buffer.read_utf8().as_slice(), b"hunter2");
}

#[test]
fn test_content_is_not_stored_in_clear() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x5A));
    let mut buffer = ProtectedText::with_entropy(&entropy).expect("Failed to with_entropy()");
    buffer.set_from_str("correct horse battery staple");

    assert_eq!(buffer.sealed_bytes().len(), 28);
    assert_ne!(buffer.sealed_bytes(), b"correct horse battery staple");
}

#[test]
fn test_every_mutation_uses_fresh_nonce() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");

    buffer.set_from_str("a");
    let first = buffer.current_nonce();
    buffer.insert(1, "b").expect("Failed to insert()");
    let second = buffer.current_nonce();

    assert_ne!(first, second);
    assert_eq!(buffer.read_utf8().as_slice(), b"ab");
}

#[test]
fn test_splice_counts_chars_not_bytes() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("añ€😀z");

    assert_eq!(buffer.len(), 5);

    buffer.splice(1, 3, "é").expect("Failed to splice()");

    assert_eq!(text_of(&buffer), "aéz");
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_insert_at_end() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");
    buffer.insert(3, "d").expect("Failed to insert()");

    assert_eq!(text_of(&buffer), "abcd");
}

#[test]
fn test_remove_all() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");
    buffer.remove(0, 3).expect("Failed to remove()");

    assert!(buffer.is_empty());
    assert_eq!(text_of(&buffer), "");
}

#[test]
fn test_splice_out_of_range() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");

    assert_eq!(
        buffer.splice(2, 2, "x"),
        Err(BufferError::OutOfRange {
            at: 2,
            count: 2,
            len: 3
        })
    );
    assert_eq!(
        buffer.insert(4, "x"),
        Err(BufferError::OutOfRange {
            at: 4,
            count: 0,
            len: 3
        })
    );
    assert_eq!(text_of(&buffer), "abc");
}

#[test]
fn test_empty_splice_keeps_nonce() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");
    let nonce = buffer.current_nonce();

    buffer.splice(1, 0, "").expect("Failed to splice()");

    assert_eq!(nonce, buffer.current_nonce());
}

#[test]
fn test_set_from_utf8_rejects_invalid_and_keeps_content() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("keep");

    let result = buffer.set_from_utf8(&[0x66, 0xFF, 0x6F]);

    assert_eq!(result, Err(BufferError::InvalidUtf8));
    assert_eq!(text_of(&buffer), "keep");
}

#[test]
fn test_read_chars() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("a€b");

    let chars = buffer.read_chars().expect("Failed to read_chars()");

    assert_eq!(chars.as_slice(), &['a', '€', 'b']);
}

#[test]
fn test_contents_equal() {
    let mut a = ProtectedText::new().expect("Failed to new()");
    let mut b = ProtectedText::new().expect("Failed to new()");

    a.set_from_str("secret");
    b.set_from_str("secret");
    assert!(a.contents_equal(&b));

    b.set_from_str("secreT");
    assert!(!a.contents_equal(&b));

    b.set_from_str("secret!");
    assert!(!a.contents_equal(&b));
}

#[test]
fn test_clear() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");
    buffer.clear();

    assert!(buffer.is_empty());
    assert!(buffer.sealed_bytes().is_empty());
}

#[test]
fn test_fast_zeroize() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");

    assert!(!buffer.is_zeroized());
    buffer.fast_zeroize();
    assert!(buffer.is_zeroized());
}

#[test]
fn test_drop_zeroizes() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("abc");
    let sentinel = buffer.clone_sentinel_for_test();

    drop(buffer);

    assert!(sentinel.is_zeroized());
}

#[test]
fn test_debug_redacted() {
    let mut buffer = ProtectedText::new().expect("Failed to new()");
    buffer.set_from_str("visible?");

    let debug = format!("{:?}", buffer);

    assert!(!debug.contains("visible"));
    assert!(debug.contains("len: 8"));
}

#[derive(Debug, Clone)]
enum Edit {
    Insert(usize, String),
    Remove(usize, usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<usize>(), "[a-z€😀 ]{0,4}").prop_map(|(at, s)| Edit::Insert(at, s)),
        (any::<usize>(), 0usize..4).prop_map(|(at, n)| Edit::Remove(at, n)),
    ]
}

proptest! {
    #[test]
    fn prop_edits_match_string_model(edits in proptest::collection::vec(edit_strategy(), 0..40)) {
        let mut buffer = ProtectedText::new().expect("Failed to new()");
        let mut model: Vec<char> = Vec::new();

        for edit in edits {
            match edit {
                Edit::Insert(at, s) => {
                    let at = at % (model.len() + 1);
                    buffer.insert(at, &s).expect("Failed to insert()");
                    model.splice(at..at, s.chars());
                }
                Edit::Remove(at, n) => {
                    let at = at % (model.len() + 1);
                    let n = n.min(model.len() - at);
                    buffer.remove(at, n).expect("Failed to remove()");
                    model.drain(at..at + n);
                }
            }

            prop_assert_eq!(buffer.len(), model.len());
        }

        let expected: String = model.into_iter().collect();
        prop_assert_eq!(text_of(&buffer), expected);
    }

    #[test]
    fn prop_set_then_read_roundtrip(s in any::<String>()) {
        let mut buffer = ProtectedText::new().expect("Failed to new()");
        buffer.set_from_utf8(s.as_bytes()).expect("Failed to set_from_utf8()");

        let bytes = buffer.read_utf8();
        prop_assert_eq!(bytes.as_slice(), s.as_bytes());
        prop_assert_eq!(buffer.len(), s.chars().count());
    }
}
