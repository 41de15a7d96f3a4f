// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::mem;

use sealtext_rand::{
    CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, CryptoRandomStream, EntropySource,
    SystemEntropySource, chacha20_xor,
};
use sealtext_zero::{
    FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel, ZeroizingGuard, constant_time_eq,
    fast_zeroize_vec,
};

use crate::error::BufferError;

/// Encrypted character sequence with char-indexed editing.
///
/// The UTF-8 encoding of the content is stored XORed with a ChaCha20
/// keystream. The key is drawn once from the entropy source; every mutation
/// reseals the whole content under a new nonce taken from a
/// [`CryptoRandomStream`], so no two states share keystream.
///
/// The character count is kept in the clear; the masked control displays
/// one glyph per character anyway.
pub struct ProtectedText {
    key: [u8; CHACHA20_KEY_SIZE],
    nonce: [u8; CHACHA20_NONCE_SIZE],
    sealed: Vec<u8>,
    char_len: usize,
    nonces: CryptoRandomStream,
    __sentinel: ZeroizeOnDropSentinel,
}

/// Byte offset of the `char_index`-th character, or `text.len()` past the end.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

impl ProtectedText {
    /// Creates an empty buffer keyed from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Entropy`] if the OS refuses to provide entropy.
    pub fn new() -> Result<Self, BufferError> {
        Self::with_entropy(&SystemEntropySource {})
    }

    /// Creates an empty buffer keyed from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Entropy`] if `entropy` fails.
    pub fn with_entropy<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self, BufferError> {
        let mut key = [0u8; CHACHA20_KEY_SIZE];

        if let Err(err) = entropy.fill_bytes(&mut key) {
            key.fast_zeroize();
            return Err(err.into());
        }

        let nonces = match CryptoRandomStream::from_entropy(entropy) {
            Ok(stream) => stream,
            Err(err) => {
                key.fast_zeroize();
                return Err(err.into());
            }
        };

        let text = Self {
            key,
            nonce: [0; CHACHA20_NONCE_SIZE],
            sealed: Vec::new(),
            char_len: 0,
            nonces,
            __sentinel: ZeroizeOnDropSentinel::default(),
        };
        key.fast_zeroize();

        Ok(text)
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Decrypts the content into a guard that wipes it on drop.
    pub fn read_utf8(&self) -> ZeroizingGuard<Vec<u8>> {
        let mut plain = Vec::with_capacity(self.sealed.len());
        plain.extend_from_slice(&self.sealed);
        chacha20_xor(&self.key, &self.nonce, &mut plain);

        ZeroizingGuard::from_mut(&mut plain)
    }

    /// Decrypts the content into a guarded `char` vector.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Corrupted`] if the content does not decode.
    pub fn read_chars(&self) -> Result<ZeroizingGuard<Vec<char>>, BufferError> {
        self.open(|text| {
            let mut chars = Vec::with_capacity(self.char_len);
            chars.extend(text.chars());
            ZeroizingGuard::from_mut(&mut chars)
        })
    }

    /// Runs `f` over the decrypted content.
    ///
    /// The plaintext is wiped as soon as `f` returns.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Corrupted`] if the content does not decode.
    pub fn open<R>(&self, f: impl FnOnce(&str) -> R) -> Result<R, BufferError> {
        let plain = self.read_utf8();
        let text = core::str::from_utf8(&plain).map_err(|_| BufferError::Corrupted)?;

        Ok(f(text))
    }

    /// Replaces the whole content.
    pub fn set_from_str(&mut self, text: &str) {
        let mut plain = Vec::with_capacity(text.len());
        plain.extend_from_slice(text.as_bytes());

        self.seal(plain);
        self.char_len = text.chars().count();
    }

    /// Replaces the whole content with UTF-8 `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidUtf8`] and leaves the content untouched
    /// if `bytes` is not valid UTF-8.
    pub fn set_from_utf8(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let text = core::str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)?;
        self.set_from_str(text);

        Ok(())
    }

    /// Removes `count` characters at `at`, then inserts `insert` at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `at + count` exceeds the length.
    pub fn splice(&mut self, at: usize, count: usize, insert: &str) -> Result<(), BufferError> {
        let len = self.char_len;

        if at > len || count > len - at {
            return Err(BufferError::OutOfRange { at, count, len });
        }

        if count == 0 && insert.is_empty() {
            return Ok(());
        }

        let next = self.open(|text| {
            let start = byte_offset(text, at);
            let end = start + byte_offset(&text[start..], count);

            let mut next = Vec::with_capacity(text.len() - (end - start) + insert.len());
            next.extend_from_slice(&text.as_bytes()[..start]);
            next.extend_from_slice(insert.as_bytes());
            next.extend_from_slice(&text.as_bytes()[end..]);
            next
        })?;

        self.seal(next);
        self.char_len = len - count + insert.chars().count();

        Ok(())
    }

    /// Inserts `text` before character `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `at` exceeds the length.
    pub fn insert(&mut self, at: usize, text: &str) -> Result<(), BufferError> {
        self.splice(at, 0, text)
    }

    /// Removes `count` characters starting at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `at + count` exceeds the length.
    pub fn remove(&mut self, at: usize, count: usize) -> Result<(), BufferError> {
        self.splice(at, count, "")
    }

    /// Empties the buffer, wiping the stored bytes.
    pub fn clear(&mut self) {
        fast_zeroize_vec(&mut self.sealed);
        self.sealed = Vec::new();
        self.nonce.fast_zeroize();
        self.char_len = 0;
    }

    /// Constant-time content comparison.
    ///
    /// Both decrypted temporaries are wiped before returning.
    pub fn contents_equal(&self, other: &Self) -> bool {
        if self.char_len != other.char_len {
            return false;
        }

        let lhs = self.read_utf8();
        let rhs = other.read_utf8();

        constant_time_eq(&lhs, &rhs)
    }

    /// Encrypts `plain` in place under a fresh nonce and stores it.
    fn seal(&mut self, mut plain: Vec<u8>) {
        self.nonces.fill_bytes(&mut self.nonce);
        chacha20_xor(&self.key, &self.nonce, &mut plain);

        let mut previous = mem::replace(&mut self.sealed, plain);
        fast_zeroize_vec(&mut previous);
    }
}

impl FastZeroizable for ProtectedText {
    fn fast_zeroize(&mut self) {
        self.clear();
        self.key.fast_zeroize();
        self.nonces.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl ZeroizationProbe for ProtectedText {
    fn is_zeroized(&self) -> bool {
        self.char_len == 0 && self.sealed.is_empty() && self.key.is_zeroized()
    }
}

impl Drop for ProtectedText {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

impl core::fmt::Debug for ProtectedText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProtectedText")
            .field("len", &self.char_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl ProtectedText {
    pub(crate) fn sealed_bytes(&self) -> &[u8] {
        &self.sealed
    }

    pub(crate) fn current_nonce(&self) -> [u8; CHACHA20_NONCE_SIZE] {
        self.nonce
    }

    pub(crate) fn clone_sentinel_for_test(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }
}
