// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 block function (RFC 8439), portable Rust.
//!
//! All intermediate state is zeroized after every block and on drop.

use sealtext_zero::{FastZeroizable, ZeroizeOnDropSentinel};

/// ChaCha20 key size in bytes.
pub const CHACHA20_KEY_SIZE: usize = 32;
/// ChaCha20 (IETF) nonce size in bytes.
pub const CHACHA20_NONCE_SIZE: usize = 12;
/// ChaCha20 block size in bytes.
pub const CHACHA20_BLOCK_SIZE: usize = 64;

const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

pub(crate) struct ChaCha20 {
    initial: [u32; 16],
    working: [u32; 16],
    __sentinel: ZeroizeOnDropSentinel,
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            initial: [0; 16],
            working: [0; 16],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl ChaCha20 {
    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        let w = &mut self.working;

        w[a] = w[a].wrapping_add(w[b]);
        w[d] ^= w[a];
        w[d] = w[d].rotate_left(16);

        w[c] = w[c].wrapping_add(w[d]);
        w[b] ^= w[c];
        w[b] = w[b].rotate_left(12);

        w[a] = w[a].wrapping_add(w[b]);
        w[d] ^= w[a];
        w[d] = w[d].rotate_left(8);

        w[c] = w[c].wrapping_add(w[d]);
        w[b] ^= w[c];
        w[b] = w[b].rotate_left(7);
    }

    #[inline(always)]
    fn init_state(
        &mut self,
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
    ) {
        self.initial[..4].copy_from_slice(&SIGMA);

        for (word, chunk) in self.initial[4..12].iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        self.initial[12] = counter;

        for (word, chunk) in self.initial[13..16].iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
    }

    #[inline(always)]
    fn do_rounds(&mut self) {
        for _ in 0..10 {
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Writes keystream block `counter` into `output`.
    pub(crate) fn block(
        &mut self,
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
        output: &mut [u8; CHACHA20_BLOCK_SIZE],
    ) {
        self.init_state(key, nonce, counter);
        self.working.copy_from_slice(&self.initial);

        self.do_rounds();

        for (i, out) in output.chunks_exact_mut(4).enumerate() {
            let word = self.working[i].wrapping_add(self.initial[i]);
            out.copy_from_slice(&word.to_le_bytes());
        }

        self.initial.fast_zeroize();
        self.working.fast_zeroize();
    }

    /// XORs `data` with the keystream starting at block `counter`.
    pub(crate) fn crypt(
        &mut self,
        key: &[u8; CHACHA20_KEY_SIZE],
        nonce: &[u8; CHACHA20_NONCE_SIZE],
        counter: u32,
        data: &mut [u8],
    ) {
        let mut keystream = [0u8; CHACHA20_BLOCK_SIZE];

        for (i, chunk) in data.chunks_mut(CHACHA20_BLOCK_SIZE).enumerate() {
            self.block(key, nonce, counter.wrapping_add(i as u32), &mut keystream);

            for (byte, ks_byte) in chunk.iter_mut().zip(keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        keystream.fast_zeroize();
    }
}

impl FastZeroizable for ChaCha20 {
    fn fast_zeroize(&mut self) {
        self.initial.fast_zeroize();
        self.working.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl Drop for ChaCha20 {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}

/// XORs `data` in place with the ChaCha20 keystream (counter starting at 1).
///
/// Encryption and decryption are the same operation.
pub fn chacha20_xor(
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    data: &mut [u8],
) {
    ChaCha20::default().crypt(key, nonce, 1, data);
}

#[cfg(test)]
impl ChaCha20 {
    pub(crate) fn is_state_clear(&self) -> bool {
        self.initial.iter().all(|w| *w == 0) && self.working.iter().all(|w| *w == 0)
    }

    pub(crate) fn clone_sentinel_for_test(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }
}
