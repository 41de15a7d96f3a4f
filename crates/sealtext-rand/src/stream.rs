// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sealtext_zero::{FastZeroizable, ZeroizeOnDropSentinel};

use crate::chacha20::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, ChaCha20};
use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic random stream built on the ChaCha20 keystream.
///
/// Seeded once (32-byte key); afterwards every byte comes from the cipher,
/// so drawing thousands of decoy characters costs no syscalls. For the same
/// seed the same stream is produced.
///
/// The key, the buffered block and the cipher state are zeroized on drop.
pub struct CryptoRandomStream {
    key: [u8; CHACHA20_KEY_SIZE],
    nonce: [u8; CHACHA20_NONCE_SIZE],
    counter: u32,
    block: [u8; CHACHA20_BLOCK_SIZE],
    position: usize,
    cipher: ChaCha20,
    __sentinel: ZeroizeOnDropSentinel,
}

impl CryptoRandomStream {
    /// Creates a stream keyed by `seed`, zeroizing the seed afterwards.
    pub fn from_seed(seed: &mut [u8; CHACHA20_KEY_SIZE]) -> Self {
        let mut stream = Self {
            key: [0; CHACHA20_KEY_SIZE],
            nonce: [0; CHACHA20_NONCE_SIZE],
            counter: 0,
            block: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE,
            cipher: ChaCha20::default(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        };

        stream.key.copy_from_slice(seed);
        seed.fast_zeroize();

        stream
    }

    /// Creates a stream keyed from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn from_entropy<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self, EntropyError> {
        let mut seed = [0u8; CHACHA20_KEY_SIZE];
        let result = entropy.fill_bytes(&mut seed);

        if let Err(err) = result {
            seed.fast_zeroize();
            return Err(err);
        }

        Ok(Self::from_seed(&mut seed))
    }

    fn refill(&mut self) {
        self.cipher
            .block(&self.key, &self.nonce, self.counter, &mut self.block);
        self.counter = self.counter.wrapping_add(1);

        if self.counter == 0 {
            // 256 GiB drawn from one nonce: move to the next one.
            for byte in self.nonce.iter_mut() {
                *byte = byte.wrapping_add(1);
                if *byte != 0 {
                    break;
                }
            }
        }

        self.position = 0;
    }

    /// Fills `dest` with keystream bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            if self.position == CHACHA20_BLOCK_SIZE {
                self.refill();
            }

            *byte = self.block[self.position];
            self.block[self.position] = 0;
            self.position += 1;
        }
    }

    /// Returns the next 32 bits of the stream (little endian).
    pub fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        let value = u32::from_le_bytes(bytes);
        bytes.fast_zeroize();
        value
    }

    /// Returns the next 64 bits of the stream (little endian).
    pub fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        let value = u64::from_le_bytes(bytes);
        bytes.fast_zeroize();
        value
    }

    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Uses rejection sampling, so there is no modulo bias. A `bound` of 0
    /// yields 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let bound = u32::try_from(bound).unwrap_or(u32::MAX);
        let limit = u32::MAX - (u32::MAX % bound);

        loop {
            let value = self.next_u32();
            if value < limit {
                return (value % bound) as usize;
            }
        }
    }
}

impl FastZeroizable for CryptoRandomStream {
    fn fast_zeroize(&mut self) {
        self.key.fast_zeroize();
        self.nonce.fast_zeroize();
        self.counter.fast_zeroize();
        self.block.fast_zeroize();
        self.position = CHACHA20_BLOCK_SIZE;
        self.cipher.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl Drop for CryptoRandomStream {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

impl core::fmt::Debug for CryptoRandomStream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CryptoRandomStream")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl CryptoRandomStream {
    pub(crate) fn clone_sentinel_for_test(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }
}
