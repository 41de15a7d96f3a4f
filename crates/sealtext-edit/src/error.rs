// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sealtext_buffer::BufferError;
use sealtext_rand::EntropyError;
use thiserror::Error;

/// Errors surfaced by the secure edit engine and its services.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The protected buffer rejected an operation.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),

    /// Key or salt generation failed.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),

    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// A background worker could not be started.
    #[error("failed to spawn worker thread")]
    WorkerSpawn,
}
