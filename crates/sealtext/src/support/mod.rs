// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from sealtext-edit and sealtext-rand

#[cfg(feature = "test-utils")]
pub mod edit {
    pub use sealtext_edit::support::test_utils::*;
}
#[cfg(feature = "test-utils")]
pub mod rand {
    pub use sealtext_rand::support::test_utils::*;
}
