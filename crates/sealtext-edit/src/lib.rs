// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sealtext_edit
//!
//! Masked password entry on top of an arbitrary text control.
//!
//! ## Core Types
//!
//! - [`SecureEdit`]: keeps a [`ProtectedText`](sealtext_buffer::ProtectedText)
//!   in sync with an [`EditControl`] that only ever shows mask glyphs (unless
//!   revealed)
//! - [`MemoryControl`]: headless control for tests and non-GUI front ends
//! - [`DecoyPool`]: background-regenerated look-alike strings
//! - [`QualityMonitor`]: de-duplicated background strength estimation,
//!   delivered through a [`UiDispatcher`]
//! - [`CharSpaceEstimator`]: character-class strength estimate in bits
//!
//! ## Example
//!
//! ```rust
//! use sealtext_edit::{EditError, MemoryControl, SecureEdit};
//!
//! fn example() -> Result<(), EditError> {
//!     let mut edit = SecureEdit::new()?;
//!     edit.attach(MemoryControl::new(), true);
//!
//!     edit.set_buffer_from_utf8(b"hunter2")?;
//!     assert_eq!(edit.control().map(|c| c.char_len()), Some(7));
//!
//!     edit.set_protection_enabled(false);
//!     assert_eq!(edit.control().map(|c| c.text()), Some("hunter2"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod control;
mod decoy;
mod drop_effect;
mod error;
mod quality;
mod secure_edit;
mod selection;
mod update_block;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use config::{DecoyConfig, LEGACY_MASK_CHAR, MASK_CHAR, QualityConfig, SecureEditConfig};
pub use control::{ControlEdit, EditControl, MemoryControl};
pub use decoy::{DecoyAlphabet, DecoyPool};
pub use drop_effect::{AllowedEffects, DropEffect};
pub use error::EditError;
pub use quality::{
    CharSpaceEstimator, QualityMonitor, QualityReport, QualitySink, StrengthEstimator, Submission,
    UiDispatcher, UiTask,
};
pub use secure_edit::SecureEdit;
pub use selection::Selection;
pub use update_block::{UpdateBlock, UpdateBlockGuard};
