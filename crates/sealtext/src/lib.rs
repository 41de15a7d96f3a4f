// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sealtext
//!
//! Secure masked text entry for password fields.
//!
//! The characters the user types never sit in the edit control: it only ever
//! shows mask glyphs, while the real text lives in an encrypted, zeroizing
//! buffer owned by a [`SecureEdit`]. Around it:
//!
//! - [`DecoyPool`]: look-alike strings regenerated after every keystroke
//! - [`QualityMonitor`]: strength estimation off the UI thread, delivered
//!   only for the latest content
//! - `harden_process` (feature `guard`): no core dumps, no ptrace attach
//!
//! # Quick Start
//!
//! ```rust
//! use sealtext::{MemoryControl, SecureEdit, SecureEditConfig};
//!
//! let mut edit = SecureEdit::with_config(SecureEditConfig::default())?;
//! edit.attach(MemoryControl::new(), true);
//!
//! // A native control reports its new text and selection after each key.
//! edit.on_display_text_changed("a", 1, 0);
//! edit.on_display_text_changed("\u{25CF}b", 2, 0);
//!
//! assert_eq!(edit.control().map(|c| c.text()), Some("\u{25CF}\u{25CF}"));
//! assert_eq!(edit.get_buffer_utf8().as_slice(), b"ab");
//!
//! edit.set_protection_enabled(false);
//! assert_eq!(edit.control().map(|c| c.text()), Some("ab"));
//! # Ok::<(), sealtext::EditError>(())
//! ```
//!
//! # Platform controls
//!
//! Wrap the native text box in an [`EditControl`] and forward its change
//! events to [`SecureEdit::on_display_text_changed`]. If the toolkit raises
//! those events synchronously from inside `set_text`, keep a clone of
//! [`SecureEdit::update_block`] in the adapter and drop events while it is
//! blocked. Controls that count UTF-16 units convert selections with
//! [`Selection::from_utf16`].
//!
//! # Crates
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`zero`] | zeroization traits and guards |
//! | [`rand`] | entropy sources, ChaCha20 stream |
//! | [`buffer`] | [`ProtectedText`] |
//! | [`edit`] | the engine, decoys, quality estimation |
//! | `guard` | process hardening |
//!
//! # License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod support;

pub use sealtext_buffer as buffer;
pub use sealtext_edit as edit;
#[cfg(feature = "guard")]
pub use sealtext_guard as guard;
pub use sealtext_rand as rand;
pub use sealtext_zero as zero;

pub use sealtext_buffer::{BufferError, ProtectedText};
pub use sealtext_edit::{
    AllowedEffects, CharSpaceEstimator, DecoyConfig, DecoyPool, DropEffect, EditControl,
    EditError, LEGACY_MASK_CHAR, MASK_CHAR, MemoryControl, QualityConfig, QualityMonitor,
    QualityReport, QualitySink, SecureEdit, SecureEditConfig, Selection, StrengthEstimator,
    Submission, UiDispatcher, UiTask, UpdateBlock,
};
#[cfg(feature = "guard")]
pub use sealtext_guard::{HardeningStatus, harden_process};
pub use sealtext_zero::ZeroizingGuard;
