// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::min;

use tracing::{debug, trace, warn};

use sealtext_buffer::{BufferError, ProtectedText};
use sealtext_zero::ZeroizingGuard;

use crate::config::SecureEditConfig;
use crate::control::EditControl;
use crate::decoy::DecoyPool;
use crate::drop_effect::{AllowedEffects, DropEffect};
use crate::error::EditError;
use crate::quality::{QualityMonitor, Submission};
use crate::selection::Selection;
use crate::update_block::UpdateBlock;

type TextChangedListener = Box<dyn FnMut(usize)>;

/// Masked password field engine.
///
/// Owns the real characters in a [`ProtectedText`] and keeps an
/// [`EditControl`] showing either one mask glyph per character (protected)
/// or the characters themselves (revealed). User edits arrive as the new
/// visible text; in protected mode the engine works out which characters
/// were typed from the glyphs that are *not* mask glyphs.
///
/// ```
/// use sealtext_edit::{MemoryControl, SecureEdit};
///
/// let mut edit = SecureEdit::new().expect("Failed to new()");
/// edit.attach(MemoryControl::new(), true);
///
/// // The user types "ab": the control reports its new text and caret.
/// edit.on_display_text_changed("a", 1, 0);
/// edit.on_display_text_changed("\u{25CF}b", 2, 0);
///
/// assert_eq!(edit.get_buffer_utf8().as_slice(), b"ab");
/// assert_eq!(edit.control().map(|c| c.text()), Some("\u{25CF}\u{25CF}"));
/// ```
///
/// Reconciliation assumes one contiguous edit per notification, which is
/// what keyboards, paste and drag-drop produce. Not `Send`/`Sync`: it
/// belongs to the UI thread.
pub struct SecureEdit<C: EditControl> {
    config: SecureEditConfig,
    buffer: ProtectedText,
    control: Option<C>,
    protected: bool,
    first_focus_pending: bool,
    updates: UpdateBlock,
    listener: Option<TextChangedListener>,
    decoys: Option<DecoyPool>,
    quality: Option<QualityMonitor>,
}

impl<C: EditControl> SecureEdit<C> {
    /// Creates an unattached engine with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Buffer`] if the buffer key cannot be generated.
    pub fn new() -> Result<Self, EditError> {
        Self::with_config(SecureEditConfig::default())
    }

    /// Creates an unattached engine.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Buffer`] if the buffer key cannot be generated.
    pub fn with_config(config: SecureEditConfig) -> Result<Self, EditError> {
        Ok(Self::with_buffer(config, ProtectedText::new()?))
    }

    /// Creates an unattached engine around an existing (empty) buffer.
    pub fn with_buffer(config: SecureEditConfig, buffer: ProtectedText) -> Self {
        Self {
            config,
            buffer,
            control: None,
            protected: true,
            first_focus_pending: true,
            updates: UpdateBlock::default(),
            listener: None,
            decoys: None,
            quality: None,
        }
    }

    /// Attaches a decoy pool refreshed after every mutation.
    pub fn with_decoy_pool(mut self, pool: DecoyPool) -> Self {
        self.decoys = Some(pool);
        self
    }

    /// Attaches a quality monitor used by [`estimate_quality`](Self::estimate_quality).
    pub fn with_quality_monitor(mut self, monitor: QualityMonitor) -> Self {
        self.quality = Some(monitor);
        self
    }

    /// Binds `control`, clearing it and the buffer.
    ///
    /// Returns the previously attached control, if any.
    pub fn attach(&mut self, mut control: C, protected: bool) -> Option<C> {
        let previous = self.detach();

        {
            let _block = self.updates.enter();
            control.set_text("");
        }

        self.buffer.clear();
        self.control = Some(control);
        self.protected = protected;
        self.first_focus_pending = true;

        debug!(protected, "secure edit attached");

        self.show_current_text(Selection::default());
        previous
    }

    /// Unbinds the control and wipes the buffer.
    pub fn detach(&mut self) -> Option<C> {
        let control = self.control.take()?;
        self.buffer.clear();

        debug!("secure edit detached");
        Some(control)
    }

    /// Switches between masked (`true`) and revealed (`false`) display.
    ///
    /// The buffer is never touched and the selection survives (clamped).
    pub fn set_protection_enabled(&mut self, enable: bool) {
        if self.protected == enable {
            return;
        }

        self.protected = enable;
        debug!(protected = enable, "protection toggled");

        let selection = self.current_selection();
        self.show_current_text(selection);
    }

    /// Reconciles a change of the control's visible text.
    ///
    /// `sel_start`/`sel_len` is the control's selection after the change,
    /// in `char`s. Ignored while the engine itself updates the control.
    pub fn on_display_text_changed(&mut self, new_text: &str, sel_start: usize, sel_len: usize) {
        if self.updates.is_blocked() {
            trace!("change notification suppressed during display update");
            return;
        }

        if self.control.is_none() {
            warn!("change notification without attached control ignored");
            return;
        }

        if self.protected {
            self.reconcile_masked(new_text, sel_start);
        } else {
            self.buffer.set_from_str(new_text);
        }

        self.after_mutation(Selection::new(sel_start, sel_len));
    }

    /// UTF-8 copy of the buffer, wiped when the guard drops.
    pub fn get_buffer_utf8(&self) -> ZeroizingGuard<Vec<u8>> {
        self.buffer.read_utf8()
    }

    /// Replaces the buffer with UTF-8 `bytes` and resets the selection.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidUtf8`] and leaves the buffer untouched if
    /// `bytes` is not valid UTF-8.
    pub fn set_buffer_from_utf8(&mut self, bytes: &[u8]) -> Result<(), EditError> {
        self.buffer.set_from_utf8(bytes).map_err(|err| match err {
            BufferError::InvalidUtf8 => EditError::InvalidUtf8,
            other => EditError::Buffer(other),
        })?;

        self.after_mutation(Selection::default());
        Ok(())
    }

    /// Constant-time comparison of both buffers.
    pub fn contents_equal<D: EditControl>(&self, other: &SecureEdit<D>) -> bool {
        self.buffer.contents_equal(&other.buffer)
    }

    /// Inserts `text` over the current selection, as a paste does.
    ///
    /// The caret ends up after the inserted text. Empty text is ignored.
    pub fn paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let selection = self.current_selection().clamp(self.buffer.len());

        if let Err(err) = self.buffer.splice(selection.start, selection.len, text) {
            warn!(error = %err, "paste rejected by buffer");
            return;
        }

        let caret = selection.start + text.chars().count();
        self.after_mutation(Selection::caret(caret));
    }

    /// Drag-over check: text drops are copied when allowed, else moved.
    pub fn accepts_drop(&self, allowed: AllowedEffects) -> DropEffect {
        if allowed.contains(AllowedEffects::COPY) {
            DropEffect::Copy
        } else if allowed.contains(AllowedEffects::MOVE) {
            DropEffect::Move
        } else {
            DropEffect::None
        }
    }

    /// Handles dropped text: pasted at the selection unless empty.
    pub fn drop_text(&mut self, text: &str) {
        self.paste(text);
    }

    /// Focus notification. On the first focus, selects everything if the
    /// selection is still in its initial `(0, 0)` state.
    pub fn on_got_focus(&mut self) {
        if !self.first_focus_pending {
            return;
        }
        self.first_focus_pending = false;

        if !self.config.select_all_on_first_focus {
            return;
        }

        let len = self.buffer.len();
        if let Some(control) = self.control.as_mut() {
            if control.selection() == Selection::default() {
                control.set_selection(Selection::all(len));
            }
        }
    }

    /// Sets the callback fired after every display refresh with the new
    /// length in characters.
    pub fn set_text_changed_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the text-changed callback.
    pub fn clear_text_changed_listener(&mut self) {
        self.listener = None;
    }

    /// Submits the current content to the quality monitor.
    ///
    /// Every later mutation invalidates the estimate, so a result only
    /// reaches the sink if the buffer is unchanged when it completes.
    ///
    /// # Errors
    ///
    /// Propagates buffer decoding and worker errors.
    pub fn estimate_quality(&self) -> Result<Submission, EditError> {
        let Some(monitor) = self.quality.as_ref() else {
            return Ok(Submission::Disabled);
        };

        let chars = self.buffer.read_chars()?;
        monitor.submit(&chars)
    }

    /// Handle that reports whether the engine is writing to the control.
    pub fn update_block(&self) -> UpdateBlock {
        self.updates.clone()
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` in masked mode.
    pub fn is_protection_enabled(&self) -> bool {
        self.protected
    }

    /// The attached control.
    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    /// The attached control, mutably.
    pub fn control_mut(&mut self) -> Option<&mut C> {
        self.control.as_mut()
    }

    /// Active settings.
    pub fn config(&self) -> &SecureEditConfig {
        &self.config
    }

    fn current_selection(&self) -> Selection {
        self.control
            .as_ref()
            .map(EditControl::selection)
            .unwrap_or_default()
    }

    /// Derives the edit implied by a masked display change.
    ///
    /// Mask glyphs before the first typed character are kept from the
    /// buffer's start, those after the last typed character from its end;
    /// everything in between is replaced with the typed characters.
    fn reconcile_masked(&mut self, new_text: &str, caret: usize) {
        let split = MaskedSplit::parse(new_text, self.config.mask_char);
        let display_len = split.display_len;

        let (keep_left, keep_right) = match split.first_typed {
            None => {
                let caret = min(caret, display_len);
                (caret, display_len - caret)
            }
            Some(first) => (first, display_len - split.last_typed - 1),
        };

        trace!(
            keep_left,
            keep_right,
            inserted = split.typed.chars().count(),
            "masked change reconciled"
        );

        self.remove_insert(keep_left, keep_right, &split.typed);
    }

    /// Keeps `keep_left` leading and `keep_right` trailing characters and
    /// puts `insert` between them.
    fn remove_insert(&mut self, keep_left: usize, keep_right: usize, insert: &str) {
        let len = self.buffer.len();

        let (left, right) = if keep_left.saturating_add(keep_right) > len {
            let left = min(keep_left, len);
            let right = min(keep_right, len - left);
            warn!(
                keep_left,
                keep_right, len, "display change inconsistent with buffer, clamped"
            );
            (left, right)
        } else {
            (keep_left, keep_right)
        };

        if let Err(err) = self.buffer.splice(left, len - left - right, insert) {
            warn!(error = %err, "buffer rejected reconciled edit");
        }
    }

    fn after_mutation(&mut self, selection: Selection) {
        if let Some(monitor) = self.quality.as_ref() {
            monitor.content_changed();
        }

        if self.config.decoy.enabled {
            if let Some(pool) = self.decoys.as_ref() {
                pool.request_refresh(self.buffer.len());
            }
        }

        self.show_current_text(selection);
    }

    /// Pushes the display text for the current mode, then the selection.
    fn show_current_text(&mut self, selection: Selection) {
        let len = self.buffer.len();
        let selection = selection.clamp(len);

        let Some(control) = self.control.as_mut() else {
            return;
        };

        {
            let _block = self.updates.enter();

            if self.protected {
                let masked: String = core::iter::repeat_n(self.config.mask_char, len).collect();
                control.set_text(&masked);
            } else if let Err(err) = self.buffer.open(|text| control.set_text(text)) {
                warn!(error = %err, "could not reveal buffer");
                control.set_text("");
            }
        }

        control.set_selection(selection);
        trace!(
            len,
            start = selection.start,
            sel_len = selection.len,
            "display refreshed"
        );

        if let Some(listener) = self.listener.as_mut() {
            listener(len);
        }
    }
}

/// Masked display text taken apart into glyph runs and typed characters.
pub(crate) struct MaskedSplit {
    pub(crate) display_len: usize,
    pub(crate) first_typed: Option<usize>,
    pub(crate) last_typed: usize,
    pub(crate) typed: ZeroizingGuard<String>,
}

impl MaskedSplit {
    pub(crate) fn parse(new_text: &str, mask: char) -> Self {
        // Capacity covers every typed byte: the string never reallocates.
        let mut typed = ZeroizingGuard::new(String::with_capacity(new_text.len()));
        let mut display_len = 0usize;
        let mut first_typed = None;
        let mut last_typed = 0usize;

        for (i, ch) in new_text.chars().enumerate() {
            display_len += 1;
            if ch != mask {
                first_typed.get_or_insert(i);
                last_typed = i;
                typed.push(ch);
            }
        }

        Self {
            display_len,
            first_typed,
            last_typed,
            typed,
        }
    }
}

impl<C: EditControl> Drop for SecureEdit<C> {
    fn drop(&mut self) {
        // ProtectedText wipes itself; only the log is needed here.
        debug!(attached = self.control.is_some(), "secure edit dropped");
    }
}

impl<C: EditControl> core::fmt::Debug for SecureEdit<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecureEdit")
            .field("len", &self.buffer.len())
            .field("protected", &self.protected)
            .field("attached", &self.control.is_some())
            .finish_non_exhaustive()
    }
}

