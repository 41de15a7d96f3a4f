// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Serializable settings for the edit engine and its services.

use serde::{Deserialize, Serialize};

/// Default mask glyph, BLACK CIRCLE.
pub const MASK_CHAR: char = '\u{25CF}';

/// Legacy mask glyph, MULTIPLICATION SIGN, for fonts without U+25CF.
pub const LEGACY_MASK_CHAR: char = '\u{00D7}';

/// Settings for a [`SecureEdit`](crate::SecureEdit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecureEditConfig {
    /// Glyph shown for every protected character.
    pub mask_char: char,
    /// Select everything on the first focus if nothing was selected yet.
    pub select_all_on_first_focus: bool,
    /// Memory decoy settings.
    pub decoy: DecoyConfig,
}

impl Default for SecureEditConfig {
    fn default() -> Self {
        Self {
            mask_char: MASK_CHAR,
            select_all_on_first_focus: true,
            decoy: DecoyConfig::default(),
        }
    }
}

impl SecureEditConfig {
    /// Sets the mask glyph.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Enables or disables select-all on first focus.
    pub fn with_select_all_on_first_focus(mut self, enabled: bool) -> Self {
        self.select_all_on_first_focus = enabled;
        self
    }

    /// Replaces the decoy settings.
    pub fn with_decoy(mut self, decoy: DecoyConfig) -> Self {
        self.decoy = decoy;
        self
    }
}

/// Settings for the [`DecoyPool`](crate::DecoyPool).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoyConfig {
    /// Whether refreshes are performed at all.
    pub enabled: bool,
    /// Number of decoy strings kept alive.
    pub count: usize,
    /// Upper bound on decoy length, in characters.
    pub max_len: usize,
}

impl Default for DecoyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 8,
            max_len: 256,
        }
    }
}

impl DecoyConfig {
    /// Enables or disables decoys.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the number of decoys.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the maximum decoy length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

/// Settings for the [`QualityMonitor`](crate::QualityMonitor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Whether submissions are estimated.
    pub enabled: bool,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl QualityConfig {
    /// Enables or disables estimation.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
