// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

/// Estimates the strength of a password in bits.
pub trait StrengthEstimator: Send + Sync {
    /// Estimated bits of entropy of `password`.
    fn estimate(&self, password: &[char]) -> u32;
}

/// Bits at which the quality bar is full.
const FULL_QUALITY_BITS: u32 = 128;

/// Estimated strength, as delivered to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityReport {
    /// Estimated bits.
    pub bits: u32,
    /// Fill level of a quality bar, `0..=100` (full at 128 bits).
    pub percent: u8,
}

impl QualityReport {
    /// Builds a report for `bits`.
    pub fn from_bits(bits: u32) -> Self {
        let percent = (u64::from(bits) * 100 / u64::from(FULL_QUALITY_BITS)).min(100) as u8;

        Self { bits, percent }
    }
}

// Bits added to the character space per class present.
const SPACE_ESCAPE: u32 = 60;
const SPACE_ALPHA: u32 = 26;
const SPACE_DIGIT: u32 = 10;
const SPACE_SIMPLE_SPECIAL: u32 = 16;
const SPACE_EXTENDED_SPECIAL: u32 = 17;
const SPACE_HIGH: u32 = 112;

#[derive(Default)]
struct CharClasses {
    escape: bool,
    upper: bool,
    lower: bool,
    digit: bool,
    simple_special: bool,
    extended_special: bool,
    high: bool,
}

impl CharClasses {
    fn record(&mut self, ch: char) {
        match ch {
            '\0'..='\u{1F}' => self.escape = true,
            'A'..='Z' => self.upper = true,
            'a'..='z' => self.lower = true,
            '0'..='9' => self.digit = true,
            ' '..='/' => self.simple_special = true,
            ':'..='@' | '['..='`' | '{'..='~' => self.extended_special = true,
            _ => self.high = true,
        }
    }

    fn space(&self) -> u32 {
        [
            (self.escape, SPACE_ESCAPE),
            (self.upper, SPACE_ALPHA),
            (self.lower, SPACE_ALPHA),
            (self.digit, SPACE_DIGIT),
            (self.simple_special, SPACE_SIMPLE_SPECIAL),
            (self.extended_special, SPACE_EXTENDED_SPECIAL),
            (self.high, SPACE_HIGH),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, bits)| bits)
        .sum()
    }
}

/// Character-space estimator.
///
/// `bits = ceil(log2(space) * effective_length)`, where `space` sums the
/// sizes of the character classes present and the effective length
/// discounts repeated characters and repeated steps between neighbours.
///
/// ```
/// use sealtext_edit::{CharSpaceEstimator, StrengthEstimator};
///
/// let chars: Vec<char> = "aaaa".chars().collect();
/// // effective length 1 + 1/2 + 1/2 * 1/3 + 1/3 * 1/4 = 1.75 over 26 symbols
/// assert_eq!(CharSpaceEstimator.estimate(&chars), 9);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CharSpaceEstimator;

impl StrengthEstimator for CharSpaceEstimator {
    fn estimate(&self, password: &[char]) -> u32 {
        let mut classes = CharClasses::default();
        let mut char_counts: HashMap<char, u32> = HashMap::new();
        let mut diff_counts: HashMap<i64, u32> = HashMap::new();
        let mut effective_len = 0.0f64;

        for (i, &ch) in password.iter().enumerate() {
            classes.record(ch);

            let mut diff_factor = 1.0f64;
            if i > 0 {
                let diff = i64::from(u32::from(ch)) - i64::from(u32::from(password[i - 1]));
                let seen = diff_counts.entry(diff).or_insert(0);
                *seen += 1;
                if *seen > 1 {
                    diff_factor /= f64::from(*seen);
                }
            }

            let count = char_counts.entry(ch).or_insert(0);
            *count += 1;
            effective_len += diff_factor / f64::from(*count);
        }

        let space = classes.space();
        if space == 0 {
            return 0;
        }

        (f64::from(space).log2() * effective_len).ceil() as u32
    }
}
