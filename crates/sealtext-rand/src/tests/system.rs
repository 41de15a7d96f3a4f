// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_system_fill_bytes_ok() {
    let entropy = SystemEntropySource {};
    let mut buf = [0u8; 32];

    assert!(entropy.fill_bytes(&mut buf).is_ok());
    assert!(buf.iter().any(|b| *b != 0));
}

#[test]
fn test_system_fill_bytes_empty_slice_ok() {
    let entropy = SystemEntropySource {};
    let mut buf = [];

    assert!(entropy.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_fill_bytes_with_maps_error() {
    let failing =
        |_: &mut [u8]| -> Result<(), getrandom::Error> { Err(getrandom::Error::UNSUPPORTED) };
    let mut buf = [0u8; 8];

    let result = SystemEntropySource::fill_bytes_with(&failing, &mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_fill_bytes_with_wipes_partial_output() {
    let partial = |dest: &mut [u8]| -> Result<(), getrandom::Error> {
        dest[0] = 0xAA;
        Err(getrandom::Error::UNSUPPORTED)
    };
    let mut buf = [0u8; 8];

    let result = SystemEntropySource::fill_bytes_with(&partial, &mut buf);

    assert!(result.is_err());
    assert_eq!(buf, [0u8; 8]);
}
