// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Draws a uniform random integer in `[min, max)` from `source`.
///
/// Uses rejection sampling over 4-byte draws to avoid modulo bias: draws
/// whose residue class is over-represented in the 32-bit range are
/// discarded and redrawn.
///
/// # Panics
///
/// Panics if `min >= max` (an empty range is a programmer error, not a
/// runtime condition).
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
///
/// # Example
///
/// ```rust
/// use mirage_rand::{next_in_range, SystemEntropySource};
///
/// let seed = next_in_range(&SystemEntropySource {}, 1_000, 10_000).unwrap();
/// assert!((1_000..10_000).contains(&seed));
/// ```
pub fn next_in_range<S: EntropySource>(
    source: &S,
    min: u32,
    max: u32,
) -> Result<u32, EntropyError> {
    assert!(min < max, "next_in_range requires min < max");

    let span = max - min;
    let threshold = (u32::MAX - span + 1) % span;

    loop {
        let mut bytes = [0u8; 4];
        source.fill_bytes(&mut bytes)?;

        let r = u32::from_le_bytes(bytes);
        if r >= threshold {
            return Ok(min + (r % span));
        }
    }
}
