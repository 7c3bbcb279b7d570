// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for random byte sources.
///
/// The masking core only needs enough randomness to keep keys from
/// repeating across holder instances; implementations do not have to be
/// cryptographically strong, but the default
/// [`SystemEntropySource`](crate::SystemEntropySource) is. Deterministic
/// tests inject scripted implementations instead of the OS source.
pub trait EntropySource {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the underlying
    /// source is unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
