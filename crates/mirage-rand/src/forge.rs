// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Masking-key derivation.
//!
//! A fresh key starts as a small bounded random seed and is spread across
//! all four key bytes by a fixed scrambling pipeline: a substitution pass,
//! a per-byte additive step, a second substitution pass keyed by byte
//! position, and a final whitening XOR. The pipeline is deterministic per
//! seed; all variability comes from the entropy source.
//!
//! None of this is cryptographic. The only goal is that two holders
//! assigned the same plaintext are overwhelmingly likely to carry different
//! keys, and therefore different ciphertexts.

use mirage_codec::{KEY_WHITENER, MaskKey, sbox};

use crate::bounded::next_in_range;
use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Seed range for fresh keys, half-open.
const SEED_MIN: u32 = 1_000;
const SEED_MAX: u32 = 10_000;

/// Per-byte additive step, `(33 << 5) + 33` truncated to a byte.
const STEP: u8 = ((33u32 << 5) + 33) as u8;

/// Scrambles a raw seed into a usable key.
///
/// Deterministic: equal seeds always produce equal keys. This is what
/// makes key derivation reproducible under an injected entropy source
/// while remaining unpredictable under the system source.
///
/// # Example
///
/// ```rust
/// use mirage_rand::scramble_seed;
///
/// assert_eq!(scramble_seed(1_000), scramble_seed(1_000));
/// assert_ne!(scramble_seed(1_000), scramble_seed(1_001));
/// ```
pub fn scramble_seed(seed: u32) -> MaskKey {
    let mut bytes = seed.to_le_bytes();

    sbox::transform_bytes(&mut bytes);

    for byte in bytes.iter_mut() {
        *byte = byte.wrapping_add(STEP);
    }

    // Position-keyed diffusion pass: identical bytes land on different
    // table rows depending on where they sit in the key.
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = sbox::transform_byte(*byte ^ sbox::transform_byte(i as u8));
    }

    MaskKey::from_raw(u32::from_le_bytes(bytes) ^ KEY_WHITENER)
}

/// Derives fresh masking keys from an owned entropy source.
///
/// The forge owns its source; callers that need deterministic keys hand it
/// a scripted source, everything else hands it
/// [`SystemEntropySource`](crate::SystemEntropySource). A forge has no
/// state beyond the source, so dropping it releases nothing and two forges
/// over independent sources never interfere.
///
/// # Example
///
/// ```rust
/// use mirage_rand::{KeyForge, SystemEntropySource, scramble_seed};
///
/// let mut forge = KeyForge::new(SystemEntropySource {});
/// let key = forge.next_key().expect("entropy source failed");
///
/// // Every key the forge can produce is the scramble of some seed.
/// assert!((1_000..10_000).any(|seed| scramble_seed(seed) == key));
/// ```
pub struct KeyForge<S: EntropySource> {
    source: S,
}

impl<S: EntropySource> KeyForge<S> {
    /// Creates a forge over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Derives the next key: one bounded draw, one scramble.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    pub fn next_key(&mut self) -> Result<MaskKey, EntropyError> {
        let seed = next_in_range(&self.source, SEED_MIN, SEED_MAX)?;
        Ok(scramble_seed(seed))
    }

    /// Consumes the forge, handing back its source.
    pub fn into_source(self) -> S {
        self.source
    }
}
