// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The encode/decode arithmetic composing substitution with the key mask.

use crate::key::MaskKey;
use crate::scalar::MaskScalar;
use crate::word::MaskWord;

/// Encodes a plaintext value into its cipher word under `key`.
///
/// The value's bits are substituted byte-wise through the forward table,
/// then XORed with the key's mixing word widened to the value's width.
/// Total over the whole domain; there is no failure case.
///
/// # Example
///
/// ```rust
/// use mirage_codec::{decode, encode, MaskKey};
///
/// let key = MaskKey::from_raw(0xDEAD_BEEF);
/// let cipher = encode(1337i32, key);
///
/// assert_ne!(cipher, 1337u32);
/// assert_eq!(decode::<i32>(cipher, key), 1337);
/// ```
#[inline]
pub fn encode<T: MaskScalar>(value: T, key: MaskKey) -> T::Word {
    value.to_bits().substitute() ^ T::Word::widen_mixer(key.mixer())
}

/// Decodes a cipher word back to its plaintext value under `key`.
///
/// Exact inverse of [`encode`]: `decode(encode(v, k), k)` reproduces `v`
/// bit-for-bit, including NaN payloads, signed zeros and infinities.
#[inline]
pub fn decode<T: MaskScalar>(cipher: T::Word, key: MaskKey) -> T {
    T::from_bits((cipher ^ T::Word::widen_mixer(key.mixer())).desubstitute())
}
