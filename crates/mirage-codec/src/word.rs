// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher words: the fixed-width unsigned integers that hold masked bits.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::BitXor;

use crate::sbox;

/// A fixed-width cipher word.
///
/// Implemented for `u32` and `u64`. Substitution runs over the word's
/// little-endian bytes; the mixing word is always derived from a 32-bit
/// [`MaskKey`](crate::MaskKey) and widened per word width.
pub trait MaskWord: Copy + Eq + Hash + Debug + BitXor<Output = Self> {
    /// The all-zero word.
    const ZERO: Self;

    /// Applies the forward substitution to every byte of the word.
    fn substitute(self) -> Self;

    /// Applies the inverse substitution to every byte of the word.
    fn desubstitute(self) -> Self;

    /// Widens a 32-bit mixing word to this word's width.
    fn widen_mixer(mixer: u32) -> Self;
}

impl MaskWord for u32 {
    const ZERO: Self = 0;

    #[inline]
    fn substitute(self) -> Self {
        let mut bytes = self.to_le_bytes();
        sbox::transform_bytes(&mut bytes);
        Self::from_le_bytes(bytes)
    }

    #[inline]
    fn desubstitute(self) -> Self {
        let mut bytes = self.to_le_bytes();
        sbox::invert_bytes(&mut bytes);
        Self::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn widen_mixer(mixer: u32) -> Self {
        mixer
    }
}

impl MaskWord for u64 {
    const ZERO: Self = 0;

    #[inline]
    fn substitute(self) -> Self {
        let mut bytes = self.to_le_bytes();
        sbox::transform_bytes(&mut bytes);
        Self::from_le_bytes(bytes)
    }

    #[inline]
    fn desubstitute(self) -> Self {
        let mut bytes = self.to_le_bytes();
        sbox::invert_bytes(&mut bytes);
        Self::from_le_bytes(bytes)
    }

    // The 32-bit mixer sign-extends across the upper half, so a key with
    // the top bit set masks all eight bytes.
    #[inline(always)]
    fn widen_mixer(mixer: u32) -> Self {
        mixer as i32 as i64 as u64
    }
}
