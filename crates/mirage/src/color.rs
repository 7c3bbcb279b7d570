// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::marker::PhantomData;

use mirage_codec::{MaskKey, decode, encode};
use mirage_rand::{EntropyError, EntropySource, KeyForge};

use crate::process;

/// Channel access for the host rendering layer's color type.
///
/// The masking core only needs two things from a color: its four float
/// channels by fixed position (`[r, g, b, a]`) and a constructor taking
/// the same four floats back. Everything else about the host type is
/// opaque. Implemented for `[f32; 4]` out of the box; a host engine
/// implements it for its own color in two one-liners.
pub trait ColorChannels: Copy {
    /// Builds a color from `[r, g, b, a]`.
    fn from_channels(channels: [f32; 4]) -> Self;

    /// Returns the color's `[r, g, b, a]`.
    fn channels(self) -> [f32; 4];
}

impl ColorChannels for [f32; 4] {
    #[inline]
    fn from_channels(channels: [f32; 4]) -> Self {
        channels
    }

    #[inline]
    fn channels(self) -> [f32; 4] {
        self
    }
}

/// An opaque holder for one masked 4-channel color.
///
/// Each channel is encoded independently under the holder's single key,
/// producing four independent ciphertext words; no channel's plaintext
/// bits appear in memory. Lifecycle matches [`Masked`](crate::Masked):
/// untouched holders reveal the zero color (`[0.0; 4]`), assignment
/// always re-keys.
///
/// # Example
///
/// ```rust
/// use mirage::MaskedColor;
///
/// let mut tint = MaskedColor::mask([1.0, 0.5, 0.25, 1.0]);
///
/// assert_eq!(tint.reveal(), [1.0, 0.5, 0.25, 1.0]);
/// assert!(tint == [1.0, 0.5, 0.25, 1.0]);
/// ```
#[derive(Clone, Copy)]
pub struct MaskedColor<C: ColorChannels> {
    cipher: [u32; 4],
    key: MaskKey,
    initialized: bool,
    _host: PhantomData<fn() -> C>,
}

fn encode_channels(channels: [f32; 4], key: MaskKey) -> [u32; 4] {
    channels.map(|channel| encode(channel, key))
}

fn decode_channels(cipher: [u32; 4], key: MaskKey) -> [f32; 4] {
    cipher.map(|word| decode::<f32>(word, key))
}

impl<C: ColorChannels> MaskedColor<C> {
    /// Masks `color` under a fresh key from the process-wide forge.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable; use
    /// [`mask_with`](MaskedColor::mask_with) to handle entropy failure
    /// explicitly.
    pub fn mask(color: C) -> Self {
        let key = process::next_process_key();
        Self {
            cipher: encode_channels(color.channels(), key),
            key,
            initialized: true,
            _host: PhantomData,
        }
    }

    /// Masks `color` under a fresh key drawn from `forge`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the forge's source
    /// fails.
    pub fn mask_with<S: EntropySource>(
        color: C,
        forge: &mut KeyForge<S>,
    ) -> Result<Self, EntropyError> {
        let key = forge.next_key()?;
        Ok(Self {
            cipher: encode_channels(color.channels(), key),
            key,
            initialized: true,
            _host: PhantomData,
        })
    }

    /// Stores a fresh color, always under a brand-new key.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable.
    pub fn assign(&mut self, color: C) {
        *self = Self::mask(color);
    }

    /// Stores a fresh color under a brand-new key from `forge`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the forge's source
    /// fails; the holder is left unchanged in that case.
    pub fn assign_with<S: EntropySource>(
        &mut self,
        color: C,
        forge: &mut KeyForge<S>,
    ) -> Result<(), EntropyError> {
        *self = Self::mask_with(color, forge)?;
        Ok(())
    }

    /// Reveals the plaintext color.
    ///
    /// An untouched holder lazily initializes to the zero color under a
    /// fresh key, then reveals it.
    ///
    /// # Panics
    ///
    /// Panics if lazy initialization needs a key and the OS entropy source
    /// is unavailable.
    pub fn reveal(&mut self) -> C {
        if !self.initialized {
            *self = Self::mask(C::from_channels([0.0; 4]));
        }
        C::from_channels(decode_channels(self.cipher, self.key))
    }

    fn decoded_channels(&self) -> [f32; 4] {
        if self.initialized {
            decode_channels(self.cipher, self.key)
        } else {
            [0.0; 4]
        }
    }

    #[cfg(test)]
    pub(crate) fn parts_for_test(&self) -> ([u32; 4], MaskKey, bool) {
        (self.cipher, self.key, self.initialized)
    }
}

impl<C: ColorChannels> Default for MaskedColor<C> {
    /// An untouched holder; reveals the zero color on first read.
    fn default() -> Self {
        Self {
            cipher: [0; 4],
            key: MaskKey::from_raw(0),
            initialized: false,
            _host: PhantomData,
        }
    }
}

/// Decode-and-compare on all four channels. No ciphertext fast path:
/// channels are floats, where bit equality and IEEE equality disagree.
impl<C: ColorChannels> PartialEq for MaskedColor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.decoded_channels() == other.decoded_channels()
    }
}

impl<C: ColorChannels> PartialEq<C> for MaskedColor<C> {
    fn eq(&self, other: &C) -> bool {
        self.decoded_channels() == other.channels()
    }
}

impl<C: ColorChannels> fmt::Debug for MaskedColor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED MaskedColor]")
    }
}
