// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use mirage_codec::{MaskKey, MaskScalar, MaskWord, decode, encode};
use mirage_rand::{EntropyError, EntropySource, KeyForge};

use crate::process;

/// An opaque holder for one masked scalar variable.
///
/// `Masked<T>` stores `T` as a ciphertext word paired with an ephemeral
/// per-instance key, so a snapshot of process memory never contains the
/// plaintext bit pattern. Every plaintext exposure is an explicit call
/// site: [`mask`](Masked::mask) going in, [`reveal`](Masked::reveal)
/// coming out. There are no implicit conversions.
///
/// # Lifecycle
///
/// A holder is either untouched or initialized, and the transition is
/// one-way. [`Masked::default`] produces an untouched holder that reveals
/// `T::ZERO`; the first [`reveal`](Masked::reveal) or mutation commits the
/// lazy initialization (a fresh key masking zero). Assignment always
/// generates a brand-new key — re-keying on every fresh value is what
/// keeps ciphertexts from becoming scannable landmarks. In-place
/// arithmetic keeps the existing key and only replaces the ciphertext.
///
/// # Example
///
/// ```rust
/// use mirage::Masked;
///
/// let mut health = Masked::mask(100i32);
///
/// health -= 35;
/// assert_eq!(health.reveal(), 65);
/// assert!(health > 50);
///
/// health.assign(100); // fresh key, fresh ciphertext
/// assert_eq!(health, 100);
/// ```
///
/// # Concurrency
///
/// A `Masked<T>` is a plain `Copy` value with no implicit sharing. The
/// decode-modify-encode sequence inside a mutation is not atomic: mutating
/// one holder from several threads without an external lock can lose
/// updates, exactly like a plain integer field. Key generation itself is
/// serialized process-wide and safe from any thread.
///
/// # What this is not
///
/// Not encryption. The substitution tables are fixed and inspectable; a
/// motivated adversary with source access can unmask any value. The
/// design target is defeating casual memory-scanning tools that search
/// for plaintext bit patterns.
#[derive(Clone, Copy)]
pub struct Masked<T: MaskScalar> {
    cipher: T::Word,
    key: MaskKey,
    initialized: bool,
}

impl<T: MaskScalar> Masked<T> {
    /// Masks `value` under a fresh key from the process-wide forge.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable; use
    /// [`mask_with`](Masked::mask_with) to handle entropy failure
    /// explicitly.
    pub fn mask(value: T) -> Self {
        let key = process::next_process_key();
        Self {
            cipher: encode(value, key),
            key,
            initialized: true,
        }
    }

    /// Masks `value` under a fresh key drawn from `forge`.
    ///
    /// This is the injectable-dependency form: hand it a forge over a
    /// scripted entropy source and the resulting holder is fully
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the forge's source
    /// fails.
    pub fn mask_with<S: EntropySource>(
        value: T,
        forge: &mut KeyForge<S>,
    ) -> Result<Self, EntropyError> {
        let key = forge.next_key()?;
        Ok(Self {
            cipher: encode(value, key),
            key,
            initialized: true,
        })
    }

    /// Stores a fresh plaintext value, always under a brand-new key.
    ///
    /// The old key is never reused, even when the holder was already
    /// initialized.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable.
    pub fn assign(&mut self, value: T) {
        *self = Self::mask(value);
    }

    /// Stores a fresh plaintext value under a brand-new key from `forge`.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the forge's source
    /// fails; the holder is left unchanged in that case.
    pub fn assign_with<S: EntropySource>(
        &mut self,
        value: T,
        forge: &mut KeyForge<S>,
    ) -> Result<(), EntropyError> {
        *self = Self::mask_with(value, forge)?;
        Ok(())
    }

    /// Reveals the plaintext value.
    ///
    /// An untouched holder lazily initializes to `T::ZERO` under a fresh
    /// key and reveals zero; the transition is one-way. Shared-reference
    /// observers (comparisons, [`Display`](fmt::Display), `Hash`) observe
    /// the zero value without committing the transition.
    ///
    /// # Panics
    ///
    /// Panics if lazy initialization needs a key and the OS entropy source
    /// is unavailable. Already-initialized holders never panic here.
    pub fn reveal(&mut self) -> T {
        self.materialize();
        decode(self.cipher, self.key)
    }

    /// Adds `T::ONE` in place, preserving the key.
    pub fn increment(&mut self) {
        self.apply(|v| v.wrapping_add(T::ONE));
    }

    /// Subtracts `T::ONE` in place, preserving the key.
    pub fn decrement(&mut self) {
        self.apply(|v| v.wrapping_sub(T::ONE));
    }

    /// Decode, compute, re-encode under the unchanged key.
    fn apply(&mut self, op: impl FnOnce(T) -> T) {
        self.materialize();
        let value = op(decode(self.cipher, self.key));
        self.cipher = encode(value, self.key);
    }

    fn materialize(&mut self) {
        if !self.initialized {
            *self = Self::mask(T::ZERO);
        }
    }

    /// The decoded value as seen through a shared reference: untouched
    /// holders read as zero.
    fn decoded(&self) -> T {
        if self.initialized {
            decode(self.cipher, self.key)
        } else {
            T::ZERO
        }
    }

    #[cfg(test)]
    pub(crate) fn parts_for_test(&self) -> (T::Word, MaskKey, bool) {
        (self.cipher, self.key, self.initialized)
    }

    #[cfg(test)]
    pub(crate) fn from_parts_for_test(cipher: T::Word, key: MaskKey) -> Self {
        Self {
            cipher,
            key,
            initialized: true,
        }
    }
}

impl<T: MaskScalar> Default for Masked<T> {
    /// An untouched holder; reveals `T::ZERO` on first read.
    fn default() -> Self {
        Self {
            cipher: T::Word::ZERO,
            key: MaskKey::from_raw(0),
            initialized: false,
        }
    }
}

impl<T: MaskScalar> AddAssign<T> for Masked<T> {
    fn add_assign(&mut self, rhs: T) {
        self.apply(|v| v.wrapping_add(rhs));
    }
}

impl<T: MaskScalar> SubAssign<T> for Masked<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.apply(|v| v.wrapping_sub(rhs));
    }
}

impl<T: MaskScalar> Add<T> for Masked<T> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: MaskScalar> Sub<T> for Masked<T> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: MaskScalar> PartialEq for Masked<T> {
    /// Decode-and-compare, with a ciphertext fast path when both holders
    /// share a key and `T`'s bit equality coincides with value equality
    /// (integers). Floats always take the decode path: NaN and -0.0 break
    /// the bit/value correspondence in both directions.
    fn eq(&self, other: &Self) -> bool {
        if T::BITWISE_EQ && self.initialized && other.initialized && self.key == other.key {
            return self.cipher == other.cipher;
        }
        self.decoded() == other.decoded()
    }
}

impl<T: MaskScalar + Eq> Eq for Masked<T> {}

impl<T: MaskScalar> PartialEq<T> for Masked<T> {
    fn eq(&self, other: &T) -> bool {
        self.decoded() == *other
    }
}

impl<T: MaskScalar> PartialOrd for Masked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.decoded().partial_cmp(&other.decoded())
    }
}

impl<T: MaskScalar> PartialOrd<T> for Masked<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.decoded().partial_cmp(other)
    }
}

impl<T: MaskScalar + Ord + Eq> Ord for Masked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decoded().cmp(&other.decoded())
    }
}

/// Hashes the decoded value, so holders that compare equal hash equal
/// regardless of their keys. Floats are excluded the same way they are
/// excluded from `Hash` in std.
impl<T: MaskScalar + Hash> Hash for Masked<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.decoded().hash(state);
    }
}

/// The explicit string conversion: prints the decoded value.
impl<T: MaskScalar> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.decoded(), f)
    }
}

impl<T: MaskScalar> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Masked]")
    }
}
