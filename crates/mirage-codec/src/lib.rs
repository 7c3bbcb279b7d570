// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # mirage_codec
//!
//! The value-masking codec: a fixed byte substitution layer composed with a
//! per-instance XOR mask, over the little-endian bit representation of
//! fixed-width scalars.
//!
//! This is deliberately *not* encryption. The substitution tables are fixed
//! and inspectable; the design goal is that a casual memory scan does not
//! find a value's plaintext bit pattern, nothing more.
//!
//! ## Core Types
//!
//! - [`MaskKey`]: 32-bit per-instance key, combined with [`KEY_WHITENER`]
//!   to form the mixing word
//! - [`encode`] / [`decode`]: the reversible transform
//!
//! ## Traits
//!
//! - [`MaskScalar`]: plaintext types the codec masks (`i32`, `u32`, `i64`,
//!   `u64`, `f32`, `f64`)
//! - [`MaskWord`]: the cipher words (`u32`, `u64`)
//!
//! ## Example
//!
//! ```rust
//! use mirage_codec::{decode, encode, MaskKey};
//!
//! let key = MaskKey::from_raw(0x0BAD_F00D);
//!
//! let cipher = encode(f32::NAN, key);
//! let back: f32 = decode(cipher, key);
//!
//! // Bit-exact round trip, not merely "is NaN".
//! assert_eq!(back.to_bits(), f32::NAN.to_bits());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod key;
mod scalar;
mod tables;
mod value;
mod word;

pub mod sbox;

pub use key::{KEY_WHITENER, MaskKey};
pub use scalar::MaskScalar;
pub use value::{decode, encode};
pub use word::MaskWord;
