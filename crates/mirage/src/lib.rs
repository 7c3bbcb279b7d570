// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # mirage
//!
//! Lightweight masking for gameplay-critical values against casual memory
//! scanners.
//!
//! Interactive applications keep health, currency and timers as plain
//! integers and floats, which makes them trivial to find and edit with a
//! real-time memory scanner. Mirage stores each such value as a
//! ciphertext paired with an ephemeral per-instance key, so the plaintext
//! bit pattern never sits in memory — while costing a handful of table
//! lookups and XORs per access.
//!
//! This is *not* encryption: the substitution tables are fixed and
//! inspectable, and an adversary with source access can unmask anything.
//! The design target is exactly the casual scanning tool, nothing
//! stronger.
//!
//! # Core Types
//!
//! - [`Masked<T>`](Masked): holder for one scalar (`i32`, `u32`, `i64`,
//!   `u64`, `f32`, `f64`)
//! - [`MaskedColor<C>`](MaskedColor): holder for a 4-channel color,
//!   generic over the host engine's color type via [`ColorChannels`]
//! - [`KeyForge`]: injectable key derivation for deterministic tests
//!
//! # Quick Start
//!
//! ```rust
//! use mirage::{Masked, MaskedColor};
//!
//! let mut gold = Masked::mask(250u64);
//! let mut speed = Masked::mask(5.5f32);
//! let mut tint = MaskedColor::mask([1.0, 1.0, 1.0, 1.0]);
//!
//! gold += 50;
//! speed -= 1.25;
//!
//! assert_eq!(gold.reveal(), 300);
//! assert_eq!(speed.reveal(), 4.25);
//! assert_eq!(tint.reveal(), [1.0, 1.0, 1.0, 1.0]);
//!
//! // Comparisons decode under the hood; no plaintext is stored.
//! assert!(gold > 100);
//! assert!(gold != 299);
//! ```
//!
//! # Deterministic keys in tests
//!
//! ```rust
//! use mirage::{KeyForge, Masked};
//! use mirage_rand::test_utils::ScriptedEntropySource;
//!
//! let mut forge = KeyForge::new(ScriptedEntropySource::new(
//!     &0x0001_0000u32.to_le_bytes(),
//! ));
//! let holder = Masked::mask_with(42i32, &mut forge).unwrap();
//!
//! assert_eq!(holder, 42);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod color;
mod masked;
mod process;

pub use color::{ColorChannels, MaskedColor};
pub use masked::Masked;

pub use mirage_codec as codec;
pub use mirage_rand as rand;

pub use mirage_codec::{KEY_WHITENER, MaskKey, MaskScalar, MaskWord, decode, encode};
pub use mirage_rand::{EntropyError, EntropySource, KeyForge, SystemEntropySource};
