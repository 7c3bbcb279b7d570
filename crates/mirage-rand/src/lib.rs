// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # mirage_rand
//!
//! Entropy sources and masking-key derivation for the mirage stack.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`KeyForge`]: derives fresh [`MaskKey`](mirage_codec::MaskKey)s from
//!   an owned entropy source
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for random byte sources; the seam where
//!   deterministic tests inject scripted randomness
//!
//! ## Example
//!
//! ```rust
//! use mirage_rand::{EntropySource, KeyForge, SystemEntropySource};
//!
//! // Generate random bytes directly
//! let mut buf = [0u8; 8];
//! SystemEntropySource {}
//!     .fill_bytes(&mut buf)
//!     .expect("Failed to generate entropy");
//!
//! // Derive a masking key
//! let mut forge = KeyForge::new(SystemEntropySource {});
//! let key = forge.next_key().expect("Failed to derive key");
//! ```
//!
//! ## Concurrency
//!
//! A [`KeyForge`] is not internally synchronized. Callers sharing one
//! forge across threads must serialize access (the `mirage` facade wraps
//! its process-wide forge in a `Mutex` for exactly this reason).

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod bounded;
mod error;
mod forge;
mod support;
mod system;
mod traits;

pub use bounded::next_in_range;
pub use error::EntropyError;
pub use forge::{KeyForge, scramble_seed};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
