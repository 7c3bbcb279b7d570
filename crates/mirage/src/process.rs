// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The process-wide key forge.
//!
//! Holders created through the convenience constructors all draw their
//! keys here. The forge is built lazily on first use and lives for the
//! rest of the process; the mutex serializes concurrent key generation,
//! which is a correctness requirement (the OS entropy source is
//! process-wide shared state), not an optimization.

use std::sync::{Mutex, OnceLock, PoisonError};

use mirage_codec::MaskKey;
use mirage_rand::{KeyForge, SystemEntropySource};

static PROCESS_FORGE: OnceLock<Mutex<KeyForge<SystemEntropySource>>> = OnceLock::new();

/// Draws a fresh key from the process-wide forge.
///
/// # Panics
///
/// Panics if the OS entropy source is unavailable. There is no recovery
/// path inside this library; callers that need to survive entropy failure
/// forge their keys explicitly via [`KeyForge`] and the `_with`
/// constructors.
pub(crate) fn next_process_key() -> MaskKey {
    PROCESS_FORGE
        .get_or_init(|| Mutex::new(KeyForge::new(SystemEntropySource {})))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_key()
        .expect("process entropy source unavailable")
}
