// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::RefCell;

use alloc::vec::Vec;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source that replays a fixed byte script.
///
/// Bytes are handed out in order; once the script is exhausted the source
/// fails with [`EntropyError::EntropyNotAvailable`]. This makes
/// key-derivation tests fully deterministic, including the number of draws
/// rejection sampling consumes.
pub struct ScriptedEntropySource {
    script: RefCell<Vec<u8>>,
}

impl ScriptedEntropySource {
    /// Creates a source that will replay `script` front to back.
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: RefCell::new(script.to_vec()),
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut script = self.script.borrow_mut();

        if script.len() < dest.len() {
            return Err(EntropyError::EntropyNotAvailable);
        }

        for byte in dest.iter_mut() {
            *byte = script.remove(0);
        }

        Ok(())
    }
}
