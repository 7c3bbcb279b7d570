// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for entropy-dependent code paths.

mod mock_entropy_source;
mod scripted_entropy_source;

pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
pub use scripted_entropy_source::ScriptedEntropySource;
