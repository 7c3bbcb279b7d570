// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::bounded::next_in_range;
use crate::error::EntropyError;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, ScriptedEntropySource,
};
use crate::system::SystemEntropySource;

#[test]
fn test_next_in_range_stays_in_range() {
    let source = SystemEntropySource {};

    for _ in 0..100 {
        let value = next_in_range(&source, 1_000, 10_000).expect("Failed next_in_range()");
        assert!((1_000..10_000).contains(&value));
    }
}

#[test]
fn test_next_in_range_single_value_range() {
    let source = ScriptedEntropySource::new(&[0xAB, 0xCD, 0xEF, 0x01]);

    // span == 1 accepts any draw and can only produce min
    assert_eq!(next_in_range(&source, 5, 6).expect("Failed"), 5);
}

#[test]
fn test_next_in_range_is_deterministic_under_scripted_source() {
    // 65536 clears the rejection threshold for span 9000;
    // 65536 % 9000 == 2536, so the draw lands on 3536.
    let source = ScriptedEntropySource::new(&0x0001_0000u32.to_le_bytes());

    assert_eq!(
        next_in_range(&source, 1_000, 10_000).expect("Failed"),
        3_536
    );
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_next_in_range_rejects_biased_draws() {
    // For span 9000 the rejection threshold is 5296: a full draw below it
    // must be discarded and a second draw consumed.
    let mut script = Vec::new();
    script.extend_from_slice(&1_000u32.to_le_bytes()); // rejected
    script.extend_from_slice(&0x0001_0000u32.to_le_bytes()); // accepted
    let source = ScriptedEntropySource::new(&script);

    assert_eq!(
        next_in_range(&source, 1_000, 10_000).expect("Failed"),
        3_536
    );
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_next_in_range_propagates_entropy_error() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let result = next_in_range(&source, 0, 100);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
#[should_panic(expected = "min < max")]
fn test_next_in_range_panics_on_empty_range() {
    let source = SystemEntropySource {};
    let _ = next_in_range(&source, 10, 10);
}

proptest! {
    #[test]
    fn next_in_range_always_lands_in_range(
        min in 0u32..1_000_000,
        span in 1u32..1_000_000,
    ) {
        let source = SystemEntropySource {};
        let value = next_in_range(&source, min, min + span).expect("Failed next_in_range()");

        prop_assert!(value >= min && value < min + span);
    }
}
