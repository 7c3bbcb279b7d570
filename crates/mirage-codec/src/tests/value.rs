// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::key::{KEY_WHITENER, MaskKey};
use crate::value::{decode, encode};
use crate::word::MaskWord;

proptest! {
    #[test]
    fn roundtrip_i32(value in any::<i32>(), raw_key in any::<u32>()) {
        let key = MaskKey::from_raw(raw_key);
        prop_assert_eq!(decode::<i32>(encode(value, key), key), value);
    }

    #[test]
    fn roundtrip_u32(value in any::<u32>(), raw_key in any::<u32>()) {
        let key = MaskKey::from_raw(raw_key);
        prop_assert_eq!(decode::<u32>(encode(value, key), key), value);
    }

    #[test]
    fn roundtrip_i64(value in any::<i64>(), raw_key in any::<u32>()) {
        let key = MaskKey::from_raw(raw_key);
        prop_assert_eq!(decode::<i64>(encode(value, key), key), value);
    }

    #[test]
    fn roundtrip_u64(value in any::<u64>(), raw_key in any::<u32>()) {
        let key = MaskKey::from_raw(raw_key);
        prop_assert_eq!(decode::<u64>(encode(value, key), key), value);
    }

    #[test]
    fn roundtrip_f32_bit_exact(bits in any::<u32>(), raw_key in any::<u32>()) {
        // Drive the float domain through raw bit patterns so NaN payloads
        // and non-canonical encodings are covered, and compare bits rather
        // than IEEE equality.
        let key = MaskKey::from_raw(raw_key);
        let value = f32::from_bits(bits);

        prop_assert_eq!(decode::<f32>(encode(value, key), key).to_bits(), bits);
    }

    #[test]
    fn roundtrip_f64_bit_exact(bits in any::<u64>(), raw_key in any::<u32>()) {
        let key = MaskKey::from_raw(raw_key);
        let value = f64::from_bits(bits);

        prop_assert_eq!(decode::<f64>(encode(value, key), key).to_bits(), bits);
    }

    #[test]
    fn distinct_keys_produce_distinct_ciphertexts(
        value in any::<i32>(),
        raw_a in any::<u32>(),
        raw_b in any::<u32>(),
    ) {
        prop_assume!(raw_a != raw_b);

        let cipher_a = encode(value, MaskKey::from_raw(raw_a));
        let cipher_b = encode(value, MaskKey::from_raw(raw_b));

        // The substituted word is the same for both, so distinct mixing
        // words always separate the ciphertexts.
        prop_assert_ne!(cipher_a, cipher_b);
    }
}

#[test]
fn test_float_specials_round_trip_bit_exact() {
    let key = MaskKey::from_raw(0x1234_5678);
    let specials = [
        f32::NAN,
        f32::from_bits(0x7FC0_0001), // NaN with a payload
        f32::from_bits(0xFFC0_0000), // negative NaN
        -0.0f32,
        0.0f32,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::MIN_POSITIVE,
        f32::from_bits(0x0000_0001), // smallest subnormal
    ];

    for value in specials {
        let back: f32 = decode(encode(value, key), key);
        assert_eq!(
            back.to_bits(),
            value.to_bits(),
            "bit pattern {:#010x} did not survive",
            value.to_bits()
        );
    }
}

#[test]
fn test_zero_key_still_masks_through_whitener() {
    // Even a raw key of zero mixes with the whitening constant, so the
    // ciphertext is never the bare substituted word.
    let key = MaskKey::from_raw(0);

    assert_eq!(key.mixer(), KEY_WHITENER);
    assert_eq!(encode(0i32, key) ^ KEY_WHITENER, 0u32.substitute());
}

#[test]
fn test_whitener_matches_its_derivation() {
    assert_eq!(KEY_WHITENER, 0x3F0F);
}
