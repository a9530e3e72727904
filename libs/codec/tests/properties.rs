//! Property-based tests for the hex / Base32 codec.
//!
//! ## Test Categories
//! 1. **Round-trip**: encode and decode are inverses on canonical input
//! 2. **Shape**: Base32 output is always 26 symbols, hex always 32 digits
//! 3. **Normalization**: prefix, case and padding do not change the result
//! 4. **Agreement**: results match the `ulid` crate
//! 5. **Ordering**: Base32 string order matches numeric order

use proptest::prelude::*;
use ulidhex_codec::{
    decode, decode_display, decode_parts, encode, scan, CodecError, Identifier, Radix, Ulid,
};

// ─────────────────────────────────────────────────────────────────────────────
// Proptest Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Strategy for canonical 32-digit lowercase hex strings.
fn canonical_hex() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|value| format!("{value:032x}"))
}

/// Strategy for hex strings of 0 to 32 digits in mixed case.
fn short_hex() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{0,32}"
}

/// Strategy for well-formed Base32 ULID strings.
fn base32() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|value| Ulid(value).to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_hex_roundtrip(hex in canonical_hex()) {
        let encoded = encode(&hex).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), hex);
    }

    #[test]
    fn prop_base32_roundtrip(id in base32()) {
        let hex = decode(&id).unwrap();
        prop_assert_eq!(encode(&hex).unwrap(), id);
    }

    #[test]
    fn prop_parts_recombine(value in any::<u128>()) {
        let id = Identifier::new(value);
        let (timestamp_ms, random) = decode_parts(&id.to_base32()).unwrap();
        prop_assert_eq!(Identifier::from_parts(timestamp_ms, random), id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape and normalization
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_encode_fixed_width(hex in short_hex()) {
        let encoded = encode(&hex).unwrap();
        prop_assert_eq!(encoded.len(), 26);
        prop_assert!(scan::is_ulid_shaped(&encoded));
    }

    #[test]
    fn prop_decode_fixed_width(id in base32()) {
        prop_assert_eq!(decode(&id).unwrap().len(), 32);
    }

    #[test]
    fn prop_encode_pads_short_input(hex in short_hex()) {
        let padded = format!("{hex:0>32}");
        prop_assert_eq!(encode(&hex).unwrap(), encode(&padded).unwrap());
        prop_assert_eq!(decode(&encode(&hex).unwrap()).unwrap(), padded.to_lowercase());
    }

    #[test]
    fn prop_encode_ignores_prefix(hex in short_hex()) {
        prop_assert_eq!(encode(&format!("0x{hex}")).unwrap(), encode(&hex).unwrap());
        prop_assert_eq!(encode(&format!("0X{hex}")).unwrap(), encode(&hex).unwrap());
    }

    #[test]
    fn prop_encode_ignores_case(hex in short_hex()) {
        prop_assert_eq!(
            encode(&hex.to_uppercase()).unwrap(),
            encode(&hex.to_lowercase()).unwrap()
        );
    }

    #[test]
    fn prop_encode_rejects_long_input(hex in "[0-9a-f]{33,64}") {
        let err = encode(&hex).unwrap_err();
        prop_assert!(err.is_length_error(), "unexpected error: {err}");
    }

    #[test]
    fn prop_encode_rejects_non_hex(
        head in "[0-9a-f]{0,15}",
        bad in "[g-wyzG-WYZ]",
        tail in "[0-9a-f]{0,15}",
    ) {
        let input = format!("{head}{bad}{tail}");
        let err = encode(&input).unwrap_err();
        prop_assert_eq!(
            err,
            CodecError::InvalidCharacter {
                character: bad.chars().next().unwrap(),
                index: head.len(),
            }
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Agreement with the ulid crate
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_encode_matches_ulid_crate(value in any::<u128>()) {
        let encoded = encode(&format!("{value:x}")).unwrap();
        prop_assert_eq!(encoded, Ulid(value).to_string());
    }

    #[test]
    fn prop_parts_match_ulid_crate(value in any::<u128>()) {
        let ulid = Ulid(value);
        let (timestamp_ms, random) = decode_parts(&ulid.to_string()).unwrap();
        prop_assert_eq!(timestamp_ms, ulid.timestamp_ms());
        prop_assert_eq!(random, ulid.random());
    }

    #[test]
    fn prop_display_decode_concatenates_parts(value in any::<u128>()) {
        let ulid = Ulid(value);
        let id = ulid.to_string();
        let time = match ulid.timestamp_ms() {
            0 => String::new(),
            ms => format!("{ms:x}"),
        };
        prop_assert_eq!(
            decode_display(&id, Radix::Hex).unwrap(),
            format!("{time}{:x}", ulid.random())
        );

        let time = match ulid.timestamp_ms() {
            0 => String::new(),
            ms => ms.to_string(),
        };
        prop_assert_eq!(
            decode_display(&id, Radix::Decimal).unwrap(),
            format!("{time}{}", ulid.random())
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_base32_order_matches_numeric(a in any::<u128>(), b in any::<u128>()) {
        let (left, right) = (Identifier::new(a), Identifier::new(b));
        prop_assert_eq!(left.cmp(&right), left.to_base32().cmp(&right.to_base32()));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Known vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_all_zero_vector() {
    assert_eq!(encode(&"0".repeat(32)).unwrap(), "0".repeat(26));
    assert_eq!(decode(&"0".repeat(26)).unwrap(), "0".repeat(32));
}

#[test]
fn test_documented_ulid_vector() {
    let id = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    let (timestamp_ms, random) = decode_parts(id).unwrap();
    assert_eq!(timestamp_ms, 1_469_922_850_259);
    assert_eq!(format!("{random:x}"), "d6764c61efb99302bd5b");
    assert_eq!(decode(id).unwrap(), "01563e3ab5d3d6764c61efb99302bd5b");
}
