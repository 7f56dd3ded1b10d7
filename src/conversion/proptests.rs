//! Property-based tests for the conversion engine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_op() -> impl Strategy<Value = Op> {
    proptest::sample::select(Op::ALL.to_vec())
}

/// Binary strings that fit the 32-bit paths.
fn arb_binary_token() -> impl Strategy<Value = String> {
    "[01]{1,31}"
}

/// Tokens guaranteed to have at least one applicable operation: digit
/// strings within range for some base, or a single non-space character.
fn arb_convertible_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[01]{1,31}",
        "[0-9]{1,9}",
        "[0-9a-fA-F]{1,15}",
        "[!-~]",
    ]
}

/// Decimal values that fit the 32-bit paths.
fn arb_decimal_value() -> impl Strategy<Value = i32> {
    0..=i32::MAX
}

/// Hex values on the wider 64-bit paths.
fn arb_hex_value() -> impl Strategy<Value = i64> {
    0..=i64::MAX
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: classification facts match their character-set definitions
    #[test]
    fn prop_binary_strings_classify_as_binary(token in arb_binary_token()) {
        let c = classify(&token).unwrap();
        prop_assert!(c.is_binary);
        // Binary digit strings are also valid decimal and hex digit strings
        prop_assert!(c.is_decimal);
        prop_assert!(c.is_hex);
    }

    #[test]
    fn prop_non_binary_character_disqualifies(token in "[01]{0,10}[2-9a-z][01]{0,10}") {
        let c = classify(&token).unwrap();
        prop_assert!(!c.is_binary);
    }

    #[test]
    fn prop_single_char_always_classifies(c in any::<char>()) {
        let token = c.to_string();
        // Whitespace-only tokens are the empty-input case, skip them
        prop_assume!(!token.trim().is_empty());
        let classification = classify(&token).unwrap();
        prop_assert!(classification.is_single_char);
    }

    // Invariant 2: classify is deterministic and trim-stable
    #[test]
    fn prop_classify_idempotent(token in "[ -~]{1,20}") {
        prop_assume!(!token.trim().is_empty());
        prop_assert_eq!(classify(&token), classify(&token));
        let padded = format!("  {token}\t");
        prop_assert_eq!(classify(&token), classify(&padded));
    }

    // Invariant 3: the catalog only offers operations that apply, in the
    // fixed presentation order
    #[test]
    fn prop_available_ops_apply_in_order(token in "[ -~]{1,20}") {
        prop_assume!(!token.trim().is_empty());
        let c = classify(&token).unwrap();
        let ops = catalog::available(c);
        prop_assert!(ops.iter().all(|op| op.applies_to(c)));

        // Order is a subsequence of Op::ALL
        let mut all = Op::ALL.iter();
        for op in &ops {
            prop_assert!(all.any(|candidate| candidate == op));
        }
    }

    // Invariant 4: every offered operation converts without error
    #[test]
    fn prop_offered_ops_convert_cleanly(
        token in arb_convertible_token(),
        seed in any::<proptest::sample::Index>()
    ) {
        let ops = catalog::available(classify(&token).unwrap());
        prop_assert!(!ops.is_empty());
        let op = ops[seed.index(ops.len())];
        // Overflow is the only legal failure for an offered operation
        match convert(&token, op) {
            Ok(conv) => prop_assert_eq!(conv.label, op.label()),
            Err(e) => prop_assert_eq!(e, ConvertError::Overflow),
        }
    }

    // Invariant 5: base conversions round-trip within the guaranteed width
    #[test]
    fn prop_decimal_binary_round_trip(value in arb_decimal_value()) {
        let decimal = value.to_string();
        let binary = convert(&decimal, Op::DecimalToBinary).unwrap().value;
        let back = convert(&binary, Op::BinaryToDecimal).unwrap().value;
        prop_assert_eq!(back, decimal);
    }

    #[test]
    fn prop_decimal_hex_round_trip(value in arb_decimal_value()) {
        let decimal = value.to_string();
        let hex = convert(&decimal, Op::DecimalToHex).unwrap().value;
        let back = convert(&hex, Op::HexToDecimal).unwrap().value;
        prop_assert_eq!(back, decimal);
    }

    #[test]
    fn prop_hex_binary_round_trip(value in arb_hex_value()) {
        let hex = format!("{value:x}");
        let binary = convert(&hex, Op::HexToBinary).unwrap().value;
        let decimal = convert(&binary, Op::BinaryToDecimal);
        // The binary rendering round-trips through the decimal path only
        // when it fits the narrower 32-bit range
        if let Ok(conv) = decimal {
            prop_assert_eq!(conv.value, value.to_string());
        } else {
            prop_assert!(value > i64::from(i32::MAX));
        }
    }

    // Invariant 6: convert never panics, whatever the operation
    #[test]
    fn prop_convert_total(token in "[ -~]{0,20}", op in arb_op()) {
        let _ = convert(&token, op);
    }
}
