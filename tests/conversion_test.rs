//! Property tests for the conversion core.
//!
//! These tests verify:
//! 1. Bytes and integers round-trip exactly through hex, at any magnitude
//! 2. Unit conversions round-trip for every denomination
//! 3. Checksums are deterministic and independent of input casing
//! 4. The documented boundary values and error kinds
//!
//! Inputs come from a seeded RNG, so every run sees the same values.
//!
//! ```bash
//! cargo test --test conversion_test
//! ```

use chain_convert::units::DENOMINATIONS;
use chain_convert::{
    bytes_to_hex, from_wei, hex_to_bytes, hex_to_number, number_to_hex, to_checksum_address,
    to_hex, to_hex_type, to_wei, Address, ConversionError, HexType, Numeric,
};

use num_bigint::{BigInt, Sign};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Iterations per property
const CASES: usize = 500;

/// Seed shared by all properties
const SEED: u64 = 42;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Random byte sequence of length 0..64
fn random_bytes(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let len = rng.gen_range(0..64);
    (0..len).map(|_| rng.gen()).collect()
}

/// Random signed integer of up to 320 bits
fn random_bigint(rng: &mut ChaCha8Rng) -> BigInt {
    let bytes = rng.gen_range(0..=40);
    let magnitude: Vec<u8> = (0..bytes).map(|_| rng.gen()).collect();
    let sign = if rng.gen_bool(0.5) { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_be(sign, &magnitude)
}

/// Random 40-digit lowercase address
fn random_address(rng: &mut ChaCha8Rng) -> String {
    let bytes: [u8; 20] = rng.gen();
    format!("0x{}", hex::encode(bytes))
}

/// Randomly uppercase hex letters after the prefix
fn scramble_case(rng: &mut ChaCha8Rng, s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i >= 2 && rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

// ============================================================================
// ROUND-TRIPS
// ============================================================================

#[test]
fn bytes_roundtrip_through_hex() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let bytes = random_bytes(&mut rng);
        let hex = bytes_to_hex(bytes.clone()).unwrap();
        assert_eq!(hex, hex.to_lowercase());
        assert_eq!(hex_to_bytes(hex).unwrap(), bytes);
    }
}

#[test]
fn integers_roundtrip_through_hex() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let value = random_bigint(&mut rng);
        let hex = number_to_hex(value.clone()).unwrap();
        let back = hex_to_number(&hex).unwrap();
        assert_eq!(back.to_bigint(), value, "roundtrip failed for {}", hex);
    }
}

#[test]
fn safe_edge_roundtrips() {
    let edge = BigInt::from(chain_convert::MAX_SAFE_INTEGER);
    for delta in -2i64..=2 {
        for value in [&edge + delta, -(&edge + delta)] {
            let hex = number_to_hex(value.clone()).unwrap();
            let back = hex_to_number(&hex).unwrap();
            assert_eq!(back, Numeric::from_bigint(value.clone()));
            assert_eq!(back.is_safe(), value.magnitude() <= edge.magnitude());
        }
    }
}

#[test]
fn units_roundtrip_for_every_denomination() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let value = random_bigint(&mut rng).magnitude().clone();
        let value = BigInt::from(value);
        let unit = DENOMINATIONS[rng.gen_range(0..DENOMINATIONS.len())];
        let name = unit.name().unwrap();

        let shown = from_wei(value.clone(), name).unwrap();
        assert_eq!(to_wei(shown.as_str(), name).unwrap(), value.to_string(), "unit {}", name);
    }
}

// ============================================================================
// CHECKSUM
// ============================================================================

#[test]
fn checksum_ignores_input_case() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let address = random_address(&mut rng);
        let expected = to_checksum_address(Some(address.as_str())).unwrap();
        let scrambled = scramble_case(&mut rng, &address);
        assert_eq!(to_checksum_address(Some(scrambled.as_str())).unwrap(), expected);

        // Idempotent under re-lowercasing
        let again = to_checksum_address(Some(expected.to_lowercase().as_str())).unwrap();
        assert_eq!(again, expected);

        // Typed addresses compare by value, never by casing
        let a: Address = address.parse().unwrap();
        let b: Address = scrambled.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_checksum(), expected);
    }
}

#[test]
fn checksum_degenerate_inputs() {
    assert_eq!(
        to_checksum_address(Some("0x0000000000000000000000000000000000000000")).unwrap(),
        ""
    );
    assert_eq!(to_checksum_address(None).unwrap(), "");
}

// ============================================================================
// BOUNDARIES AND ERRORS
// ============================================================================

#[test]
fn unit_boundaries() {
    assert_eq!(from_wei(1, "ether").unwrap(), "0.000000000000000001");
    assert_eq!(
        from_wei(BigInt::from(1_000_000_000_000_000_000u64), "ether").unwrap(),
        "1"
    );
    assert_eq!(to_wei("1.5", "ether").unwrap(), "1500000000000000000");
}

#[test]
fn dispatcher_precedence() {
    assert_eq!(to_hex(true).unwrap(), "0x01");
    assert_eq!(to_hex_type(-5).unwrap(), HexType::Int256);
    assert_eq!(to_hex(-5).unwrap(), "-0x5");
    assert_eq!(to_hex_type("0xAB").unwrap(), HexType::Bytes);
    assert_eq!(to_hex("0xAB").unwrap(), "0xAB");
}

#[test]
fn error_kinds() {
    assert!(matches!(
        number_to_hex("not-a-number"),
        Err(ConversionError::InvalidInteger(_))
    ));
    assert!(matches!(
        to_wei(1, "parsec"),
        Err(ConversionError::InvalidUnit(_))
    ));
    assert!(matches!(
        bytes_to_hex(vec![1i64, 999]),
        Err(ConversionError::InvalidBytes(_))
    ));
    assert!(matches!(
        to_checksum_address(Some("0x12")),
        Err(ConversionError::InvalidAddress(_))
    ));
    assert!(matches!(to_hex("42"), Err(ConversionError::HexProcessing(_))));
}

#[test]
fn conversions_are_thread_safe() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for _ in 0..100 {
                    let value = random_bigint(&mut rng);
                    let hex = number_to_hex(value.clone()).unwrap();
                    assert_eq!(hex_to_number(&hex).unwrap().to_bigint(), value);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
