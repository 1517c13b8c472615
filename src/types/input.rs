//! Loosely-typed inputs accepted at the conversion boundary.
//!
//! Clients of the conversion core hand over values whose exact shape is only
//! known at runtime (a number, a decimal string, a hex string, a byte buffer).
//! These enums name every accepted shape so the codecs can match on them
//! explicitly instead of inspecting types at runtime.

use std::fmt;

use num_bigint::BigInt;

// ============================================================================
// NumberInput
// ============================================================================

/// Anything that may be interpreted as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// Native integer
    Int(i64),
    /// Native floating point (only integral values convert to integers)
    Float(f64),
    /// Arbitrary-precision integer
    Big(BigInt),
    /// Decimal or `0x` hex text
    Str(String),
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Int(v) => write!(f, "{}", v),
            NumberInput::Float(v) => write!(f, "{}", v),
            NumberInput::Big(v) => write!(f, "{}", v),
            NumberInput::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! number_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput {
                fn from(value: $t) -> Self {
                    NumberInput::Int(i64::from(value))
                }
            }
        )*
    };
}

number_input_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for NumberInput {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => NumberInput::Int(v),
            Err(_) => NumberInput::Big(BigInt::from(value)),
        }
    }
}

impl From<u128> for NumberInput {
    fn from(value: u128) -> Self {
        NumberInput::Big(BigInt::from(value))
    }
}

impl From<i128> for NumberInput {
    fn from(value: i128) -> Self {
        NumberInput::Big(BigInt::from(value))
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<BigInt> for NumberInput {
    fn from(value: BigInt) -> Self {
        NumberInput::Big(value)
    }
}

impl From<&BigInt> for NumberInput {
    fn from(value: &BigInt) -> Self {
        NumberInput::Big(value.clone())
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Str(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Str(value)
    }
}

impl From<crate::types::Numeric> for NumberInput {
    fn from(value: crate::types::Numeric) -> Self {
        match value {
            crate::types::Numeric::Safe(v) => NumberInput::Int(v),
            crate::types::Numeric::Big(v) => NumberInput::Big(v),
        }
    }
}

// ============================================================================
// ByteInput
// ============================================================================

/// The three accepted forms of a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteInput {
    /// Native byte buffer
    Buffer(Vec<u8>),
    /// Array of integers, each of which must be within 0..=255
    Array(Vec<i64>),
    /// `0x`-prefixed hex string with an even number of digits
    Hex(String),
}

impl fmt::Display for ByteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteInput::Buffer(b) => write!(f, "{:?}", b),
            ByteInput::Array(a) => write!(f, "{:?}", a),
            ByteInput::Hex(h) => f.write_str(h),
        }
    }
}

impl From<Vec<u8>> for ByteInput {
    fn from(value: Vec<u8>) -> Self {
        ByteInput::Buffer(value)
    }
}

impl From<&[u8]> for ByteInput {
    fn from(value: &[u8]) -> Self {
        ByteInput::Buffer(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ByteInput {
    fn from(value: [u8; N]) -> Self {
        ByteInput::Buffer(value.to_vec())
    }
}

impl From<Vec<i64>> for ByteInput {
    fn from(value: Vec<i64>) -> Self {
        ByteInput::Array(value)
    }
}

impl From<&str> for ByteInput {
    fn from(value: &str) -> Self {
        ByteInput::Hex(value.to_string())
    }
}

impl From<String> for ByteInput {
    fn from(value: String) -> Self {
        ByteInput::Hex(value)
    }
}

// ============================================================================
// Value
// ============================================================================

/// Input of the type-coercion dispatcher.
///
/// String refinements (address, negative hex, strict hex, plain text) are
/// resolved by [`crate::coerce::to_hex`] in a fixed precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// Native integer
    Int(i64),
    /// Native floating point number
    Float(f64),
    /// Arbitrary-precision integer
    Big(BigInt),
    /// Native byte buffer
    Bytes(Vec<u8>),
    /// Any text
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Big(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "{:?}", v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Big(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_above_i64_becomes_big() {
        assert_eq!(NumberInput::from(5u64), NumberInput::Int(5));
        assert_eq!(
            NumberInput::from(u64::MAX),
            NumberInput::Big(BigInt::from(u64::MAX))
        );
    }

    #[test]
    fn test_byte_input_forms() {
        assert_eq!(ByteInput::from([1u8, 2]), ByteInput::Buffer(vec![1, 2]));
        assert_eq!(ByteInput::from("0x0102"), ByteInput::Hex("0x0102".to_string()));
        assert_eq!(ByteInput::from(vec![1i64, 256]), ByteInput::Array(vec![1, 256]));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(-5i64).to_string(), "-5");
    }
}
