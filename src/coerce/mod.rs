//! Type coercion for loosely-typed values.
//!
//! ## Precedence
//!
//! [`to_hex`] and [`to_hex_type`] resolve a [`Value`] against an ordered list
//! of shapes; the first match wins:
//!
//! | # | Shape                                 | Type            | Hex                   |
//! |---|---------------------------------------|-----------------|-----------------------|
//! | 1 | address string                        | `address`       | lowercase `0x` digits |
//! | 2 | boolean                               | `bool`          | `0x01` / `0x00`       |
//! | 3 | native number                         | `uint256`/`int256` | `number_to_hex`    |
//! | 4 | big integer                           | `bigint`        | `number_to_hex`       |
//! | 5 | byte buffer                           | `bytes`         | `bytes_to_hex`        |
//! | 6 | string starting with `-0x` / `-0X`    | `int256`        | `number_to_hex`       |
//! | 7 | strict hex string                     | `bytes`         | unchanged             |
//! | 8 | string that is not a finite number    | `string`        | `utf8_to_hex`         |
//!
//! Address detection runs before every other string rule, and booleans are
//! matched before numbers.
//!
//! ## Example
//!
//! ```
//! use chain_convert::coerce::{to_hex, to_hex_type, HexType};
//!
//! assert_eq!(to_hex(true).unwrap(), "0x01");
//! assert_eq!(to_hex(-5).unwrap(), "-0x5");
//! assert_eq!(to_hex_type(-5).unwrap(), HexType::Int256);
//! assert_eq!(to_hex("0xAB").unwrap(), "0xAB");
//! assert_eq!(to_hex_type("0xAB").unwrap(), HexType::Bytes);
//! assert_eq!(to_hex("hello").unwrap(), "0x68656c6c6f");
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use tracing::trace;

use crate::checksum::is_address;
use crate::codec::{bytes_to_hex, number_to_hex, to_bigint, to_number, utf8_to_hex};
use crate::error::{ConversionError, Result};
use crate::types::{NumberInput, Numeric, Value};
use crate::validation::{is_finite_number_string, is_hex_strict, strip_hex_prefix};

// ============================================================================
// HexType
// ============================================================================

/// Protocol type name inferred for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexType {
    /// 20-byte account identifier
    Address,
    /// Boolean flag
    Bool,
    /// Non-negative native number
    Uint256,
    /// Negative native number or negative hex string
    Int256,
    /// Arbitrary-precision integer
    BigInt,
    /// Raw bytes or strict hex string
    Bytes,
    /// UTF-8 text
    String,
}

impl HexType {
    /// Protocol spelling of the type name
    pub fn as_str(&self) -> &'static str {
        match self {
            HexType::Address => "address",
            HexType::Bool => "bool",
            HexType::Uint256 => "uint256",
            HexType::Int256 => "int256",
            HexType::BigInt => "bigint",
            HexType::Bytes => "bytes",
            HexType::String => "string",
        }
    }
}

impl fmt::Display for HexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// The precedence rule a value matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Address,
    Bool,
    Number,
    BigInt,
    Bytes,
    NegativeHex,
    StrictHex,
    Text,
}

fn match_rule(value: &Value) -> Result<Rule> {
    let rule = match value {
        Value::Str(s) if is_address(s) => Rule::Address,
        Value::Bool(_) => Rule::Bool,
        Value::Int(_) | Value::Float(_) => Rule::Number,
        Value::Big(_) => Rule::BigInt,
        Value::Bytes(_) => Rule::Bytes,
        Value::Str(s) if s.starts_with("-0x") || s.starts_with("-0X") => Rule::NegativeHex,
        Value::Str(s) if is_hex_strict(s) => Rule::StrictHex,
        Value::Str(s) if !is_finite_number_string(s) => Rule::Text,
        Value::Str(s) => return Err(ConversionError::HexProcessing(s.clone())),
    };
    trace!(?rule, "coercion rule matched");
    Ok(rule)
}

/// Infer the protocol type name of a value.
///
/// # Errors
///
/// `HexProcessing` when no rule matches (a string that reads as a finite number).
pub fn to_hex_type(value: impl Into<Value>) -> Result<HexType> {
    let value = value.into();
    Ok(match match_rule(&value)? {
        Rule::Address => HexType::Address,
        Rule::Bool => HexType::Bool,
        Rule::Number => {
            let negative = match value {
                Value::Int(v) => v < 0,
                Value::Float(v) => v < 0.0,
                _ => false,
            };
            if negative {
                HexType::Int256
            } else {
                HexType::Uint256
            }
        }
        Rule::BigInt => HexType::BigInt,
        Rule::NegativeHex => HexType::Int256,
        Rule::Bytes | Rule::StrictHex => HexType::Bytes,
        Rule::Text => HexType::String,
    })
}

/// Convert a value into its canonical hex encoding.
///
/// # Errors
///
/// `HexProcessing` when no rule matches; codec errors (e.g.
/// `InvalidInteger` for `1.5`) propagate from the matched rule.
pub fn to_hex(value: impl Into<Value>) -> Result<String> {
    let value = value.into();
    let rule = match_rule(&value)?;
    match (rule, value) {
        (Rule::Address, Value::Str(s)) => {
            Ok(format!("0x{}", strip_hex_prefix(&s).to_ascii_lowercase()))
        }
        (Rule::Bool, Value::Bool(b)) => Ok(String::from(if b { "0x01" } else { "0x00" })),
        (Rule::Number, Value::Int(v)) => number_to_hex(v),
        (Rule::Number, Value::Float(v)) => number_to_hex(v),
        (Rule::BigInt, Value::Big(v)) => number_to_hex(v),
        (Rule::Bytes, Value::Bytes(v)) => bytes_to_hex(v),
        (Rule::NegativeHex, Value::Str(s)) => number_to_hex(s),
        (Rule::StrictHex, Value::Str(s)) => Ok(s),
        (Rule::Text, Value::Str(s)) => Ok(utf8_to_hex(&s)),
        (_, other) => Err(ConversionError::HexProcessing(other.to_string())),
    }
}

// ============================================================================
// convertToValidType
// ============================================================================

/// Target representation for [`convert_to_valid_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidType {
    /// `0x`-prefixed hex string
    HexString,
    /// Decimal string
    NumberString,
    /// Native integer when safe, big integer otherwise
    Number,
    /// Big integer
    BigInt,
}

impl FromStr for ValidType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HexString" => Ok(ValidType::HexString),
            "NumberString" => Ok(ValidType::NumberString),
            "Number" => Ok(ValidType::Number),
            "BigInt" => Ok(ValidType::BigInt),
            _ => Err(ConversionError::InvalidDesiredType(s.to_string())),
        }
    }
}

/// Result of [`convert_to_valid_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertedValue {
    /// `0x`-prefixed hex string
    HexString(String),
    /// Decimal string
    NumberString(String),
    /// Safe-split integer
    Number(Numeric),
    /// Big integer
    BigInt(BigInt),
}

/// Render a numeric value in the requested representation.
///
/// Tags arrive as text in most callers; parse them with
/// [`ValidType::from_str`], which rejects unknown tags with
/// `InvalidDesiredType`.
///
/// # Example
///
/// ```
/// use chain_convert::coerce::{convert_to_valid_type, ConvertedValue, ValidType};
///
/// let hex = convert_to_valid_type("255", ValidType::HexString).unwrap();
/// assert_eq!(hex, ConvertedValue::HexString("0xff".to_string()));
///
/// let tag: ValidType = "NumberString".parse().unwrap();
/// let dec = convert_to_valid_type("0xff", tag).unwrap();
/// assert_eq!(dec, ConvertedValue::NumberString("255".to_string()));
///
/// assert!("Float".parse::<ValidType>().is_err());
/// ```
pub fn convert_to_valid_type(
    value: impl Into<NumberInput>,
    desired: ValidType,
) -> Result<ConvertedValue> {
    let value = value.into();
    Ok(match desired {
        ValidType::HexString => ConvertedValue::HexString(number_to_hex(value)?),
        ValidType::NumberString => ConvertedValue::NumberString(to_bigint(value)?.to_string()),
        ValidType::Number => ConvertedValue::Number(to_number(value)?),
        ValidType::BigInt => ConvertedValue::BigInt(to_bigint(value)?),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_address_first() {
        assert_eq!(to_hex_type(ADDRESS).unwrap(), HexType::Address);
        assert_eq!(
            to_hex(ADDRESS).unwrap(),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
        // Without prefix the address is still detected before text
        assert_eq!(
            to_hex(&ADDRESS[2..]).unwrap(),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );
    }

    #[test]
    fn test_bad_checksum_falls_through_to_bytes() {
        let flipped = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert_eq!(to_hex_type(flipped).unwrap(), HexType::Bytes);
        assert_eq!(to_hex(flipped).unwrap(), flipped);
    }

    #[test]
    fn test_bool() {
        assert_eq!(to_hex(false).unwrap(), "0x00");
        assert_eq!(to_hex_type(true).unwrap(), HexType::Bool);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_hex(255).unwrap(), "0xff");
        assert_eq!(to_hex_type(255).unwrap(), HexType::Uint256);
        assert_eq!(to_hex(2.0).unwrap(), "0x2");
        assert!(matches!(to_hex(1.5), Err(ConversionError::InvalidInteger(_))));
        assert_eq!(to_hex_type(-1.5).unwrap(), HexType::Int256);
    }

    #[test]
    fn test_bigint() {
        let big = BigInt::from(1u8) << 100usize;
        assert_eq!(to_hex_type(big.clone()).unwrap(), HexType::BigInt);
        assert_eq!(to_hex(big).unwrap(), "0x10000000000000000000000000");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(to_hex(vec![0xcau8, 0xfe]).unwrap(), "0xcafe");
        assert_eq!(to_hex_type(vec![0xcau8]).unwrap(), HexType::Bytes);
    }

    #[test]
    fn test_negative_hex_string() {
        assert_eq!(to_hex("-0X1F").unwrap(), "-0x1f");
        assert_eq!(to_hex_type("-0x1f").unwrap(), HexType::Int256);
    }

    #[test]
    fn test_text() {
        assert_eq!(to_hex_type("hello").unwrap(), HexType::String);
        assert_eq!(to_hex("Infinity").unwrap(), "0x496e66696e697479");
        assert_eq!(to_hex_type("NaN").unwrap(), HexType::String);
    }

    #[test]
    fn test_loose_number_strings_are_rejected() {
        for text in ["", "1e3", "+5", " 12", "0b101"] {
            assert_eq!(
                to_hex(text),
                Err(ConversionError::HexProcessing(text.to_string())),
                "{:?}",
                text
            );
            assert!(matches!(to_hex_type(text), Err(ConversionError::HexProcessing(_))));
        }
    }

    #[test]
    fn test_plain_number_string_is_rejected() {
        assert_eq!(
            to_hex("123"),
            Err(ConversionError::HexProcessing("123".to_string()))
        );
        assert!(matches!(to_hex_type("-1.5"), Err(ConversionError::HexProcessing(_))));
    }

    #[test]
    fn test_convert_to_valid_type_big() {
        let value = "0x10000000000000000000000000";
        let expected = BigInt::from(1u8) << 100usize;
        assert_eq!(
            convert_to_valid_type(value, ValidType::Number).unwrap(),
            ConvertedValue::Number(Numeric::Big(expected.clone()))
        );
        assert_eq!(
            convert_to_valid_type(value, ValidType::BigInt).unwrap(),
            ConvertedValue::BigInt(expected)
        );
        assert_eq!(
            convert_to_valid_type(7, ValidType::Number).unwrap(),
            ConvertedValue::Number(Numeric::Safe(7))
        );
    }

    #[test]
    fn test_convert_to_valid_type_errors() {
        assert_eq!(
            "Float".parse::<ValidType>(),
            Err(ConversionError::InvalidDesiredType("Float".to_string()))
        );
        assert!(convert_to_valid_type("xyz", ValidType::HexString).is_err());
    }
}
