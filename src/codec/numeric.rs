//! Hex strings and arbitrary-precision integers.
//!
//! ## Sign Convention
//!
//! Negative values render with the sign outside the prefix: `-0x1f`.
//! Every path goes through [`BigInt`]; no value is ever routed through a
//! floating-point intermediate.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed};

use crate::error::{ConversionError, Result};
use crate::types::{NumberInput, Numeric};
use crate::validation::{is_hex_strict, is_integer_string, validate_hex, validate_number};

// ============================================================================
// Hex -> Number
// ============================================================================

/// Parse a strict hex string (optionally negative) into a `BigInt`.
fn parse_hex(hex: &str) -> Result<BigInt> {
    validate_hex(hex)?;
    let (negative, unsigned) = match hex.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, hex),
    };
    let magnitude = BigInt::parse_bytes(unsigned[2..].as_bytes(), 16)
        .ok_or_else(|| ConversionError::InvalidHexString(hex.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Convert a hex string into an exact integer.
///
/// Magnitudes up to 2^53 - 1 come back as [`Numeric::Safe`], larger ones as
/// [`Numeric::Big`].
///
/// # Example
///
/// ```
/// use chain_convert::codec::hex_to_number;
/// use chain_convert::types::Numeric;
///
/// assert_eq!(hex_to_number("0xff").unwrap(), Numeric::Safe(255));
/// assert_eq!(hex_to_number("-0x5").unwrap(), Numeric::Safe(-5));
/// assert!(!hex_to_number("0x20000000000000").unwrap().is_safe());
/// ```
pub fn hex_to_number(hex: &str) -> Result<Numeric> {
    parse_hex(hex).map(Numeric::from_bigint)
}

/// Convert a hex string into its decimal rendering.
///
/// ```
/// use chain_convert::codec::hex_to_number_string;
///
/// assert_eq!(hex_to_number_string("0xea").unwrap(), "234");
/// ```
pub fn hex_to_number_string(hex: &str) -> Result<String> {
    parse_hex(hex).map(|v| v.to_string())
}

// ============================================================================
// Loose input -> Number
// ============================================================================

/// Interpret a loosely-typed number as an exact integer.
///
/// Hex strings go through [`hex_to_number`]; decimal integer strings are
/// parsed directly; floats must be finite and integral.
///
/// # Errors
///
/// `InvalidNumber` for anything else (fractional values included).
pub fn to_bigint(input: impl Into<NumberInput>) -> Result<BigInt> {
    match input.into() {
        NumberInput::Int(v) => Ok(BigInt::from(v)),
        NumberInput::Big(v) => Ok(v),
        NumberInput::Float(v) if v.is_finite() && v.fract() == 0.0 => BigInt::from_f64(v)
            .ok_or_else(|| ConversionError::InvalidNumber(v.to_string())),
        NumberInput::Float(v) => Err(ConversionError::InvalidNumber(v.to_string())),
        NumberInput::Str(s) if is_hex_strict(&s) => parse_hex(&s),
        NumberInput::Str(s) if is_integer_string(&s) => {
            BigInt::from_str(&s).map_err(|_| ConversionError::InvalidNumber(s))
        }
        NumberInput::Str(s) => Err(ConversionError::InvalidNumber(s)),
    }
}

/// Same as [`to_bigint`], split at the safe-integer ceiling.
///
/// ```
/// use chain_convert::codec::to_number;
/// use chain_convert::types::Numeric;
///
/// assert_eq!(to_number("0x10").unwrap(), Numeric::Safe(16));
/// assert_eq!(to_number("-12").unwrap(), Numeric::Safe(-12));
/// assert_eq!(to_number(3.0).unwrap(), Numeric::Safe(3));
/// assert!(to_number(3.5).is_err());
/// ```
pub fn to_number(input: impl Into<NumberInput>) -> Result<Numeric> {
    to_bigint(input).map(Numeric::from_bigint)
}

// ============================================================================
// Number -> Hex
// ============================================================================

/// Render an integer as `0x<digits>` / `-0x<digits>`, lowercase.
pub(crate) fn bigint_to_hex(value: &BigInt) -> String {
    let digits = value.magnitude().to_str_radix(16);
    if value.is_negative() {
        format!("-0x{}", digits)
    } else {
        format!("0x{}", digits)
    }
}

/// Convert an integer-valued input into a hex string.
///
/// # Errors
///
/// `InvalidInteger` when the input is not an integer-valued number, a
/// `BigInt`, or an integer/hex string.
///
/// # Example
///
/// ```
/// use chain_convert::codec::number_to_hex;
/// use num_bigint::BigInt;
///
/// assert_eq!(number_to_hex(234).unwrap(), "0xea");
/// assert_eq!(number_to_hex(-255).unwrap(), "-0xff");
/// assert_eq!(number_to_hex("1000").unwrap(), "0x3e8");
/// assert_eq!(number_to_hex("0xFF").unwrap(), "0xff");
/// assert_eq!(
///     number_to_hex(BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap()).unwrap(),
///     "0x18ee90ff6c373e0ee4e3f0ad2"
/// );
/// assert!(number_to_hex("not-a-number").is_err());
/// ```
pub fn number_to_hex(input: impl Into<NumberInput>) -> Result<String> {
    let input = input.into();
    validate_number(&input, true)?;
    let shown = input.to_string();
    let value = to_bigint(input).map_err(|_| ConversionError::InvalidInteger(shown))?;
    Ok(bigint_to_hex(&value))
}

// ============================================================================
// Padding
// ============================================================================

fn pad_text(text: &str, width: usize, fill: char, at_start: bool) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let padding: String = std::iter::repeat(fill).take(missing).collect();
    if at_start {
        format!("{}{}", padding, text)
    } else {
        format!("{}{}", text, padding)
    }
}

/// A padding subject: plain text, or hex split into prefix and digits.
enum PadSubject {
    Text(String),
    Hex(&'static str, String),
}

fn pad_subject(input: NumberInput) -> Result<PadSubject> {
    let hex = match input {
        NumberInput::Str(s) if !is_hex_strict(&s) => return Ok(PadSubject::Text(s)),
        NumberInput::Str(s) => s,
        other => number_to_hex(other)?,
    };
    Ok(match hex.strip_prefix('-') {
        Some(rest) => PadSubject::Hex("-0x", rest[2..].to_string()),
        None => PadSubject::Hex("0x", hex[2..].to_string()),
    })
}

/// Left-pad a value to `width` characters with `fill`.
///
/// Numbers and hex strings are padded inside the prefix; any other string is
/// padded as plain text.
///
/// # Example
///
/// ```
/// use chain_convert::codec::pad_left;
///
/// assert_eq!(pad_left("0x3456ff", 20, '0').unwrap(), "0x000000000000003456ff");
/// assert_eq!(pad_left(0x3456ff, 20, '0').unwrap(), "0x000000000000003456ff");
/// assert_eq!(pad_left("Hello", 20, 'x').unwrap(), "xxxxxxxxxxxxxxxHello");
/// ```
pub fn pad_left(value: impl Into<NumberInput>, width: usize, fill: char) -> Result<String> {
    Ok(match pad_subject(value.into())? {
        PadSubject::Text(text) => pad_text(&text, width, fill, true),
        PadSubject::Hex(prefix, digits) => {
            format!("{}{}", prefix, pad_text(&digits, width, fill, true))
        }
    })
}

/// Right-pad a value to `width` characters (not counting the prefix) with `fill`.
///
/// ```
/// use chain_convert::codec::pad_right;
///
/// assert_eq!(pad_right("0x3456ff", 20, '0').unwrap(), "0x3456ff00000000000000");
/// assert_eq!(pad_right("Hello", 20, 'x').unwrap(), "Helloxxxxxxxxxxxxxxx");
/// ```
pub fn pad_right(value: impl Into<NumberInput>, width: usize, fill: char) -> Result<String> {
    Ok(match pad_subject(value.into())? {
        PadSubject::Text(text) => pad_text(&text, width, fill, false),
        PadSubject::Hex(prefix, digits) => {
            format!("{}{}", prefix, pad_text(&digits, width, fill, false))
        }
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
