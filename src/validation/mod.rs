//! Input validation for the conversion core.
//!
//! ## Overview
//!
//! Pure predicates (`is_*`) answer shape questions about text. Guards
//! (`validate_*`) run the predicates and fail with a [`ConversionError`] that
//! names the offending value. Every public conversion runs the matching guard
//! before touching any arithmetic.
//!
//! ## Example
//!
//! ```
//! use chain_convert::validation::{is_hex_strict, validate_number};
//! use chain_convert::types::NumberInput;
//!
//! assert!(is_hex_strict("-0xff"));
//! assert!(!is_hex_strict("ff"));
//! assert!(validate_number(&NumberInput::from("1.5"), false).is_ok());
//! assert!(validate_number(&NumberInput::from("1.5"), true).is_err());
//! ```

use crate::error::{ConversionError, Result};
use crate::types::{ByteInput, NumberInput, ADDRESS_HEX_LEN};

// ============================================================================
// Predicates
// ============================================================================

/// Strip a leading `0x` / `0X`, if present
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

fn is_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `0x` (or `-0x`) followed by one or more hex digits, any case
pub fn is_hex_strict(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.get(..2) {
        Some("0x") | Some("0X") => is_hex_digits(&unsigned[2..]),
        _ => false,
    }
}

/// Hex digits with an optional `0x`, `-0x` or `-` prefix
pub fn is_hex(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    is_hex_digits(strip_hex_prefix(unsigned))
}

/// Exactly 40 hex digits with an optional `0x` prefix
pub fn is_address_shape(s: &str) -> bool {
    let digits = strip_hex_prefix(s);
    digits.len() == ADDRESS_HEX_LEN && is_hex_digits(digits)
}

/// Optional `-` followed by one or more decimal digits
pub fn is_integer_string(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Plain decimal number: optional `-`, digits, at most one `.`
///
/// At least one digit is required; `"1."` and `".5"` are accepted.
pub fn is_numeric_string(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(integer.is_empty() && fraction.is_empty()) && all_digits(integer) && all_digits(fraction)
}

/// Unsigned `0x`/`0o`/`0b` literal, any case
fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let radix = match s.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Text that a loose numeric parse reads as a finite number.
///
/// Surrounding whitespace is ignored and blank text reads as zero. Accepts an
/// optional sign, a decimal mantissa, an optional exponent, or an unsigned
/// radix literal. `Infinity`, `NaN` and exponents that overflow are rejected.
pub fn is_finite_number_string(s: &str) -> bool {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return true;
    }
    if let Some((radix, digits)) = radix_literal(s) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };
    if mantissa.starts_with('-') || !is_numeric_string(mantissa) {
        return false;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    s.parse::<f64>().map_or(false, f64::is_finite)
}

// ============================================================================
// Guards
// ============================================================================

/// Byte input must be a buffer, an array of 0..=255, or an even-length hex string
pub fn validate_bytes(input: &ByteInput) -> Result<()> {
    let valid = match input {
        ByteInput::Buffer(_) => true,
        ByteInput::Array(values) => values.iter().all(|v| (0..=255).contains(v)),
        ByteInput::Hex(s) => {
            let digits = strip_hex_prefix(s);
            // "0x" alone is the empty sequence
            digits.len() < s.len()
                && digits.len() % 2 == 0
                && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
    };
    if valid {
        Ok(())
    } else {
        Err(ConversionError::InvalidBytes(input.to_string()))
    }
}

/// Hex input must be `0x`/`-0x` followed by hex digits
pub fn validate_hex(s: &str) -> Result<()> {
    if is_hex_strict(s) {
        Ok(())
    } else {
        Err(ConversionError::InvalidHexString(s.to_string()))
    }
}

/// Numeric input must be a number; with `integer_only`, an integer.
///
/// Failures are `InvalidInteger` when `integer_only` is set and
/// `InvalidNumber` otherwise.
pub fn validate_number(input: &NumberInput, integer_only: bool) -> Result<()> {
    let valid = match input {
        NumberInput::Int(_) | NumberInput::Big(_) => true,
        NumberInput::Float(v) => v.is_finite() && (!integer_only || v.fract() == 0.0),
        NumberInput::Str(s) => {
            is_hex_strict(s)
                || is_integer_string(s)
                || (!integer_only && is_numeric_string(s))
        }
    };
    match (valid, integer_only) {
        (true, _) => Ok(()),
        (false, true) => Err(ConversionError::InvalidInteger(input.to_string())),
        (false, false) => Err(ConversionError::InvalidNumber(input.to_string())),
    }
}

/// Plain string must stay within the single-byte code page (U+0000..=U+00FF)
pub fn validate_code_page(s: &str) -> Result<()> {
    if s.chars().all(|c| u32::from(c) <= 0xFF) {
        Ok(())
    } else {
        Err(ConversionError::InvalidString {
            value: s.to_string(),
            reason: "contains characters outside the single-byte code page",
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
