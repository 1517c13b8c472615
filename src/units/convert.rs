//! Base-unit amounts to and from denominated decimal strings.
//!
//! ## No Floating Point
//!
//! Both directions work on decimal digit strings and [`BigInt`]s only. A
//! denomination of 10^z moves the decimal point by z places; nothing is ever
//! multiplied or divided in binary floating point.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;
use tracing::warn;

use crate::codec::to_bigint;
use crate::error::{ConversionError, Result};
use crate::types::NumberInput;
use crate::units::Denomination;
use crate::validation::{is_hex_strict, validate_number};

// ============================================================================
// fromWei
// ============================================================================

/// Convert a base-unit amount into the named denomination.
///
/// # Errors
///
/// `InvalidUnit` for unknown names, `InvalidNumber` when the amount is not
/// an integer.
///
/// # Example
///
/// ```
/// use chain_convert::units::from_wei;
///
/// assert_eq!(from_wei(1, "ether").unwrap(), "0.000000000000000001");
/// assert_eq!(from_wei("1000000000000000000", "ether").unwrap(), "1");
/// assert_eq!(from_wei(1_500_000_000u64, "gwei").unwrap(), "1.5");
/// assert_eq!(from_wei(42, "wei").unwrap(), "42");
/// ```
pub fn from_wei(amount: impl Into<NumberInput>, unit: &str) -> Result<String> {
    let denomination = Denomination::from_name(unit)?;
    from_wei_with(amount, denomination)
}

/// [`from_wei`] with an explicit (possibly custom) denomination.
pub fn from_wei_with(amount: impl Into<NumberInput>, denomination: Denomination) -> Result<String> {
    let value = to_bigint(amount)?;
    let zeros = denomination.exponent() as usize;
    if zeros == 0 {
        return Ok(value.to_string());
    }

    let digits = value.magnitude().to_string();
    let padded = format!("{:0>width$}", digits, width = zeros);
    let (integer, fraction) = padded.split_at(padded.len() - zeros);
    let fraction = fraction.trim_end_matches('0');

    let unsigned = match (integer.is_empty(), fraction.is_empty()) {
        (true, true) => "0".to_string(),
        (false, true) => integer.to_string(),
        (true, false) => format!("0.{}", fraction),
        (false, false) => format!("{}.{}", integer, fraction),
    };
    Ok(if value.is_negative() {
        format!("-{}", unsigned)
    } else {
        unsigned
    })
}

// ============================================================================
// toWei
// ============================================================================

/// Convert an amount in the named denomination into base units.
///
/// Fractional digits finer than the denomination allows are truncated.
///
/// # Errors
///
/// `InvalidUnit` for unknown names, `InvalidNumber` when the amount is not a
/// number.
///
/// # Example
///
/// ```
/// use chain_convert::units::to_wei;
///
/// assert_eq!(to_wei("1.5", "ether").unwrap(), "1500000000000000000");
/// assert_eq!(to_wei(1, "gwei").unwrap(), "1000000000");
/// assert_eq!(to_wei("0.000000001", "ether").unwrap(), "1000000000");
/// assert!(to_wei(1, "parsec").is_err());
/// ```
pub fn to_wei(amount: impl Into<NumberInput>, unit: &str) -> Result<String> {
    let denomination = Denomination::from_name(unit)?;
    to_wei_with(amount, denomination)
}

/// [`to_wei`] with an explicit (possibly custom) denomination.
pub fn to_wei_with(amount: impl Into<NumberInput>, denomination: Denomination) -> Result<String> {
    let input = amount.into();
    validate_number(&input, false)?;
    let text = match input {
        NumberInput::Str(s) if !is_hex_strict(&s) => s,
        NumberInput::Float(v) => v.to_string(),
        other => to_bigint(other)?.to_string(),
    };

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (integer, mut fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let zeros = denomination.exponent() as usize;
    if fraction.len() > zeros {
        warn!(
            amount = %text,
            denomination = %denomination,
            "amount has more decimals than the denomination allows; truncating"
        );
        fraction = &fraction[..zeros];
    }

    let digits = format!("{}{}", integer, fraction);
    let digits = if digits.is_empty() { "0" } else { digits.as_str() };
    let parsed =
        BigInt::from_str(digits).map_err(|_| ConversionError::InvalidNumber(text.clone()))?;
    let scaled = parsed * num_traits::pow(BigInt::from(10u8), zeros - fraction.len());

    let signed = if negative { -scaled } else { scaled };
    Ok(signed.to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
