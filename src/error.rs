//! Conversion error types.
//!
//! Every failure is a caller-supplied bad input. Each variant carries the
//! offending value rendered as text so callers can report it verbatim.

use thiserror::Error;

/// Errors produced by the conversion core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input is not a byte buffer, a byte array or a valid hex string
    #[error("invalid value given \"{0}\": not a valid byte array")]
    InvalidBytes(String),

    /// Input is not 40 hex digits (with optional `0x` prefix)
    #[error("invalid value given \"{0}\": not a valid address")]
    InvalidAddress(String),

    /// Input cannot be interpreted as an integer
    #[error("invalid value given \"{0}\": not integer")]
    InvalidInteger(String),

    /// Denomination name outside the fixed table
    #[error("invalid value given \"{0}\": not a valid unit")]
    InvalidUnit(String),

    /// `to_hex` exhausted its precedence list
    #[error("invalid value given \"{0}\": cannot be converted to hex")]
    HexProcessing(String),

    /// Input is not a `0x`-prefixed hex string
    #[error("invalid value given \"{0}\": not a hex string")]
    InvalidHexString(String),

    /// Input is not a number
    #[error("invalid value given \"{0}\": not a number")]
    InvalidNumber(String),

    /// Plain string rejected by a codec
    #[error("invalid value given \"{value}\": {reason}")]
    InvalidString {
        /// The rejected string (or hex input it was decoded from)
        value: String,
        /// The violated constraint
        reason: &'static str,
    },

    /// Unknown target type tag for `convert_to_valid_type`
    #[error("invalid value given \"{0}\": not a valid desired type")]
    InvalidDesiredType(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_value() {
        let err = ConversionError::InvalidUnit("parsec".to_string());
        assert_eq!(err.to_string(), "invalid value given \"parsec\": not a valid unit");

        let err = ConversionError::InvalidString {
            value: "0xff".to_string(),
            reason: "not valid utf-8",
        };
        assert_eq!(err.to_string(), "invalid value given \"0xff\": not valid utf-8");
    }
}
