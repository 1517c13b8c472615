//! Byte sequences, text and their hex renderings.
//!
//! Output hex is always lowercase and `0x`-prefixed. Input hex is accepted in
//! any case, with the prefix optional where noted.

use tracing::trace;

use crate::error::{ConversionError, Result};
use crate::types::ByteInput;
use crate::validation::{strip_hex_prefix, validate_bytes, validate_code_page};

/// Normalize any accepted byte form into a buffer.
fn to_buffer(input: ByteInput) -> Result<Vec<u8>> {
    validate_bytes(&input)?;
    match input {
        ByteInput::Buffer(bytes) => Ok(bytes),
        // validated to 0..=255 above
        ByteInput::Array(values) => Ok(values.into_iter().map(|v| v as u8).collect()),
        ByteInput::Hex(s) => {
            hex::decode(strip_hex_prefix(&s)).map_err(|_| ConversionError::InvalidBytes(s))
        }
    }
}

/// Render bytes as a lowercase `0x`-prefixed hex string.
///
/// # Errors
///
/// `InvalidBytes` when the input is an array with values outside 0..=255 or a
/// string that is not even-length strict hex.
///
/// # Example
///
/// ```
/// use chain_convert::codec::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(vec![0xde_u8, 0xad]).unwrap(), "0xdead");
/// assert_eq!(bytes_to_hex("0xDEAD").unwrap(), "0xdead");
/// assert_eq!(bytes_to_hex(vec![1i64, 2, 255]).unwrap(), "0x0102ff");
/// ```
pub fn bytes_to_hex(input: impl Into<ByteInput>) -> Result<String> {
    let bytes = to_buffer(input.into())?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Decode a hex string into bytes.
///
/// The `0x` prefix is optional. Buffers pass through unchanged; integer
/// arrays are validated and narrowed.
///
/// # Example
///
/// ```
/// use chain_convert::codec::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("0x0aff").unwrap(), vec![0x0a, 0xff]);
/// assert_eq!(hex_to_bytes("0AFF").unwrap(), vec![0x0a, 0xff]);
/// assert!(hex_to_bytes("0xabc").is_err());
/// ```
pub fn hex_to_bytes(input: impl Into<ByteInput>) -> Result<Vec<u8>> {
    match input.into() {
        ByteInput::Hex(s) if !s.starts_with("0x") && !s.starts_with("0X") => {
            // report the caller's text, not the prefixed copy
            to_buffer(ByteInput::Hex(format!("0x{}", s)))
                .map_err(|_| ConversionError::InvalidBytes(s))
        }
        other => to_buffer(other),
    }
}

/// Encode text as UTF-8 hex.
///
/// A single leading and a single trailing NUL character are dropped before
/// encoding; NULs elsewhere are kept.
///
/// # Example
///
/// ```
/// use chain_convert::codec::utf8_to_hex;
///
/// assert_eq!(utf8_to_hex("I have 100€"), "0x49206861766520313030e282ac");
/// assert_eq!(utf8_to_hex("\u{0}ab\u{0}"), "0x6162");
/// assert_eq!(utf8_to_hex("a\u{0}b"), "0x610062");
/// ```
pub fn utf8_to_hex(text: &str) -> String {
    let text = text.strip_prefix('\0').unwrap_or(text);
    let text = text.strip_suffix('\0').unwrap_or(text);
    format!("0x{}", hex::encode(text.as_bytes()))
}

/// Decode UTF-8 hex into text.
///
/// # Errors
///
/// `InvalidBytes` for malformed hex, `InvalidString` when the bytes are not
/// valid UTF-8.
pub fn hex_to_utf8(input: impl Into<ByteInput>) -> Result<String> {
    let input = input.into();
    let shown = input.to_string();
    let bytes = hex_to_bytes(input)?;
    String::from_utf8(bytes).map_err(|_| {
        trace!(input = %shown, "hex does not decode to utf-8");
        ConversionError::InvalidString {
            value: shown,
            reason: "not valid utf-8",
        }
    })
}

/// Encode single-byte text as hex, one byte per character.
///
/// # Errors
///
/// `InvalidString` for characters above U+00FF.
///
/// # Example
///
/// ```
/// use chain_convert::codec::ascii_to_hex;
///
/// assert_eq!(ascii_to_hex("myString").unwrap(), "0x6d79537472696e67");
/// assert_eq!(ascii_to_hex("\u{0}a").unwrap(), "0x0061");
/// ```
pub fn ascii_to_hex(text: &str) -> Result<String> {
    validate_code_page(text)?;
    let bytes: Vec<u8> = text.chars().map(|c| u32::from(c) as u8).collect();
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Decode hex into single-byte text, mapping each byte to the code point of
/// the same value.
pub fn hex_to_ascii(input: impl Into<ByteInput>) -> Result<String> {
    let bytes = hex_to_bytes(input)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

// ============================================================================
// Unit Tests
// ============================================================================
