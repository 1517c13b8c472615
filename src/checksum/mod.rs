//! Mixed-case checksum encoding of addresses.
//!
//! ## Algorithm
//!
//! The 40 lowercase hex digits of the address are hashed with Keccak-256 as
//! UTF-8 text. Digit `i` of the address is uppercased when hex digit `i` of
//! the digest is greater than 7. The casing carries no information beyond
//! typo detection, so equality of addresses is always case-insensitive.
//!
//! ## Degenerate Cases
//!
//! - A digest equal to the digest of empty input yields an empty string.
//! - The all-zero address has no letters to case and yields an empty string.
//!
//! ## Example
//!
//! ```
//! use chain_convert::checksum::{to_checksum_address, is_address};
//!
//! let checksummed =
//!     to_checksum_address(Some("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359")).unwrap();
//! assert_eq!(checksummed, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
//! assert!(is_address(&checksummed));
//! ```

use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::codec::hex_to_bytes;
use crate::error::{ConversionError, Result};
use crate::validation::{is_address_shape, is_hex_strict, strip_hex_prefix};

/// Hex digest (no prefix) of Keccak-256 over empty input
pub const EMPTY_KECCAK_HEX: &str =
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

// ============================================================================
// Hashing
// ============================================================================

/// Keccak-256 of raw bytes as lowercase hex (no prefix)
fn keccak_hex(data: &[u8]) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Keccak-256 of `input`, `0x`-prefixed.
///
/// A `0x` hex input is hashed as the bytes it encodes; anything else is
/// hashed as UTF-8 text.
///
/// # Errors
///
/// `InvalidBytes` for `0x` input with an odd number of digits.
pub fn keccak256_raw(input: &str) -> Result<String> {
    let digest = if is_hex_strict(input) && !input.starts_with('-') {
        keccak_hex(&hex_to_bytes(input)?)
    } else {
        keccak_hex(input.as_bytes())
    };
    Ok(format!("0x{}", digest))
}

/// Like [`keccak256_raw`], but `None` when the digest is that of empty input.
///
/// ```
/// use chain_convert::checksum::keccak256;
///
/// assert_eq!(
///     keccak256("hello").unwrap().as_deref(),
///     Some("0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8")
/// );
/// assert_eq!(keccak256("").unwrap(), None);
/// ```
pub fn keccak256(input: &str) -> Result<Option<String>> {
    let digest = keccak256_raw(input)?;
    Ok((&digest[2..] != EMPTY_KECCAK_HEX).then_some(digest))
}

// ============================================================================
// Checksum
// ============================================================================

/// Checksum 40 lowercase hex digits (no prefix).
pub(crate) fn checksum_digits(digits: &str) -> String {
    if digits.bytes().all(|b| b == b'0') {
        debug!("zero address has no checksum");
        return String::new();
    }
    let digest = keccak_hex(digits.as_bytes());
    if digest == EMPTY_KECCAK_HEX {
        debug!(address = digits, "address digest equals empty-input digest");
        return String::new();
    }

    let mut out = String::with_capacity(2 + digits.len());
    out.push_str("0x");
    for (c, h) in digits.chars().zip(digest.chars()) {
        if h.to_digit(16).unwrap_or(0) > 7 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Render an address in checksummed mixed case.
///
/// `None` and the empty string yield an empty string.
///
/// # Errors
///
/// `InvalidAddress` when the input is not 40 hex digits with optional `0x`.
///
/// # Example
///
/// ```
/// use chain_convert::checksum::to_checksum_address;
///
/// assert_eq!(
///     to_checksum_address(Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")).unwrap(),
///     "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
/// );
/// assert_eq!(to_checksum_address(None).unwrap(), "");
/// assert!(to_checksum_address(Some("0x1234")).is_err());
/// ```
pub fn to_checksum_address(address: Option<&str>) -> Result<String> {
    let address = match address {
        None | Some("") => return Ok(String::new()),
        Some(a) => a,
    };
    if !is_address_shape(address) {
        return Err(ConversionError::InvalidAddress(address.to_string()));
    }
    Ok(checksum_digits(&strip_hex_prefix(address).to_ascii_lowercase()))
}

/// True when the letter casing of `address` matches its checksum mask.
pub fn check_address_checksum(address: &str) -> bool {
    if !is_address_shape(address) {
        return false;
    }
    let digits = strip_hex_prefix(address);
    let digest = keccak_hex(digits.to_ascii_lowercase().as_bytes());
    digits.chars().zip(digest.chars()).all(|(c, h)| {
        if h.to_digit(16).unwrap_or(0) > 7 {
            c.to_ascii_uppercase() == c
        } else {
            c.to_ascii_lowercase() == c
        }
    })
}

/// True for a well-formed address.
///
/// Uniformly cased digits are accepted as is; mixed case must carry a valid
/// checksum.
pub fn is_address(address: &str) -> bool {
    if !is_address_shape(address) {
        return false;
    }
    let digits = strip_hex_prefix(address);
    let all_lower = !digits.bytes().any(|b| b.is_ascii_uppercase());
    let all_upper = !digits.bytes().any(|b| b.is_ascii_lowercase());
    all_lower || all_upper || check_address_checksum(address)
}

// ============================================================================
// Unit Tests
// ============================================================================
