//! 20-byte account identifiers.
//!
//! An [`Address`] stores the raw bytes, so two textual renderings that differ
//! only in letter case parse to equal values. The checksummed rendering is a
//! presentation of the same bytes and never takes part in equality.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConversionError, Result};
use crate::validation::{is_address_shape, strip_hex_prefix};

/// Number of hex digits in an address
pub const ADDRESS_HEX_LEN: usize = 40;

/// Number of bytes in an address
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account identifier.
///
/// ## Example
///
/// ```
/// use chain_convert::types::Address;
///
/// let a: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
/// let b: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw bytes
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The 40 lowercase hex digits, without prefix
    pub fn to_hex_digits(&self) -> String {
        hex::encode(self.0)
    }

    /// Mixed-case checksummed rendering (`0x`-prefixed)
    ///
    /// The all-zero address has no checksum and renders as an empty string.
    pub fn to_checksum(&self) -> String {
        crate::checksum::checksum_digits(&self.to_hex_digits())
    }

    /// True for `0x0000000000000000000000000000000000000000`
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for Address {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        if !is_address_shape(s) {
            return Err(ConversionError::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(strip_hex_prefix(s), &mut bytes)
            .map_err(|_| ConversionError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex_digits())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}
