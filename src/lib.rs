//! # chain-convert
//!
//! Precision-preserving value conversion for blockchain clients.
//!
//! ## Architecture
//!
//! The conversion core consists of:
//! - **Validation**: shape predicates and guards run before any arithmetic
//! - **Codec**: bytes, text and integers to and from `0x` hex
//! - **Units**: base-unit amounts to and from the 27 named denominations
//! - **Checksum**: Keccak-256 mixed-case address encoding
//! - **Coerce**: precedence-ordered inference of a canonical hex encoding
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: integers of any size go through `BigInt`; unit
//!    conversions work on decimal digit strings
//! 2. **Exact Round-Trips**: hex <-> integer and bytes <-> hex never lose data
//! 3. **Protocol Text**: lowercase `0x` output, `-0x` for negatives, mixed
//!    case only for checksummed addresses
//! 4. **Pure Functions**: no I/O, no shared state, safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use chain_convert::{from_wei, to_wei, to_checksum_address, to_hex};
//!
//! assert_eq!(to_wei("1.5", "ether").unwrap(), "1500000000000000000");
//! assert_eq!(from_wei(1, "ether").unwrap(), "0.000000000000000001");
//! assert_eq!(to_hex(true).unwrap(), "0x01");
//! assert_eq!(
//!     to_checksum_address(Some("0xd1220a0cf47c7b9be7a2e6ba89f429762e7b9adb")).unwrap(),
//!     "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy shared by every component
pub mod error;

/// Value types: Numeric, inputs, Address
pub mod types;

/// Shape predicates and input guards
pub mod validation;

/// Byte/hex and numeric codecs
pub mod codec;

/// Denomination table and unit conversion
pub mod units;

/// Checksum addresses and Keccak-256 helpers
pub mod checksum;

/// Type-coercion dispatcher
pub mod coerce;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{ConversionError, Result};
pub use types::{Address, ByteInput, NumberInput, Numeric, Value, MAX_SAFE_INTEGER};
pub use codec::{
    ascii_to_hex, bytes_to_hex, hex_to_ascii, hex_to_bytes, hex_to_number, hex_to_number_string,
    hex_to_utf8, number_to_hex, pad_left, pad_right, to_bigint, to_number, utf8_to_hex,
};
pub use units::{from_wei, to_wei, Denomination};
pub use checksum::{check_address_checksum, is_address, keccak256, to_checksum_address};
pub use coerce::{convert_to_valid_type, to_hex, to_hex_type, ConvertedValue, HexType, ValidType};
