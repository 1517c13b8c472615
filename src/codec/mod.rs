//! Byte/hex and numeric codecs.
//!
//! ## Components
//!
//! - [`bytes`]: byte buffers, UTF-8 text and single-byte text to and from hex
//! - [`numeric`]: hex strings to and from exact integers, plus padding helpers
//!
//! ## Example
//!
//! ```
//! use chain_convert::codec::{bytes_to_hex, hex_to_bytes, number_to_hex, hex_to_number};
//!
//! let hex = bytes_to_hex(vec![1u8, 2, 3]).unwrap();
//! assert_eq!(hex_to_bytes(hex).unwrap(), vec![1, 2, 3]);
//!
//! let hex = number_to_hex(-42).unwrap();
//! assert_eq!(hex, "-0x2a");
//! assert_eq!(hex_to_number(&hex).unwrap().to_string(), "-42");
//! ```

pub mod bytes;
pub mod numeric;

pub use bytes::{ascii_to_hex, bytes_to_hex, hex_to_ascii, hex_to_bytes, hex_to_utf8, utf8_to_hex};
pub use numeric::{
    hex_to_number, hex_to_number_string, number_to_hex, pad_left, pad_right, to_bigint, to_number,
};
