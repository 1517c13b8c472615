//! Value types for the conversion core.
//!
//! All types are immutable inputs and outputs; nothing here owns shared state.
//!
//! ## Types
//!
//! - [`Numeric`]: exact signed integer, native inside the safe range
//! - [`NumberInput`]: anything that may be read as a number
//! - [`ByteInput`]: buffer, integer array or hex string
//! - [`Value`]: input of the type-coercion dispatcher
//! - [`Address`]: 20-byte account identifier with case-insensitive equality
//!
//! ## Safe Integers
//!
//! Magnitudes up to 2^53 - 1 ([`MAX_SAFE_INTEGER`]) are carried as `i64`.
//! Example: `0x20000000000000` (2^53) is returned as a big integer.

mod address;
mod input;
mod numeric;

pub use address::{Address, ADDRESS_HEX_LEN, ADDRESS_LEN};
pub use input::{ByteInput, NumberInput, Value};
pub use numeric::{Numeric, MAX_SAFE_INTEGER};
