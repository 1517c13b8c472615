//! Denominated currency amounts.
//!
//! ## Components
//!
//! - [`Denomination`]: the fixed 27-entry table of named power-of-ten scales
//! - [`from_wei`] / [`to_wei`]: exact conversions between base units and a
//!   denomination, using decimal strings and big integers only
//!
//! ## Example
//!
//! ```
//! use chain_convert::units::{from_wei, to_wei};
//!
//! let wei = to_wei("0.05", "ether").unwrap();
//! assert_eq!(wei, "50000000000000000");
//! assert_eq!(from_wei(wei, "finney").unwrap(), "50");
//! ```

pub mod convert;
pub mod denomination;

pub use convert::{from_wei, from_wei_with, to_wei, to_wei_with};
pub use denomination::{Denomination, DENOMINATIONS};
