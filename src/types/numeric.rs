//! Signed integers of unbounded magnitude.
//!
//! ## Safe Range
//!
//! Values whose magnitude is at most [`MAX_SAFE_INTEGER`] (2^53 - 1) are
//! exactly representable by every implementation of the protocol, including
//! ones backed by 64-bit doubles. Those values are carried as a native `i64`;
//! everything else is carried as a [`BigInt`]. The split is purely a boundary
//! convenience: equality and rendering always use the exact value.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Largest integer magnitude exactly representable in a 64-bit double: 2^53 - 1
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// An exact signed integer, native when inside the safe range.
///
/// ## Example
///
/// ```
/// use chain_convert::types::Numeric;
/// use num_bigint::BigInt;
///
/// let small = Numeric::from_bigint(BigInt::from(255));
/// assert_eq!(small, Numeric::Safe(255));
///
/// let big = Numeric::from_bigint(BigInt::from(1u64 << 60));
/// assert!(!big.is_safe());
/// ```
#[derive(Debug, Clone)]
pub enum Numeric {
    /// Magnitude <= 2^53 - 1
    Safe(i64),
    /// Magnitude > 2^53 - 1
    Big(BigInt),
}

impl Numeric {
    /// Build from an arbitrary-precision value, choosing the native form when safe.
    pub fn from_bigint(value: BigInt) -> Self {
        match value.to_i64() {
            Some(v) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&v) => Numeric::Safe(v),
            _ => Numeric::Big(value),
        }
    }

    /// The exact value as a `BigInt`
    pub fn to_bigint(&self) -> BigInt {
        match self {
            Numeric::Safe(v) => BigInt::from(*v),
            Numeric::Big(v) => v.clone(),
        }
    }

    /// True when carried as a native integer
    pub fn is_safe(&self) -> bool {
        matches!(self, Numeric::Safe(_))
    }

    /// True for values below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Numeric::Safe(v) => *v < 0,
            Numeric::Big(v) => v.is_negative(),
        }
    }

    /// The native value, if inside the safe range
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Numeric::Safe(v) => Some(*v),
            Numeric::Big(_) => None,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Safe(a), Numeric::Safe(b)) => a == b,
            _ => self.to_bigint() == other.to_bigint(),
        }
    }
}

impl Eq for Numeric {}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
            Numeric::Safe(value)
        } else {
            Numeric::Big(BigInt::from(value))
        }
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Numeric::from_bigint(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Safe(v) => write!(f, "{}", v),
            Numeric::Big(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_boundary() {
        assert!(Numeric::from_bigint(BigInt::from(MAX_SAFE_INTEGER)).is_safe());
        assert!(Numeric::from_bigint(BigInt::from(-MAX_SAFE_INTEGER)).is_safe());
        assert!(!Numeric::from_bigint(BigInt::from(MAX_SAFE_INTEGER) + 1).is_safe());
        assert!(!Numeric::from_bigint(BigInt::from(-MAX_SAFE_INTEGER) - 1).is_safe());
    }

    #[test]
    fn test_from_i64_outside_safe_range() {
        let n = Numeric::from(i64::MAX);
        assert!(!n.is_safe());
        assert_eq!(n.to_string(), "9223372036854775807");
    }

    #[test]
    fn test_equality_across_forms() {
        assert_eq!(Numeric::Big(BigInt::from(5)), Numeric::Safe(5));
        assert_ne!(Numeric::Safe(5), Numeric::Safe(-5));
    }

    #[test]
    fn test_negative() {
        assert!(Numeric::Safe(-1).is_negative());
        assert!(Numeric::from_bigint(-(BigInt::from(1u64) << 70usize)).is_negative());
        assert!(!Numeric::Safe(0).is_negative());
    }
}
