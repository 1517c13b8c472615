//! The fixed denomination table.
//!
//! ## Scale Factors
//!
//! Every denomination is a power of ten of the base unit (wei), from 10^0 up
//! to 10^30. Several names are synonyms for the same factor, and two
//! spellings that differ only in the case of their first letter (`kwei` /
//! `Kwei`, `mwei` / `Mwei`, `gwei` / `Gwei`) are distinct keys with the same
//! factor. Lookup is by exact, case-sensitive name.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::{ConversionError, Result};

/// A named (or custom) power-of-ten scale of the base unit.
///
/// ## Example
///
/// ```
/// use chain_convert::units::Denomination;
///
/// let gwei = Denomination::from_name("Gwei").unwrap();
/// assert_eq!(gwei.exponent(), 9);
/// assert_eq!(gwei.scale_factor().to_string(), "1000000000");
///
/// assert!(Denomination::from_name("GWEI").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    name: Option<&'static str>,
    exponent: u32,
}

const fn named(name: &'static str, exponent: u32) -> Denomination {
    Denomination {
        name: Some(name),
        exponent,
    }
}

/// The 27 recognized denominations, in ascending scale order.
pub static DENOMINATIONS: [Denomination; 27] = [
    named("noether", 0),
    named("wei", 0),
    named("kwei", 3),
    named("Kwei", 3),
    named("babbage", 3),
    named("femtoether", 3),
    named("mwei", 6),
    named("Mwei", 6),
    named("lovelace", 6),
    named("picoether", 6),
    named("gwei", 9),
    named("Gwei", 9),
    named("shannon", 9),
    named("nanoether", 9),
    named("nano", 9),
    named("szabo", 12),
    named("microether", 12),
    named("micro", 12),
    named("finney", 15),
    named("milliether", 15),
    named("milli", 15),
    named("ether", 18),
    named("kether", 21),
    named("grand", 21),
    named("mether", 24),
    named("gether", 27),
    named("tether", 30),
];

impl Denomination {
    /// Look up a denomination by its exact name.
    ///
    /// # Errors
    ///
    /// `InvalidUnit` for names outside the table.
    pub fn from_name(name: &str) -> Result<Self> {
        DENOMINATIONS
            .iter()
            .find(|d| d.name == Some(name))
            .copied()
            .ok_or_else(|| ConversionError::InvalidUnit(name.to_string()))
    }

    /// An unnamed scale of 10^`decimals`, for tokens with their own decimals.
    pub fn with_decimals(decimals: u32) -> Self {
        Self {
            name: None,
            exponent: decimals,
        }
    }

    /// Table name, `None` for custom scales
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Power of ten of the scale factor; also the number of zeros in it
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The scale factor, 10^exponent
    pub fn scale_factor(&self) -> BigInt {
        num_traits::pow(BigInt::from(10u8), self.exponent as usize)
    }

    /// All table names, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        DENOMINATIONS.iter().filter_map(|d| d.name)
    }
}

impl FromStr for Denomination {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "10^{}", self.exponent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_and_range() {
        assert_eq!(DENOMINATIONS.len(), 27);
        assert_eq!(Denomination::names().count(), 27);
        assert!(DENOMINATIONS.iter().all(|d| d.exponent() <= 30));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Denomination::names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 27);
    }

    #[test]
    fn test_synonyms_share_factor() {
        let ether = Denomination::from_name("ether").unwrap();
        assert_eq!(ether.scale_factor().to_string(), "1000000000000000000");

        for group in [
            &["kwei", "Kwei", "babbage", "femtoether"][..],
            &["mwei", "Mwei", "lovelace", "picoether"][..],
            &["gwei", "Gwei", "shannon", "nanoether", "nano"][..],
            &["szabo", "microether", "micro"][..],
            &["finney", "milliether", "milli"][..],
            &["kether", "grand"][..],
        ] {
            let first = Denomination::from_name(group[0]).unwrap().exponent();
            for name in group {
                assert_eq!(Denomination::from_name(name).unwrap().exponent(), first);
            }
        }
    }

    #[test]
    fn test_exact_factors() {
        let expected = [
            ("noether", 0),
            ("wei", 0),
            ("kwei", 3),
            ("mwei", 6),
            ("gwei", 9),
            ("szabo", 12),
            ("finney", 15),
            ("ether", 18),
            ("kether", 21),
            ("mether", 24),
            ("gether", 27),
            ("tether", 30),
        ];
        for (name, exponent) in expected {
            assert_eq!(Denomination::from_name(name).unwrap().exponent(), exponent, "{}", name);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(Denomination::from_name("Ether").is_err());
        assert_eq!(
            "parsec".parse::<Denomination>(),
            Err(ConversionError::InvalidUnit("parsec".to_string()))
        );
    }

    #[test]
    fn test_custom_decimals() {
        let usdc = Denomination::with_decimals(6);
        assert_eq!(usdc.name(), None);
        assert_eq!(usdc.to_string(), "10^6");
        assert_eq!(usdc.scale_factor(), BigInt::from(1_000_000));
    }
}
