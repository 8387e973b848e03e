//! Wei Value Object
//!
//! An amount of the base currency in its smallest indivisible unit.
//! Construction converts a human-readable decimal string plus a unit name
//! into the integer wei count using 18-decimal fixed point ("ether" unit).
//! Conversion errors are returned to the caller untouched.

use std::fmt;

use ethers_core::types::U256;
use ethers_core::utils::{parse_units, ConversionError};

/// Integer amount in wei, the smallest unit of the base currency.
///
/// Immutable once constructed. The conversion from decimal strings is the
/// ecosystem fixed-point parse, so `"0.01"` ether becomes exactly
/// `10_000_000_000_000_000` wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wei(U256);

impl Wei {
    /// Decimal places of the "ether" unit
    pub const ETHER_DECIMALS: u32 = 18;

    /// Convert a decimal string and unit name ("ether", "gwei", "wei", ...)
    /// into a wei amount.
    pub fn from_decimal(amount: &str, unit: &str) -> Result<Self, ConversionError> {
        Ok(Self(parse_units(amount, unit)?.into()))
    }

    /// Convert a decimal ether string into a wei amount (18 decimal places).
    pub fn from_ether(amount: &str) -> Result<Self, ConversionError> {
        Self::from_decimal(amount, "ether")
    }

    /// Wrap a raw wei count.
    pub fn from_raw(wei: U256) -> Self {
        Self(wei)
    }

    /// The raw wei count.
    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Wei> for U256 {
    fn from(wei: Wei) -> Self {
        wei.0
    }
}
