//! Fixed-point price type for exact reserve-ratio arithmetic
//!
//! The spot price of a pool asset is the opposing reserve divided by its own
//! reserve, scaled by 10^18 and floor-divided. Storing that as a dedicated
//! integer wrapper keeps the deposit-ratio check an exact integer equality;
//! substituting floating point here would silently change rejection behavior.

use crate::errors::FixedPointError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point price with 18 decimal places of precision
///
/// Represents a marginal exchange rate as a scaled integer.
/// Scale factor: 10^18.
///
/// Examples:
/// - 1.0 = PriceFixedPoint18(1_000_000_000_000_000_000)
/// - 0.5 = PriceFixedPoint18(500_000_000_000_000_000)
///
/// The zero value is a sentinel meaning "no price defined yet" (a pool with an
/// empty reserve), not a real ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceFixedPoint18(pub u128);

impl PriceFixedPoint18 {
    /// Scale factor for 18 decimal places
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// The "no price defined" sentinel
    pub const ZERO: Self = Self(0);

    /// One, i.e. a 1:1 exchange rate
    pub const ONE: Self = Self(Self::SCALE);

    /// Derive a price from a reserve ratio: `numerator * SCALE / denominator`,
    /// floor division.
    ///
    /// Fails on a zero denominator or if the scaled numerator exceeds the
    /// u128 range. Callers handling the bootstrap (empty-pool) case must
    /// check for zero reserves themselves and use [`Self::ZERO`]; this
    /// constructor always computes a real ratio.
    pub fn from_ratio(numerator: u128, denominator: u128) -> Result<Self, FixedPointError> {
        if denominator == 0 {
            return Err(FixedPointError::DivisionByZero);
        }
        let scaled = numerator
            .checked_mul(Self::SCALE)
            .ok_or(FixedPointError::Overflow {
                op: "scale",
                lhs: numerator,
                rhs: Self::SCALE,
            })?;
        Ok(Self(scaled / denominator))
    }

    /// Multiply this price by an unscaled amount, keeping the 10^18 scale.
    ///
    /// This is the term used on each side of the deposit-ratio equality
    /// check; both sides stay scaled, so the comparison is exact.
    pub fn checked_mul_amount(self, amount: u128) -> Result<u128, FixedPointError> {
        self.0
            .checked_mul(amount)
            .ok_or(FixedPointError::Overflow {
                op: "mul",
                lhs: self.0,
                rhs: amount,
            })
    }

    /// Get the raw scaled integer value
    pub const fn raw_value(self) -> u128 {
        self.0
    }

    /// Create from a raw scaled integer (advanced usage)
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Whether this is the "no price defined" sentinel
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Display implementation for convenient logging
///
/// Renders the integer and fractional parts without going through floating
/// point, so logged prices are exact.
impl fmt::Display for PriceFixedPoint18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:018}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_scales_and_floors() {
        // 2000 B per 1000 A => price 2.0
        let price = PriceFixedPoint18::from_ratio(2000, 1000).unwrap();
        assert_eq!(price.raw_value(), 2 * PriceFixedPoint18::SCALE);

        // 1 per 3 floors toward zero
        let third = PriceFixedPoint18::from_ratio(1, 3).unwrap();
        assert_eq!(third.raw_value(), PriceFixedPoint18::SCALE / 3);
    }

    #[test]
    fn from_ratio_rejects_zero_denominator() {
        assert_eq!(
            PriceFixedPoint18::from_ratio(1, 0),
            Err(FixedPointError::DivisionByZero)
        );
    }

    #[test]
    fn from_ratio_detects_overflow() {
        let err = PriceFixedPoint18::from_ratio(u128::MAX, 1).unwrap_err();
        assert!(matches!(err, FixedPointError::Overflow { op: "scale", .. }));
    }

    #[test]
    fn checked_mul_amount_exact() {
        let price = PriceFixedPoint18::from_ratio(3, 2).unwrap(); // 1.5
        assert_eq!(
            price.checked_mul_amount(10).unwrap(),
            15 * PriceFixedPoint18::SCALE
        );
    }

    #[test]
    fn display_is_exact() {
        let price = PriceFixedPoint18::from_ratio(5, 4).unwrap();
        assert_eq!(price.to_string(), "1.250000000000000000");
        assert_eq!(PriceFixedPoint18::ZERO.to_string(), "0.000000000000000000");
    }
}
