//! # Basin AMM Library - Constant-Product Mathematics
//!
//! ## Purpose
//!
//! Pure mathematical core for the two-asset constant-product pool: the
//! swap-output formula, spot-price derivation, and the deposit-ratio equality
//! check. Implements exact x*y=k arithmetic over unsigned 128-bit integers
//! with zero precision loss; every truncation is an explicit floor with a
//! tested drift bound, never a silent rounding.
//!
//! ## Integration Points
//!
//! - **Input Sources**: reserve snapshots and trade parameters from the pool
//!   engine
//! - **Output Destinations**: the pool engine's operation layer, which owns
//!   custody, authorization, and event emission
//! - **Precision**: amounts in native units, prices at 10^18 fixed-point
//!   scale
//! - **Validation**: checked arithmetic throughout; overflow is an error,
//!   never a wrap
//!
//! This crate holds no state and performs no I/O: given the same reserves and
//! input, every function returns the same result.

pub mod constant_product;

pub use constant_product::{ConstantProduct, MathError};

/// Common types for AMM calculations
pub use basin_types::{Amount, PriceFixedPoint18};
