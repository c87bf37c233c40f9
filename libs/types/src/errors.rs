//! Error types for fixed-point arithmetic
//!
//! Overflow and division failures in scaled-integer calculations. Every
//! arithmetic step in the engine is checked; these are the failures those
//! checks surface.

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    /// An intermediate product exceeded the u128 range
    #[error("overflow in fixed-point {op}: {lhs} and {rhs}")]
    Overflow {
        op: &'static str,
        lhs: u128,
        rhs: u128,
    },

    /// Division by zero in fixed-point arithmetic
    #[error("division by zero in fixed-point arithmetic")]
    DivisionByZero,
}
