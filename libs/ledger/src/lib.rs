//! # Basin Asset Ledger Boundary
//!
//! The pool engine never holds asset value itself; custody lives in an
//! external ledger per asset. This crate defines the capability interface the
//! engine requires of each of its two assets, plus an in-memory reference
//! ledger used by tests and the demo service.
//!
//! Each ledger call is atomic: it either completes fully or fails without
//! effect, and reports which per call. A failed transfer must abort the
//! enclosing pool operation; the engine treats these errors as cause to
//! unwind anything it already moved.

pub mod memory;

use std::fmt;

use basin_types::{AccountId, Amount};
use thiserror::Error;

pub use memory::InMemoryLedger;

/// Failures reported by an asset ledger
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The paying account does not hold the required amount
    #[error("insufficient balance in {account}: required {required}, available {available}")]
    InsufficientBalance {
        account: AccountId,
        required: Amount,
        available: Amount,
    },

    /// The spender's allowance from the owner does not cover the amount
    #[error(
        "insufficient allowance for {spender} from {owner}: required {required}, available {available}"
    )]
    InsufficientAllowance {
        owner: AccountId,
        spender: AccountId,
        required: Amount,
        available: Amount,
    },

    /// The ledger is not accepting transfers
    #[error("transfers are frozen")]
    Frozen,
}

/// Capability interface required of each of the pool's two assets
///
/// One implementor instance tracks exactly one asset. The identity performing
/// a movement is always passed explicitly; there is no ambient caller.
pub trait AssetLedger: Send + Sync + fmt::Debug {
    /// Current holding of `account`.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Move funds out of `from`'s own custody into `to`. Atomic per call.
    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Move funds from `from` to `to` on the authority of a prior allowance
    /// granted by `from` to `spender`. Consumes allowance on success.
    /// Atomic per call.
    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
