//! Pool operation failures
//!
//! Every failure aborts the enclosing operation with no partial state change:
//! each variant is produced either by an upfront precondition check or by a
//! ledger call result, and the engine unwinds any transfer it already made
//! before surfacing one.

use basin_amm::MathError;
use basin_ledger::LedgerError;
use basin_types::{AccountId, Amount, AssetId};
use thiserror::Error;

/// Structured error types for pool operation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Caller is not the administrator, for administrator-only operations
    #[error("caller {caller} is not the administrator")]
    Unauthorized { caller: AccountId },

    /// A required ledger balance is below what the operation needs
    #[error(
        "insufficient funds: {account} holds {available} of {asset}, operation requires {required}"
    )]
    InsufficientFunds {
        account: AccountId,
        asset: AssetId,
        required: Amount,
        available: Amount,
    },

    /// Deposited amounts do not match the current implied price ratio exactly
    #[error("deposit of {amount_a}/{amount_b} does not match the current reserve ratio")]
    InvalidRatio { amount_a: Amount, amount_b: Amount },

    /// Pool lacks the reserve to satisfy a swap, or is still bootstrapping
    #[error("insufficient liquidity to satisfy the swap")]
    InsufficientLiquidity,

    /// A price query named an asset outside the configured pair
    #[error("asset {asset} is not part of this pool")]
    InvalidAsset { asset: AssetId },

    /// The external ledger rejected a transfer during an operation
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// Arithmetic edge in the underlying swap or ratio math
    #[error(transparent)]
    Math(#[from] MathError),
}
