//! Notification records emitted by pool operations
//!
//! Every successful mutating operation publishes exactly one of these for
//! external observers and indexers. They are auditability, not correctness:
//! the engine's behavior does not depend on anyone consuming them.

use crate::identifiers::Amount;
use serde::{Deserialize, Serialize};

/// A record of one completed pool mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// Liquidity deposited into the pool by the administrator
    LiquidityAdded { amount_a: Amount, amount_b: Amount },

    /// Liquidity withdrawn from the pool by the administrator
    LiquidityRemoved { amount_a: Amount, amount_b: Amount },

    /// A swap, expressed as signed deltas from the caller's perspective:
    /// negative for the asset the caller sold, positive for the asset bought.
    Swap { delta_a: i128, delta_b: i128 },
}
