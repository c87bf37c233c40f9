//! Pool construction parameters
//!
//! The two asset identities, the administrator, and the pool's own custody
//! account are fixed when the pool is created and immutable thereafter; there
//! is no reconfiguration surface.

use basin_types::{AccountId, AssetId};
use serde::{Deserialize, Serialize};

/// Immutable identity configuration of one pool instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// First asset of the pair
    pub asset_a: AssetId,
    /// Second asset of the pair
    pub asset_b: AssetId,
    /// The single identity authorized to add or remove liquidity
    pub administrator: AccountId,
    /// The account under which the pool custodies its reserves on the ledgers
    pub pool_account: AccountId,
}
