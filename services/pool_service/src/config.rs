//! Pool service configuration
//!
//! Loads service settings from a TOML file with `BASIN_`-prefixed environment
//! variable overrides. All identities and amounts live here so a deployment
//! can reshape the demo scenario without touching code.

use std::path::Path;

use anyhow::{Context, Result};
use basin_pool::PoolConfig;
use basin_types::{AccountId, Amount, AssetId};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Complete configuration for the pool service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolServiceConfig {
    /// Pool identity parameters
    pub pool: PoolSettings,
    /// Ledger seeding for the demo accounts
    pub funding: FundingSettings,
    /// The scripted scenario the service walks through
    pub scenario: ScenarioSettings,
}

/// Identities fixed at pool construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSettings {
    pub asset_a: u64,
    pub asset_b: u64,
    pub administrator: u64,
    pub pool_account: u64,
}

/// Balances minted onto the in-memory ledgers before the scenario runs
///
/// Amounts are plain integers in the asset's native smallest unit; TOML
/// integers cap at 64 bits, which is ample for a demonstration ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingSettings {
    pub administrator_a: u64,
    pub administrator_b: u64,
    pub trader: u64,
    pub trader_a: u64,
    pub trader_b: u64,
}

/// The deposit, swap, and withdrawal amounts of the scripted walk-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSettings {
    pub initial_deposit_a: u64,
    pub initial_deposit_b: u64,
    pub swap_a_in: u64,
    pub swap_b_in: u64,
    pub withdraw_a: u64,
    pub withdraw_b: u64,
}

impl PoolServiceConfig {
    /// Load from `path`, then apply `BASIN_`-prefixed environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix("BASIN")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()
            .context("failed to build configuration")?;

        config
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}

impl PoolSettings {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            asset_a: AssetId::new(self.asset_a),
            asset_b: AssetId::new(self.asset_b),
            administrator: AccountId::new(self.administrator),
            pool_account: AccountId::new(self.pool_account),
        }
    }
}

impl FundingSettings {
    pub fn trader_account(&self) -> AccountId {
        AccountId::new(self.trader)
    }
}

impl ScenarioSettings {
    pub fn initial_deposit(&self) -> (Amount, Amount) {
        (self.initial_deposit_a.into(), self.initial_deposit_b.into())
    }
}
