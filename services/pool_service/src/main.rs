//! Basin pool service
//!
//! A thin demonstration harness around the pool engine: seeds a pair of
//! in-memory asset ledgers, bootstraps a pool, and walks it through a
//! deposit, price queries, swaps in both directions, and a withdrawal,
//! logging every step. The engine itself is the product; this binary exists
//! to show one full custody round-trip end to end.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use basin_ledger::{AssetLedger, InMemoryLedger};
use basin_pool::{LogEventSink, Pool};
use basin_types::AccountId;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::PoolServiceConfig;

#[derive(Debug, Parser)]
#[command(name = "pool_service", about = "Basin constant-product pool demo")]
struct Args {
    /// Path to the service configuration file
    #[arg(long, default_value = "config/pool.toml")]
    config: PathBuf,
}

/// Final state written as one JSON log line for downstream tooling
#[derive(Debug, Serialize)]
struct ScenarioSummary {
    reserve_a: u128,
    reserve_b: u128,
    price_a: String,
    price_b: String,
    pool_custody_a: u128,
    pool_custody_b: u128,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("🚀 Starting Basin pool service...");

    let cfg = PoolServiceConfig::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    let pool_config = cfg.pool.pool_config();
    info!(
        asset_a = %pool_config.asset_a,
        asset_b = %pool_config.asset_b,
        administrator = %pool_config.administrator,
        "✅ Configuration loaded"
    );

    // Seed the custody layer: two single-asset ledgers, funded accounts, and
    // allowances so the pool account can pull deposits and swap inputs.
    let ledger_a = Arc::new(InMemoryLedger::new(pool_config.asset_a));
    let ledger_b = Arc::new(InMemoryLedger::new(pool_config.asset_b));

    let admin = pool_config.administrator;
    let trader = cfg.funding.trader_account();
    ledger_a.mint(admin, cfg.funding.administrator_a.into());
    ledger_b.mint(admin, cfg.funding.administrator_b.into());
    ledger_a.mint(trader, cfg.funding.trader_a.into());
    ledger_b.mint(trader, cfg.funding.trader_b.into());
    for ledger in [&ledger_a, &ledger_b] {
        ledger.approve(admin, pool_config.pool_account, u128::MAX);
        ledger.approve(trader, pool_config.pool_account, u128::MAX);
    }
    info!("✅ Ledgers seeded");

    let mut pool = Pool::new(
        pool_config,
        ledger_a.clone() as Arc<dyn AssetLedger>,
        ledger_b.clone() as Arc<dyn AssetLedger>,
        Arc::new(LogEventSink),
    )
    .context("constructing pool")?;
    info!("✅ Pool created in bootstrap state");

    run_scenario(&mut pool, &cfg, admin, trader)?;

    let (reserve_a, reserve_b) = pool.reserves();
    let summary = ScenarioSummary {
        reserve_a,
        reserve_b,
        price_a: pool.price_of(pool.config().asset_a)?.to_string(),
        price_b: pool.price_of(pool.config().asset_b)?.to_string(),
        pool_custody_a: ledger_a.balance_of(pool.config().pool_account),
        pool_custody_b: ledger_b.balance_of(pool.config().pool_account),
    };
    info!(
        summary = %serde_json::to_string(&summary).context("serializing summary")?,
        "✅ Scenario complete"
    );

    Ok(())
}

fn run_scenario(
    pool: &mut Pool,
    cfg: &PoolServiceConfig,
    admin: AccountId,
    trader: AccountId,
) -> Result<()> {
    let (deposit_a, deposit_b) = cfg.scenario.initial_deposit();
    pool.add_liquidity(admin, deposit_a, deposit_b)
        .context("bootstrap deposit")?;
    info!(
        price_a = %pool.price_of(pool.config().asset_a)?,
        price_b = %pool.price_of(pool.config().asset_b)?,
        "💰 Initial liquidity in place"
    );

    let out_b = pool
        .swap_a_for_b(trader, cfg.scenario.swap_a_in.into())
        .context("swap A for B")?;
    info!(amount_in = cfg.scenario.swap_a_in, amount_out = out_b, "🔄 Swapped A for B");

    let out_a = pool
        .swap_b_for_a(trader, cfg.scenario.swap_b_in.into())
        .context("swap B for A")?;
    info!(amount_in = cfg.scenario.swap_b_in, amount_out = out_a, "🔄 Swapped B for A");

    pool.remove_liquidity(
        admin,
        cfg.scenario.withdraw_a.into(),
        cfg.scenario.withdraw_b.into(),
    )
    .context("withdrawal")?;
    info!("➖ Liquidity withdrawn");

    Ok(())
}
