//! The pool engine
//!
//! Owns the two reserve counters and exposes the four mutating operations
//! plus the spot-price query. Each operation is a single synchronous unit of
//! work: every precondition is validated before any mutation, and a failed
//! external transfer causes any prior transfer within the same operation to
//! be unwound, so the pool and the ledgers are left in their pre-operation
//! state on every failure path.
//!
//! The reserve counters are a view of the pool account's holdings on the two
//! external ledgers; every reserve change here is realized by a ledger
//! movement in the same operation.

use std::sync::Arc;

use basin_amm::{ConstantProduct, MathError};
use basin_ledger::AssetLedger;
use basin_types::{AccountId, Amount, AssetId, PoolEvent, PriceFixedPoint18};
use tracing::{debug, error, warn};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::sink::EventSink;

/// Swap direction, in terms of the asset the caller sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwapDirection {
    AForB,
    BForA,
}

/// A two-asset constant-product pool
///
/// An explicit state object: construct as many independent instances as
/// needed. Operations take `&mut self`, so one pool admits one mutation at a
/// time by construction.
#[derive(Debug)]
pub struct Pool {
    config: PoolConfig,
    ledger_a: Arc<dyn AssetLedger>,
    ledger_b: Arc<dyn AssetLedger>,
    events: Arc<dyn EventSink>,
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Pool {
    /// Create an empty pool over a distinct asset pair.
    ///
    /// `ledger_a` and `ledger_b` are the custody systems for `asset_a` and
    /// `asset_b` respectively. The pool starts in the bootstrap state (both
    /// reserves zero, no defined price).
    pub fn new(
        config: PoolConfig,
        ledger_a: Arc<dyn AssetLedger>,
        ledger_b: Arc<dyn AssetLedger>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self, PoolError> {
        if config.asset_a == config.asset_b {
            return Err(PoolError::InvalidAsset {
                asset: config.asset_b,
            });
        }
        Ok(Self {
            config,
            ledger_a,
            ledger_b,
            events,
            reserve_a: 0,
            reserve_b: 0,
        })
    }

    /// The pool's immutable identity configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Current reserves as `(reserve_a, reserve_b)`.
    pub fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Whether the pool is still bootstrapping (either reserve empty).
    pub fn is_bootstrap(&self) -> bool {
        self.reserve_a == 0 || self.reserve_b == 0
    }

    /// Spot price of `asset`, quoted in the other asset of the pair at 10^18
    /// scale: the opposing reserve divided by this asset's reserve.
    ///
    /// Returns the zero sentinel while the pool is bootstrapping. Fails with
    /// [`PoolError::InvalidAsset`] for any asset outside the configured pair.
    /// Pure query, no side effects.
    pub fn price_of(&self, asset: AssetId) -> Result<PriceFixedPoint18, PoolError> {
        if asset == self.config.asset_a {
            Ok(ConstantProduct::spot_price(self.reserve_a, self.reserve_b)?)
        } else if asset == self.config.asset_b {
            Ok(ConstantProduct::spot_price(self.reserve_b, self.reserve_a)?)
        } else {
            Err(PoolError::InvalidAsset { asset })
        }
    }

    /// Deposit liquidity into the pool. Administrator only.
    ///
    /// The deposit must satisfy `price(A) * amount_a == price(B) * amount_b`
    /// exactly, at fixed-point precision — a strict integer equality on the
    /// price-weighted deposit values, with no tolerance band. While the pool
    /// is empty both price terms are the zero sentinel, so the equality holds
    /// for any pair: the very first deposit freely sets the initial implied
    /// price.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(), PoolError> {
        self.require_administrator(caller)?;
        self.require_balance(&self.ledger_a, self.config.asset_a, caller, amount_a)?;
        self.require_balance(&self.ledger_b, self.config.asset_b, caller, amount_b)?;

        let price_a = self.price_of(self.config.asset_a)?;
        let price_b = self.price_of(self.config.asset_b)?;
        let matches =
            ConstantProduct::deposit_matches_ratio(price_a, amount_a, price_b, amount_b)?;
        if !matches {
            warn!(
                amount_a,
                amount_b,
                %price_a,
                %price_b,
                "deposit rejected: ratio mismatch"
            );
            return Err(PoolError::InvalidRatio { amount_a, amount_b });
        }

        // Reserve arithmetic is validated before any funds move.
        let new_reserve_a = self
            .reserve_a
            .checked_add(amount_a)
            .ok_or(MathError::Overflow {
                op: "add",
                lhs: self.reserve_a,
                rhs: amount_a,
            })?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(amount_b)
            .ok_or(MathError::Overflow {
                op: "add",
                lhs: self.reserve_b,
                rhs: amount_b,
            })?;

        let pool = self.config.pool_account;
        self.ledger_a
            .transfer_from(pool, caller, pool, amount_a)
            .map_err(PoolError::TransferFailed)?;
        if let Err(source) = self.ledger_b.transfer_from(pool, caller, pool, amount_b) {
            self.unwind(&self.ledger_a, pool, caller, amount_a);
            return Err(PoolError::TransferFailed(source));
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        debug!(
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "liquidity added"
        );
        self.events
            .publish(PoolEvent::LiquidityAdded { amount_a, amount_b });
        Ok(())
    }

    /// Withdraw liquidity from pool custody. Administrator only.
    ///
    /// The precondition is a plain sufficiency check on the pool's own
    /// custody, not on the administrator's balances, and there is no ratio
    /// requirement: any amounts up to current holdings are permitted.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(), PoolError> {
        self.require_administrator(caller)?;
        let pool = self.config.pool_account;
        self.require_balance(&self.ledger_a, self.config.asset_a, pool, amount_a)?;
        self.require_balance(&self.ledger_b, self.config.asset_b, pool, amount_b)?;

        let new_reserve_a =
            self.reserve_a
                .checked_sub(amount_a)
                .ok_or(PoolError::InsufficientFunds {
                    account: pool,
                    asset: self.config.asset_a,
                    required: amount_a,
                    available: self.reserve_a,
                })?;
        let new_reserve_b =
            self.reserve_b
                .checked_sub(amount_b)
                .ok_or(PoolError::InsufficientFunds {
                    account: pool,
                    asset: self.config.asset_b,
                    required: amount_b,
                    available: self.reserve_b,
                })?;

        self.ledger_a
            .transfer(pool, caller, amount_a)
            .map_err(PoolError::TransferFailed)?;
        if let Err(source) = self.ledger_b.transfer(pool, caller, amount_b) {
            self.unwind(&self.ledger_a, caller, pool, amount_a);
            return Err(PoolError::TransferFailed(source));
        }

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        debug!(
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "liquidity removed"
        );
        self.events
            .publish(PoolEvent::LiquidityRemoved { amount_a, amount_b });
        Ok(())
    }

    /// Sell `amount_in` of asset A for asset B. Any participant.
    ///
    /// Returns the computed output amount. Note the documented custody
    /// behavior: the output leg is credited to the pool's own account, not
    /// to the caller (see DESIGN.md).
    pub fn swap_a_for_b(
        &mut self,
        caller: AccountId,
        amount_in: Amount,
    ) -> Result<Amount, PoolError> {
        self.execute_swap(caller, amount_in, SwapDirection::AForB)
    }

    /// Sell `amount_in` of asset B for asset A. Any participant.
    pub fn swap_b_for_a(
        &mut self,
        caller: AccountId,
        amount_in: Amount,
    ) -> Result<Amount, PoolError> {
        self.execute_swap(caller, amount_in, SwapDirection::BForA)
    }

    fn execute_swap(
        &mut self,
        caller: AccountId,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<Amount, PoolError> {
        if self.is_bootstrap() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let (ledger_in, ledger_out, asset_in, reserve_in, reserve_out) = match direction {
            SwapDirection::AForB => (
                Arc::clone(&self.ledger_a),
                Arc::clone(&self.ledger_b),
                self.config.asset_a,
                self.reserve_a,
                self.reserve_b,
            ),
            SwapDirection::BForA => (
                Arc::clone(&self.ledger_b),
                Arc::clone(&self.ledger_a),
                self.config.asset_b,
                self.reserve_b,
                self.reserve_a,
            ),
        };

        self.require_balance(&ledger_in, asset_in, caller, amount_in)?;

        let amount_out = ConstantProduct::output_amount(amount_in, reserve_in, reserve_out)?;
        if amount_out > reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }

        // Event deltas are signed; reject amounts the signed width cannot
        // carry before anything moves.
        let delta_in = i128::try_from(amount_in).map_err(|_| MathError::Overflow {
            op: "delta",
            lhs: amount_in,
            rhs: 0,
        })?;
        let delta_out = i128::try_from(amount_out).map_err(|_| MathError::Overflow {
            op: "delta",
            lhs: amount_out,
            rhs: 0,
        })?;

        let pool = self.config.pool_account;
        ledger_in
            .transfer_from(pool, caller, pool, amount_in)
            .map_err(PoolError::TransferFailed)?;

        // Output leg: the proceeds are moved within the pool's own custody
        // rather than to the caller. Documented behavior of the system being
        // cloned, reproduced deliberately; see DESIGN.md.
        if let Err(source) = ledger_out.transfer(pool, pool, amount_out) {
            self.unwind(&ledger_in, pool, caller, amount_in);
            return Err(PoolError::TransferFailed(source));
        }

        match direction {
            SwapDirection::AForB => {
                self.reserve_a = reserve_in + amount_in;
                self.reserve_b = reserve_out - amount_out;
            }
            SwapDirection::BForA => {
                self.reserve_b = reserve_in + amount_in;
                self.reserve_a = reserve_out - amount_out;
            }
        }
        debug!(
            %caller,
            amount_in,
            amount_out,
            reserve_a = self.reserve_a,
            reserve_b = self.reserve_b,
            "swap executed"
        );

        let event = match direction {
            SwapDirection::AForB => PoolEvent::Swap {
                delta_a: -delta_in,
                delta_b: delta_out,
            },
            SwapDirection::BForA => PoolEvent::Swap {
                delta_a: delta_out,
                delta_b: -delta_in,
            },
        };
        self.events.publish(event);

        Ok(amount_out)
    }

    fn require_administrator(&self, caller: AccountId) -> Result<(), PoolError> {
        if caller != self.config.administrator {
            warn!(%caller, "rejected non-administrator liquidity operation");
            return Err(PoolError::Unauthorized { caller });
        }
        Ok(())
    }

    fn require_balance(
        &self,
        ledger: &Arc<dyn AssetLedger>,
        asset: AssetId,
        account: AccountId,
        required: Amount,
    ) -> Result<(), PoolError> {
        let available = ledger.balance_of(account);
        if available < required {
            return Err(PoolError::InsufficientFunds {
                account,
                asset,
                required,
                available,
            });
        }
        Ok(())
    }

    /// Undo a completed transfer leg after a later leg failed. The original
    /// error is what the caller sees; a refund failure is logged because at
    /// that point the ledger, not the engine, holds the authoritative state.
    fn unwind(&self, ledger: &Arc<dyn AssetLedger>, from: AccountId, to: AccountId, amount: Amount) {
        if let Err(refund) = ledger.transfer(from, to, amount) {
            error!(%from, %to, amount, %refund, "failed to unwind transfer leg");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingEventSink;
    use basin_ledger::InMemoryLedger;

    const ASSET_A: AssetId = AssetId::new(1);
    const ASSET_B: AssetId = AssetId::new(2);
    const ADMIN: AccountId = AccountId::new(100);
    const POOL: AccountId = AccountId::new(999);

    fn empty_pool() -> Pool {
        let config = PoolConfig {
            asset_a: ASSET_A,
            asset_b: ASSET_B,
            administrator: ADMIN,
            pool_account: POOL,
        };
        Pool::new(
            config,
            Arc::new(InMemoryLedger::new(ASSET_A)),
            Arc::new(InMemoryLedger::new(ASSET_B)),
            Arc::new(RecordingEventSink::new()),
        )
        .unwrap()
    }

    #[test]
    fn rejects_identical_assets() {
        let config = PoolConfig {
            asset_a: ASSET_A,
            asset_b: ASSET_A,
            administrator: ADMIN,
            pool_account: POOL,
        };
        let err = Pool::new(
            config,
            Arc::new(InMemoryLedger::new(ASSET_A)),
            Arc::new(InMemoryLedger::new(ASSET_A)),
            Arc::new(RecordingEventSink::new()),
        )
        .unwrap_err();
        assert_eq!(err, PoolError::InvalidAsset { asset: ASSET_A });
    }

    #[test]
    fn new_pool_is_bootstrapped_with_no_price() {
        let pool = empty_pool();
        assert!(pool.is_bootstrap());
        assert_eq!(pool.reserves(), (0, 0));
        assert_eq!(
            pool.price_of(ASSET_A).unwrap(),
            PriceFixedPoint18::ZERO
        );
        assert_eq!(
            pool.price_of(ASSET_B).unwrap(),
            PriceFixedPoint18::ZERO
        );
    }

    #[test]
    fn price_query_rejects_foreign_asset() {
        let pool = empty_pool();
        let other = AssetId::new(3);
        assert_eq!(
            pool.price_of(other).unwrap_err(),
            PoolError::InvalidAsset { asset: other }
        );
    }

    #[test]
    fn liquidity_operations_gated_on_administrator() {
        let mut pool = empty_pool();
        let stranger = AccountId::new(7);
        assert_eq!(
            pool.add_liquidity(stranger, 10, 10).unwrap_err(),
            PoolError::Unauthorized { caller: stranger }
        );
        assert_eq!(
            pool.remove_liquidity(stranger, 10, 10).unwrap_err(),
            PoolError::Unauthorized { caller: stranger }
        );
        assert_eq!(pool.reserves(), (0, 0));
    }

    #[test]
    fn swap_on_bootstrapped_pool_rejected() {
        let mut pool = empty_pool();
        let trader = AccountId::new(8);
        assert_eq!(
            pool.swap_a_for_b(trader, 10).unwrap_err(),
            PoolError::InsufficientLiquidity
        );
        assert_eq!(
            pool.swap_b_for_a(trader, 10).unwrap_err(),
            PoolError::InsufficientLiquidity
        );
    }
}
