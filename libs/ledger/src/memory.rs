//! In-memory reference ledger
//!
//! Balance and allowance maps behind a lock, with a freeze switch so tests
//! can force the transfer-failure paths of the pool engine. This is the
//! system-of-record stand-in for everything that is not the engine itself.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use basin_types::{AccountId, Amount, AssetId};
use parking_lot::RwLock;
use tracing::debug;

use crate::{AssetLedger, LedgerError};

/// A single-asset ledger held entirely in memory
#[derive(Debug)]
pub struct InMemoryLedger {
    asset: AssetId,
    balances: RwLock<HashMap<AccountId, Amount>>,
    /// (owner, spender) -> remaining approved amount
    allowances: RwLock<HashMap<(AccountId, AccountId), Amount>>,
    frozen: AtomicBool,
}

impl InMemoryLedger {
    /// Create an empty ledger for `asset`.
    pub fn new(asset: AssetId) -> Self {
        Self {
            asset,
            balances: RwLock::new(HashMap::new()),
            allowances: RwLock::new(HashMap::new()),
            frozen: AtomicBool::new(false),
        }
    }

    /// The asset this ledger tracks.
    pub fn asset(&self) -> AssetId {
        self.asset
    }

    /// Credit `account` out of thin air. Seeding helper for tests and demos;
    /// saturates rather than wrapping on absurd totals.
    pub fn mint(&self, account: AccountId, amount: Amount) {
        let mut balances = self.balances.write();
        let balance = balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
        debug!(asset = %self.asset, %account, amount, "minted");
    }

    /// Set the allowance `owner` grants `spender`, replacing any prior value.
    pub fn approve(&self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.write().insert((owner, spender), amount);
        debug!(asset = %self.asset, %owner, %spender, amount, "approved");
    }

    /// Remaining allowance from `owner` to `spender`.
    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .read()
            .get(&(owner, spender))
            .copied()
            .unwrap_or(0)
    }

    /// Freeze or unfreeze the ledger. While frozen, every transfer fails with
    /// [`LedgerError::Frozen`]; balances stay readable.
    pub fn set_frozen(&self, frozen: bool) {
        self.frozen.store(frozen, Ordering::SeqCst);
    }

    /// Debit `from` and credit `to` under one lock. `from == to` is a valid
    /// movement that leaves the balance unchanged, provided it is covered.
    fn move_funds(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.frozen.load(Ordering::SeqCst) {
            return Err(LedgerError::Frozen);
        }

        let mut balances = self.balances.write();
        let available = balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                required: amount,
                available,
            });
        }
        balances.insert(from, available - amount);
        let credited = balances.entry(to).or_insert(0);
        *credited = credited.saturating_add(amount);

        debug!(asset = %self.asset, %from, %to, amount, "transferred");
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.read().get(&account).copied().unwrap_or(0)
    }

    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.move_funds(from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.frozen.load(Ordering::SeqCst) {
            return Err(LedgerError::Frozen);
        }

        let approved = self.allowance(from, spender);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner: from,
                spender,
                required: amount,
                available: approved,
            });
        }

        self.move_funds(from, to, amount)?;
        self.allowances
            .write()
            .insert((from, spender), approved - amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: AccountId = AccountId::new(1);
    const BOB: AccountId = AccountId::new(2);

    fn ledger() -> InMemoryLedger {
        InMemoryLedger::new(AssetId::new(10))
    }

    #[test]
    fn mint_credits_balance() {
        let l = ledger();
        assert_eq!(l.balance_of(ALICE), 0);
        l.mint(ALICE, 500);
        assert_eq!(l.balance_of(ALICE), 500);
    }

    #[test]
    fn transfer_moves_funds() {
        let l = ledger();
        l.mint(ALICE, 100);
        l.transfer(ALICE, BOB, 40).unwrap();
        assert_eq!(l.balance_of(ALICE), 60);
        assert_eq!(l.balance_of(BOB), 40);
    }

    #[test]
    fn transfer_rejects_overdraft() {
        let l = ledger();
        l.mint(ALICE, 10);
        let err = l.transfer(ALICE, BOB, 11).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                account: ALICE,
                required: 11,
                available: 10,
            }
        );
        // No partial effect.
        assert_eq!(l.balance_of(ALICE), 10);
        assert_eq!(l.balance_of(BOB), 0);
    }

    #[test]
    fn self_transfer_preserves_balance() {
        let l = ledger();
        l.mint(ALICE, 100);
        l.transfer(ALICE, ALICE, 100).unwrap();
        assert_eq!(l.balance_of(ALICE), 100);
    }

    #[test]
    fn transfer_from_requires_and_consumes_allowance() {
        let l = ledger();
        l.mint(ALICE, 100);

        let err = l.transfer_from(BOB, ALICE, BOB, 30).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { .. }));

        l.approve(ALICE, BOB, 50);
        l.transfer_from(BOB, ALICE, BOB, 30).unwrap();
        assert_eq!(l.balance_of(BOB), 30);
        assert_eq!(l.allowance(ALICE, BOB), 20);
    }

    #[test]
    fn allowance_survives_failed_movement() {
        let l = ledger();
        l.approve(ALICE, BOB, 50);
        // Alice has no balance: movement fails, allowance untouched.
        let err = l.transfer_from(BOB, ALICE, BOB, 30).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(l.allowance(ALICE, BOB), 50);
    }

    #[test]
    fn frozen_ledger_rejects_transfers() {
        let l = ledger();
        l.mint(ALICE, 100);
        l.set_frozen(true);
        assert_eq!(l.transfer(ALICE, BOB, 1), Err(LedgerError::Frozen));
        l.approve(ALICE, BOB, 10);
        assert_eq!(l.transfer_from(BOB, ALICE, BOB, 1), Err(LedgerError::Frozen));
        assert_eq!(l.balance_of(ALICE), 100);

        l.set_frozen(false);
        l.transfer(ALICE, BOB, 1).unwrap();
        assert_eq!(l.balance_of(BOB), 1);
    }
}
