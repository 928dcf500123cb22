//! In-memory pool-share ledger.

use super::book::BalanceBook;
use crate::domain::{Address, Shares};
use crate::error::LedgerError;
use crate::traits::{ShareLedger, Transactional};

/// Pool-share ledger kept in memory.
///
/// Maintains `total_supply == Σ balances` across every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryShareLedger {
    book: BalanceBook,
    supply: u128,
}

impl MemoryShareLedger {
    /// Creates a ledger with no shares outstanding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transactional for MemoryShareLedger {
    type Checkpoint = Self;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.clone()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        *self = checkpoint;
    }
}

impl ShareLedger for MemoryShareLedger {
    fn mint(&mut self, to: &Address, amount: Shares) -> Result<(), LedgerError> {
        let supply = self
            .supply
            .checked_add(amount.get())
            .ok_or(LedgerError::Overflow)?;
        self.book.credit(to, amount.get())?;
        self.supply = supply;
        Ok(())
    }

    fn burn(&mut self, from: &Address, amount: Shares) -> Result<(), LedgerError> {
        self.book.debit(from, amount.get())?;
        // balance <= supply, so a successful debit cannot underflow the supply
        self.supply -= amount.get();
        Ok(())
    }

    fn total_supply(&self) -> Shares {
        Shares::new(self.supply)
    }

    fn balance_of(&self, account: &Address) -> Shares {
        Shares::new(self.book.get(account))
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Shares) -> Result<(), LedgerError> {
        self.book.move_between(from, to, amount.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let mut ledger = MemoryShareLedger::new();
        assert!(ledger.mint(&acct(1), Shares::new(500)).is_ok());
        assert!(ledger.mint(&acct(2), Shares::new(250)).is_ok());
        assert!(ledger.burn(&acct(1), Shares::new(100)).is_ok());
        assert_eq!(ledger.total_supply(), Shares::new(650));
        assert_eq!(ledger.balance_of(&acct(1)), Shares::new(400));
    }

    #[test]
    fn burn_beyond_balance_fails() {
        let mut ledger = MemoryShareLedger::new();
        assert!(ledger.mint(&acct(1), Shares::new(5)).is_ok());
        assert_eq!(
            ledger.burn(&acct(1), Shares::new(6)),
            Err(LedgerError::InsufficientBalance { have: 5, need: 6 })
        );
        assert_eq!(ledger.total_supply(), Shares::new(5));
    }

    #[test]
    fn transfer_leaves_supply_unchanged() {
        let mut ledger = MemoryShareLedger::new();
        assert!(ledger.mint(&acct(1), Shares::new(10)).is_ok());
        assert!(ledger.transfer(&acct(1), &acct(2), Shares::new(4)).is_ok());
        assert_eq!(ledger.balance_of(&acct(2)), Shares::new(4));
        assert_eq!(ledger.total_supply(), Shares::new(10));
    }

    #[test]
    fn mint_overflow_rejected() {
        let mut ledger = MemoryShareLedger::new();
        assert!(ledger.mint(&acct(1), Shares::new(u128::MAX)).is_ok());
        assert_eq!(
            ledger.mint(&acct(2), Shares::new(1)),
            Err(LedgerError::Overflow)
        );
    }
}
