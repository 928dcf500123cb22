//! In-memory traded-token ledger with allowances.

use std::collections::BTreeMap;

use super::book::BalanceBook;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::{AssetLedger, Transactional};

/// Fungible token ledger kept in memory.
///
/// Supply is created with [`issue`](Self::issue); allowances follow the
/// usual approve/transfer-from model, and `approve` overwrites any previous
/// allowance for the same owner and spender.
///
/// # Examples
///
/// ```
/// use native_amm::domain::{Address, Amount};
/// use native_amm::ledger::MemoryAssetLedger;
/// use native_amm::traits::AssetLedger;
///
/// let alice = Address::from_bytes([1u8; 32]);
/// let mut ledger = MemoryAssetLedger::new();
/// ledger.issue(&alice, Amount::new(1_000)).expect("issue");
/// assert_eq!(ledger.balance_of(&alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAssetLedger {
    book: BalanceBook,
    allowances: BTreeMap<(Address, Address), u128>,
}

impl MemoryAssetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new tokens in `account`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the balance would overflow.
    pub fn issue(&mut self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.book.credit(account, amount.get())
    }

    /// Sets the allowance `owner` grants to `spender`.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount.get());
    }

    /// Allowance `owner` currently grants to `spender`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        Amount::new(self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0))
    }

    /// Sum of all balances.
    pub fn total_issued(&self) -> Option<Amount> {
        self.book.total().map(Amount::new)
    }
}

impl Transactional for MemoryAssetLedger {
    type Checkpoint = Self;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.clone()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        *self = checkpoint;
    }
}

impl AssetLedger for MemoryAssetLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        Amount::new(self.book.get(account))
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.book.move_between(from, to, amount.get())
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let granted = self.allowance(from, spender).get();
        if granted < amount.get() {
            return Err(LedgerError::InsufficientAllowance {
                have: granted,
                need: amount.get(),
            });
        }
        self.book.move_between(from, to, amount.get())?;
        self.allowances
            .insert((*from, *spender), granted - amount.get());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn owner() -> Address {
        Address::from_bytes([1u8; 32])
    }

    fn pool() -> Address {
        Address::from_bytes([9u8; 32])
    }

    fn funded(balance: u128) -> MemoryAssetLedger {
        let mut ledger = MemoryAssetLedger::new();
        let Ok(()) = ledger.issue(&owner(), Amount::new(balance)) else {
            panic!("issue");
        };
        ledger
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded(100);
        ledger.approve(&owner(), &pool(), Amount::new(60));
        assert!(ledger
            .transfer_from(&pool(), &owner(), &pool(), Amount::new(40))
            .is_ok());
        assert_eq!(ledger.allowance(&owner(), &pool()), Amount::new(20));
        assert_eq!(ledger.balance_of(&pool()), Amount::new(40));
        assert_eq!(ledger.balance_of(&owner()), Amount::new(60));
    }

    #[test]
    fn transfer_from_without_allowance_fails() {
        let mut ledger = funded(100);
        let result = ledger.transfer_from(&pool(), &owner(), &pool(), Amount::new(1));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientAllowance { have: 0, need: 1 })
        );
    }

    #[test]
    fn transfer_from_short_balance_keeps_allowance() {
        let mut ledger = funded(10);
        ledger.approve(&owner(), &pool(), Amount::new(50));
        let result = ledger.transfer_from(&pool(), &owner(), &pool(), Amount::new(20));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance { have: 10, need: 20 })
        );
        assert_eq!(ledger.allowance(&owner(), &pool()), Amount::new(50));
    }

    #[test]
    fn rollback_restores_allowance_and_balances() {
        let mut ledger = funded(100);
        ledger.approve(&owner(), &pool(), Amount::new(100));
        let cp = ledger.checkpoint();
        assert!(ledger
            .transfer_from(&pool(), &owner(), &pool(), Amount::new(100))
            .is_ok());
        ledger.rollback(cp);
        assert_eq!(ledger.balance_of(&owner()), Amount::new(100));
        assert_eq!(ledger.allowance(&owner(), &pool()), Amount::new(100));
    }

    #[test]
    fn total_issued_tracks_supply() {
        let mut ledger = funded(70);
        assert!(ledger.transfer(&owner(), &pool(), Amount::new(30)).is_ok());
        assert_eq!(ledger.total_issued(), Some(Amount::new(70)));
    }
}
