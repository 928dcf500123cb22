//! Balance map shared by the in-memory ledgers.

use std::collections::BTreeMap;

use crate::domain::Address;
use crate::error::LedgerError;

/// Per-account balances in raw `u128` units.
///
/// Every mutation validates before writing, so a failed call leaves the
/// book untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BalanceBook {
    balances: BTreeMap<Address, u128>,
}

impl BalanceBook {
    pub(crate) fn get(&self, account: &Address) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub(crate) fn credit(&mut self, account: &Address, amount: u128) -> Result<(), LedgerError> {
        let next = self
            .get(account)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(*account, next);
        Ok(())
    }

    pub(crate) fn debit(&mut self, account: &Address, amount: u128) -> Result<(), LedgerError> {
        let have = self.get(account);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        self.balances.insert(*account, have - amount);
        Ok(())
    }

    /// Debit and credit as one step; nothing changes if either side fails.
    pub(crate) fn move_between(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let have = self.get(from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        if from == to {
            return Ok(());
        }
        self.get(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    pub(crate) fn total(&self) -> Option<u128> {
        self.balances
            .values()
            .try_fold(0u128, |acc, v| acc.checked_add(*v))
    }
}
