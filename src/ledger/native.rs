//! In-memory native value ledger.

use std::collections::BTreeSet;

use super::book::BalanceBook;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::{NativeLedger, Transactional};

/// Native value balances kept in memory.
///
/// Accounts marked with [`reject_incoming`](Self::reject_incoming) refuse
/// every inbound transfer, standing in for a recipient whose code rejects
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNativeLedger {
    book: BalanceBook,
    rejecting: BTreeSet<Address>,
}

impl MemoryNativeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Funds `account` with `amount` of newly created native value.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the balance would overflow.
    pub fn fund(&mut self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.book.credit(account, amount.get())
    }

    /// Makes `account` refuse all inbound native transfers.
    pub fn reject_incoming(&mut self, account: &Address) {
        self.rejecting.insert(*account);
    }
}

impl Transactional for MemoryNativeLedger {
    type Checkpoint = Self;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.clone()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        *self = checkpoint;
    }
}

impl NativeLedger for MemoryNativeLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        Amount::new(self.book.get(account))
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        if self.rejecting.contains(to) {
            return Err(LedgerError::Rejected(format!("recipient {to} refuses value")));
        }
        self.book.move_between(from, to, amount.get())
    }
}
