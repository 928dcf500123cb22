//! Capability interface of the pool-share ledger.
//!
//! Share supply and balances are owned by the ledger.  The exchange only
//! requests mints on deposit and burns on withdrawal; secondary trading of
//! shares goes through [`ShareLedger::transfer`] and never involves the
//! pool's accounting.

use super::Transactional;
use crate::domain::{Address, Shares};
use crate::error::LedgerError;

/// Fungible ledger of pool-share tokens.
pub trait ShareLedger: Transactional {
    /// Mints `amount` new shares to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the supply or the balance would not be
    /// representable.  No other failure is permitted.
    fn mint(&mut self, to: &Address, amount: Shares) -> Result<(), LedgerError>;

    /// Destroys `amount` shares held by `from`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `from` holds fewer than
    /// `amount` shares.
    fn burn(&mut self, from: &Address, amount: Shares) -> Result<(), LedgerError>;

    /// Total outstanding shares.
    fn total_supply(&self) -> Shares;

    /// Share balance of `account`.
    fn balance_of(&self, account: &Address) -> Shares;

    /// Moves shares between holders.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `from` holds fewer than
    /// `amount` shares.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Shares) -> Result<(), LedgerError>;
}
