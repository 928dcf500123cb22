//! Capability interface of the traded-token ledger.
//!
//! The exchange never stores its token reserve.  It asks the ledger for the
//! pool account's balance on every read and moves tokens only through
//! [`AssetLedger::transfer`] (outbound) and [`AssetLedger::transfer_from`]
//! (inbound, spending an allowance the caller granted to the pool).

use super::Transactional;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;

/// Fungible ledger holding the traded token.
///
/// Any implementation with standard fungible-token semantics satisfies the
/// pool; the in-memory [`MemoryAssetLedger`](crate::ledger::MemoryAssetLedger)
/// is one.
///
/// # Errors
///
/// Mutations fail with a [`LedgerError`] and leave the ledger unchanged.
pub trait AssetLedger: Transactional {
    /// Balance of `account`.  Unknown accounts hold zero.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// the allowance `from` granted to `spender`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is below
    ///   `amount`.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
