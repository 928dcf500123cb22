//! Capability interface of the native value asset.
//!
//! The native reserve is the pool account's native balance.  Value that a
//! caller attaches to a payable operation is modelled as an inbound
//! [`NativeLedger::transfer`] from the caller to the pool, performed as the
//! first step of that operation; the balance read afterwards is the
//! post-credit balance and the pre-credit reserve is recovered by
//! subtracting the attached value.
//!
//! An outbound transfer hands control to the recipient's account, which
//! may be arbitrary code.  The exchange therefore issues outbound
//! transfers only after all of its own bookkeeping for the operation is
//! final.

use super::Transactional;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;

/// Ledger of the host's native value asset.
pub trait NativeLedger: Transactional {
    /// Native balance of `account`.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Pushes `amount` of native value from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Rejected`] if the recipient refuses the value.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError>;
}
