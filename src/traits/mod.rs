//! Capability interfaces of the exchange's collaborators.
//!
//! The pool is generic over three ledgers: [`AssetLedger`] for the traded
//! token, [`ShareLedger`] for pool shares, and [`NativeLedger`] for the
//! host's native value.  All three extend [`Transactional`] so a failed
//! operation can be rolled back across every ledger it touched.

mod asset_ledger;
mod native_ledger;
mod share_ledger;
mod transactional;

pub use asset_ledger::AssetLedger;
pub use native_ledger::NativeLedger;
pub use share_ledger::ShareLedger;
pub use transactional::Transactional;
