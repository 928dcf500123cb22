//! The exchange itself.
//!
//! [`Exchange`] combines reserve accounting (reads derived from ledger
//! balances) with the four pool operations: deposit, withdrawal and the
//! two swap directions.  It is generic over the ledger capabilities in
//! [`traits`](crate::traits), so the same pool runs against the in-memory
//! [`ledger`](crate::ledger) types or a host's real ledgers.

mod exchange;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use exchange::Exchange;
