//! In-memory ledgers implementing the collaborator traits.
//!
//! These are reference implementations for simulation, demos and tests.
//! A deployment plugs the exchange into the host's real ledgers through the
//! same [`traits`](crate::traits); nothing in the pool depends on these
//! types.

mod asset;
mod book;
mod native;
mod share;

pub use asset::MemoryAssetLedger;
pub use native::MemoryNativeLedger;
pub use share::MemoryShareLedger;
