//! Checkpoint and rollback for ledger collaborators.
//!
//! A pool operation touches up to three ledgers.  The host serializes
//! operations and commits each one all-or-nothing; [`Transactional`] is
//! how the exchange reproduces that guarantee.  Before an operation
//! starts it takes a checkpoint of every ledger, and if any step fails it
//! rolls every ledger back to that checkpoint.
//!
//! # Contract
//!
//! After `rollback(checkpoint())` the ledger must be observably identical
//! to its state when the checkpoint was taken: balances, allowances and
//! supply included.

/// Ledger state that can be captured and restored.
pub trait Transactional {
    /// Opaque saved state.
    type Checkpoint;

    /// Captures the current state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restores the state captured by `checkpoint`.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}
