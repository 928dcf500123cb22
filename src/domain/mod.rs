//! Value types used throughout the exchange.
//!
//! Amounts, shares, and addresses are newtypes so a native amount, a token
//! amount, and a share quantity cannot be confused with a bare integer at
//! an API boundary.  Receipts and [`PoolState`] describe the observable
//! outcome of pool operations.

mod address;
mod amount;
mod pool_state;
mod receipt;
mod rounding;
mod shares;

pub use address::Address;
pub use amount::Amount;
pub use pool_state::PoolState;
pub use receipt::{DepositReceipt, SwapDirection, SwapReceipt, Withdrawal};
pub use rounding::Rounding;
pub use shares::Shares;
