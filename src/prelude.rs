//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use native_amm::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, DepositReceipt, PoolState, Rounding, Shares, SwapDirection, SwapReceipt,
    Withdrawal,
};

pub use crate::traits::{AssetLedger, NativeLedger, ShareLedger, Transactional};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, ErrorKind, LedgerError, Result};

pub use crate::ledger::{MemoryAssetLedger, MemoryNativeLedger, MemoryShareLedger};

pub use crate::pool::Exchange;
