//! Point-in-time view of the pool's reserves.

use core::fmt;

use super::{Amount, Shares};
use crate::math::{wide_mul, U384};

/// Reserves and share supply read from the ledgers at one instant.
///
/// Nothing here is stored by the pool; every field is recomputed from
/// ledger balances when the snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    native_reserve: Amount,
    token_reserve: Amount,
    total_shares: Shares,
}

impl PoolState {
    /// Creates a snapshot from raw readings.
    pub const fn new(native_reserve: Amount, token_reserve: Amount, total_shares: Shares) -> Self {
        Self {
            native_reserve,
            token_reserve,
            total_shares,
        }
    }

    /// Native value held by the pool account.
    pub const fn native_reserve(&self) -> Amount {
        self.native_reserve
    }

    /// Traded tokens held by the pool account.
    pub const fn token_reserve(&self) -> Amount {
        self.token_reserve
    }

    /// Outstanding pool-share supply.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` while no shares have been minted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Constant product `native_reserve × token_reserve`.
    ///
    /// Computed in [`U384`], so it is exact for any reserves.
    #[must_use]
    pub fn product(&self) -> U384 {
        wide_mul(self.native_reserve.get(), self.token_reserve.get())
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool(native={}, token={}, shares={})",
            self.native_reserve, self.token_reserve, self.total_shares
        )
    }
}
