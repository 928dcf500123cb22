//! Outcomes of pool operations.
//!
//! Each successful [`Exchange`](crate::pool::Exchange) mutation returns a
//! receipt describing exactly what moved between the caller and the pool.

use core::fmt;

use super::{Address, Amount, Shares};

/// Result of a liquidity deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    native_in: Amount,
    token_in: Amount,
    shares_minted: Shares,
}

impl DepositReceipt {
    /// Creates a deposit receipt.
    pub const fn new(native_in: Amount, token_in: Amount, shares_minted: Shares) -> Self {
        Self {
            native_in,
            token_in,
            shares_minted,
        }
    }

    /// Native value contributed by the depositor.
    pub const fn native_in(&self) -> Amount {
        self.native_in
    }

    /// Traded tokens pulled from the depositor.
    ///
    /// On a seeded pool this is the required contribution, which may be
    /// less than the maximum the caller offered.
    pub const fn token_in(&self) -> Amount {
        self.token_in
    }

    /// Pool shares minted to the depositor.
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(native={}, token={}, shares={})",
            self.native_in, self.token_in, self.shares_minted
        )
    }
}

/// Result of a liquidity withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    shares_burned: Shares,
    native_out: Amount,
    token_out: Amount,
}

impl Withdrawal {
    /// Creates a withdrawal receipt.
    pub const fn new(shares_burned: Shares, native_out: Amount, token_out: Amount) -> Self {
        Self {
            shares_burned,
            native_out,
            token_out,
        }
    }

    /// Shares burned from the caller.
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Native value paid to the caller.
    pub const fn native_out(&self) -> Amount {
        self.native_out
    }

    /// Traded tokens paid to the caller.
    pub const fn token_out(&self) -> Amount {
        self.token_out
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(shares={}, native={}, token={})",
            self.shares_burned, self.native_out, self.token_out
        )
    }
}

/// Which asset a swap sells to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Native value in, traded token out.
    NativeToToken,
    /// Traded token in, native value out.
    TokenToNative,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeToToken => write!(f, "native->token"),
            Self::TokenToNative => write!(f, "token->native"),
        }
    }
}

/// Result of a swap.
///
/// `fee` is the part of `amount_in` withheld from pricing and retained in
/// the pool, expressed in units of the input asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    direction: SwapDirection,
    recipient: Address,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    /// Creates a swap receipt.
    pub const fn new(
        direction: SwapDirection,
        recipient: Address,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            direction,
            recipient,
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Account that received the output.
    #[must_use]
    pub const fn recipient(&self) -> Address {
        self.recipient
    }

    /// Input sold to the pool.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output paid by the pool.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_accessors_and_display() {
        let r = DepositReceipt::new(Amount::new(500), Amount::new(200), Shares::new(500));
        assert_eq!(r.native_in(), Amount::new(500));
        assert_eq!(r.token_in(), Amount::new(200));
        assert_eq!(r.shares_minted(), Shares::new(500));
        assert_eq!(r.to_string(), "Deposit(native=500, token=200, shares=500)");
    }

    #[test]
    fn withdrawal_display() {
        let w = Withdrawal::new(Shares::new(10), Amount::new(10), Amount::new(4));
        assert_eq!(w.to_string(), "Withdrawal(shares=10, native=10, token=4)");
    }

    #[test]
    fn swap_display_includes_direction() {
        let s = SwapReceipt::new(
            SwapDirection::TokenToNative,
            Address::from_bytes([3u8; 32]),
            Amount::new(100),
            Amount::new(90),
            Amount::new(1),
        );
        assert_eq!(s.direction(), SwapDirection::TokenToNative);
        assert_eq!(s.recipient(), Address::from_bytes([3u8; 32]));
        assert_eq!(s.to_string(), "Swap(token->native, in=100, out=90, fee=1)");
    }
}
