//! Raw asset amount with checked arithmetic.

use core::fmt;

/// An amount of the native asset or of the traded token, in the smallest
/// indivisible unit of its ledger.
///
/// `Amount` carries no decimals and no asset identity; the pool always
/// knows which ledger an amount belongs to from context.  All `u128`
/// values are valid amounts.
///
/// Arithmetic methods are checked and return `None` instead of wrapping
/// or panicking.
///
/// # Examples
///
/// ```
/// use native_amm::domain::Amount;
///
/// let reserve = Amount::new(1_000);
/// let deposit = Amount::new(250);
/// assert_eq!(reserve.checked_add(&deposit), Some(Amount::new(1_250)));
/// assert_eq!(deposit.checked_sub(&reserve), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// No value.
    pub const ZERO: Self = Self(0);

    /// Largest balance any ledger can record.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a count of raw ledger units.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw ledger units.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` for an empty amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Sum, or `None` past [`Amount::MAX`].
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Difference, or `None` if `other` is larger.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
