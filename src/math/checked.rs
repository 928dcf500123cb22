//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Shares`] into [`AmmError`]-returning operations so
//! pool code can propagate them with `?`.
//!
//! # Examples
//!
//! ```
//! use native_amm::domain::Amount;
//! use native_amm::math::CheckedArithmetic;
//!
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

use super::mul_div;

/// Fallible arithmetic for domain wrapper types.
///
/// No method panics or saturates; every failure is an `Err` with the
/// variant naming the failure.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the difference would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Scales `self` by `numerator / denominator`, rounding down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the result is not representable.
    fn scale_floor(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn scale_floor(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator, Rounding::Down).map(Amount::new)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn scale_floor(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator, Rounding::Down).map(Shares::new)
    }
}
