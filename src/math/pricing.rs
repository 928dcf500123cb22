//! Constant-product pricing with a fixed protocol fee.
//!
//! # Formula
//!
//! ```text
//! effective_input = input × 99
//! numerator       = effective_input × output_reserve
//! denominator     = input_reserve × 100 + effective_input
//! output          = ⌊numerator / denominator⌋
//! ```
//!
//! The fee factor stays in the numerator and denominator instead of being
//! applied to `input` up front, so the only rounding step is the final
//! floor.  The withheld 1% of the input stays in the pool and raises
//! `input_reserve × output_reserve` on every trade.

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

use super::wide::{div_wide, U384};

/// Share of the input that reaches the pricing curve, over [`FEE_DENOMINATOR`].
pub const FEE_NUMERATOR: u128 = 99;

/// Scale of the fee fraction.
pub const FEE_DENOMINATOR: u128 = 100;

/// Output obtained for selling `input_amount` into a pool with the given
/// reserves.
///
/// Pure function: reads no pool state.  A zero `input_amount` prices to
/// zero.  For any positive input the result is strictly below
/// `output_reserve`.
///
/// # Errors
///
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result cannot be represented (never
///   happens for the documented inputs, kept for completeness of the
///   checked path).
///
/// # Examples
///
/// ```
/// use native_amm::domain::Amount;
/// use native_amm::math::get_amount_of_tokens;
///
/// let out = get_amount_of_tokens(Amount::new(100), Amount::new(1_000), Amount::new(1_000));
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn get_amount_of_tokens(
    input_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount, AmmError> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(AmmError::InvalidReserve("reserves must be positive"));
    }

    let effective_input = U384::from(input_amount.get()) * U384::from(FEE_NUMERATOR);
    let numerator = effective_input * U384::from(output_reserve.get());
    let denominator = U384::from(input_reserve.get()) * U384::from(FEE_DENOMINATOR) + effective_input;

    div_wide(numerator, denominator, Rounding::Down, "swap output overflow").map(Amount::new)
}

/// Part of `amount_in` withheld from pricing, in input units.
///
/// Equal to `amount_in − ⌊amount_in × 99 / 100⌋`, i.e. the 1% fee rounded
/// up to the next whole unit.
#[must_use]
pub fn fee_retained(amount_in: Amount) -> Amount {
    let priced = amount_in.get() / FEE_DENOMINATOR * FEE_NUMERATOR
        + amount_in.get() % FEE_DENOMINATOR * FEE_NUMERATOR / FEE_DENOMINATOR;
    Amount::new(amount_in.get() - priced)
}
