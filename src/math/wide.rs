//! Wide-integer helpers for exact ratio arithmetic.
//!
//! Reserves and amounts are `u128`, so products of two or three of them
//! need more than 128 bits.  Intermediates are evaluated in a 384-bit
//! unsigned integer and only the final quotient is narrowed back.

// construct_uint! expands to code that trips these lints.
#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use uint::construct_uint;

use crate::domain::Rounding;
use crate::error::AmmError;

construct_uint! {
    /// 384-bit unsigned integer used for intermediate products.
    pub struct U384(6);
}

/// Exact product of two `u128` values.
#[must_use]
pub fn wide_mul(a: u128, b: u128) -> U384 {
    U384::from(a) * U384::from(b)
}

/// Narrows a wide value to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the value does not fit.
pub fn narrow(value: U384, context: &'static str) -> Result<u128, AmmError> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Divides a wide numerator by a wide denominator with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn div_wide(
    numerator: U384,
    denominator: U384,
    rounding: Rounding,
    context: &'static str,
) -> Result<u128, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U384::one()
    } else {
        quotient
    };
    narrow(quotient, context)
}

/// Computes `a × b / d` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use native_amm::domain::Rounding;
/// use native_amm::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 3, 6, Rounding::Down), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128, AmmError> {
    div_wide(wide_mul(a, b), U384::from(d), rounding, "mul_div quotient overflow")
}
