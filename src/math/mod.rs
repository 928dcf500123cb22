//! Arithmetic for pricing and share accounting.
//!
//! - [`get_amount_of_tokens`] is the pricing engine: a pure function of
//!   the input amount and the two reserves.
//! - [`mul_div`] evaluates `a × b / d` with a wide intermediate so ratio
//!   computations never overflow before the final division.
//! - [`CheckedArithmetic`] turns checked domain arithmetic into
//!   [`AmmError`](crate::error::AmmError) results.
//!
//! All arithmetic is integer arithmetic; nothing in the crate uses
//! floating point.

mod checked;
mod pricing;
mod wide;

pub use checked::CheckedArithmetic;
pub use pricing::{fee_retained, get_amount_of_tokens, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use wide::{div_wide, mul_div, narrow, wide_mul, U384};
