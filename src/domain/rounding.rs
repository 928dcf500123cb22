//! Explicit rounding direction for integer division.

/// Direction in which an inexact quotient is rounded.
///
/// Every ratio in the exchange is computed by integer division and must
/// name its rounding direction.  Pool operations always round in the
/// pool's favour, which for every formula in this crate is [`Rounding::Down`].
///
/// # Examples
///
/// ```
/// use native_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
