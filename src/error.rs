//! Unified error types for the exchange.
//!
//! Every fallible pool operation returns [`AmmError`].  Each variant maps
//! onto exactly one [`ErrorKind`] so callers can branch on the failure
//! class without matching on every variant, while the `Display` output
//! carries the human-readable reason.
//!
//! Failures raised by the ledger collaborators are reported as
//! [`LedgerError`] and wrapped into [`AmmError::Ledger`].

use thiserror::Error;

use crate::domain::Amount;

/// Failure class of an [`AmmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Construction-time configuration was rejected.
    InvalidConfiguration,
    /// Pricing or withdrawal requested against an empty reserve.
    InvalidReserve,
    /// The caller offered less than the required contribution.
    InsufficientInput,
    /// The computed output is below the caller's stated minimum.
    InsufficientOutput,
    /// A non-positive amount was supplied where a positive one is required.
    InvalidAmount,
    /// A ledger transfer, transfer-from, or burn failed.
    LedgerFailure,
    /// Checked arithmetic overflowed, underflowed, or divided by zero.
    Arithmetic,
}

/// Error raised by a ledger collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Account balance is below the requested debit.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance of the debited account.
        have: u128,
        /// Amount the operation tried to debit.
        need: u128,
    },

    /// Allowance granted to the spender is below the requested amount.
    #[error("insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance {
        /// Allowance currently granted.
        have: u128,
        /// Amount the spender tried to move.
        need: u128,
    },

    /// Crediting the recipient would overflow its balance or the supply.
    #[error("ledger balance overflow")]
    Overflow,

    /// The recipient or the ledger refused the operation.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Errors returned by exchange operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// The pool configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A reserve required by the operation is zero.
    #[error("invalid reserve: {0}")]
    InvalidReserve(&'static str),

    /// The caller's offered token amount is below the required contribution.
    #[error("insufficient token amount: offered {offered}, required {required}")]
    InsufficientInput {
        /// Tokens the deposit requires at the current ratio.
        required: Amount,
        /// Tokens the caller was willing to supply.
        offered: Amount,
    },

    /// The computed output does not satisfy the caller's minimum.
    #[error("insufficient output amount: got {actual}, minimum {minimum}")]
    InsufficientOutput {
        /// Output the pool would pay.
        actual: Amount,
        /// Minimum the caller asked for.
        minimum: Amount,
    },

    /// An amount that must be positive was zero.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A ledger collaborator rejected a mutation.
    #[error("ledger failure: {0}")]
    Ledger(#[from] LedgerError),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns the failure class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::InvalidReserve(_) => ErrorKind::InvalidReserve,
            Self::InsufficientInput { .. } => ErrorKind::InsufficientInput,
            Self::InsufficientOutput { .. } => ErrorKind::InsufficientOutput,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::Ledger(_) => ErrorKind::LedgerFailure,
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero => ErrorKind::Arithmetic,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_one_to_one() {
        assert_eq!(
            AmmError::InvalidConfiguration("x").kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(AmmError::InvalidReserve("x").kind(), ErrorKind::InvalidReserve);
        assert_eq!(AmmError::InvalidAmount("x").kind(), ErrorKind::InvalidAmount);
        assert_eq!(
            AmmError::InsufficientInput {
                required: Amount::new(2),
                offered: Amount::new(1),
            }
            .kind(),
            ErrorKind::InsufficientInput
        );
        assert_eq!(
            AmmError::InsufficientOutput {
                actual: Amount::new(1),
                minimum: Amount::new(2),
            }
            .kind(),
            ErrorKind::InsufficientOutput
        );
        assert_eq!(AmmError::DivisionByZero.kind(), ErrorKind::Arithmetic);
        assert_eq!(AmmError::Overflow("x").kind(), ErrorKind::Arithmetic);
        assert_eq!(AmmError::Underflow("x").kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn ledger_error_converts() {
        let err: AmmError = LedgerError::InsufficientBalance { have: 1, need: 5 }.into();
        assert_eq!(err.kind(), ErrorKind::LedgerFailure);
        assert_eq!(
            err.to_string(),
            "ledger failure: insufficient balance: have 1, need 5"
        );
    }

    #[test]
    fn display_carries_reason() {
        let err = AmmError::InsufficientInput {
            required: Amount::new(40),
            offered: Amount::new(39),
        };
        assert_eq!(
            err.to_string(),
            "insufficient token amount: offered 39, required 40"
        );
    }
}
