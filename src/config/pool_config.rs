//! Construction parameters of an exchange.

use serde::{Deserialize, Serialize};

use crate::domain::Address;
use crate::error::AmmError;

/// Immutable parameters of an [`Exchange`](crate::pool::Exchange).
///
/// - `token`: identity of the traded token.  Fixed for the lifetime of
///   the pool.
/// - `account`: the pool's own account on the ledgers.  Reserves are the
///   balances held by this account.
///
/// The fee is not configurable; see [`FEE_NUMERATOR`](crate::math::FEE_NUMERATOR).
///
/// # Validation
///
/// - `token` must not be the null address.
/// - `account` must not be the null address.
/// - `account` must differ from `token`.
///
/// # TOML
///
/// ```toml
/// token   = "0101010101010101010101010101010101010101010101010101010101010101"
/// account = "0909090909090909090909090909090909090909090909090909090909090909"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    token: Address,
    account: Address,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any rule in the type
    /// documentation is violated.
    pub fn new(token: Address, account: Address) -> Result<Self, AmmError> {
        let config = Self { token, account };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document is
    /// malformed or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(source).map_err(|err| {
            tracing::warn!(error = %err, "rejected pool configuration");
            AmmError::InvalidConfiguration("malformed pool configuration")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on the first violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.token.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "traded asset identity must be non-zero",
            ));
        }
        if self.account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must be non-zero",
            ));
        }
        if self.account == self.token {
            return Err(AmmError::InvalidConfiguration(
                "pool account must differ from the traded asset",
            ));
        }
        Ok(())
    }

    /// Traded-token identity.
    #[must_use]
    pub const fn token(&self) -> Address {
        self.token
    }

    /// The pool's own ledger account.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }
}
