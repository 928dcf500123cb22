//! Chain-agnostic account address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmmError;

/// An account or asset identity on the host ledger.
///
/// Wraps a fixed-size `[u8; 32]`.  The all-zero address is the null
/// identity: it is never a valid traded-asset identity or pool account.
///
/// Addresses render and parse as 64 lowercase hex characters, which is
/// also their serde representation.
///
/// # Examples
///
/// ```
/// use native_amm::domain::Address;
///
/// let addr = Address::from_bytes([7u8; 32]);
/// let parsed: Address = addr.to_string().parse().expect("hex round trip");
/// assert_eq!(parsed, addr);
/// assert!(Address::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the null (all-zero) address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Parses a 64-character hex string, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the input is not valid
    /// hex or does not decode to exactly 32 bytes.
    pub fn from_hex(input: &str) -> Result<Self, AmmError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AmmError::InvalidConfiguration("address must be 32 bytes of hex"))?;
        Ok(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection() {
        assert!(Address::zero().is_zero());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!Address::from_bytes(bytes).is_zero());
    }

    #[test]
    fn display_is_lower_hex() {
        let addr = Address::from_bytes([0xab; 32]);
        assert_eq!(addr.to_string(), "ab".repeat(32));
    }

    #[test]
    fn parses_with_prefix() {
        let text = format!("0x{}", "01".repeat(32));
        let Ok(addr) = Address::from_hex(&text) else {
            panic!("expected valid hex");
        };
        assert_eq!(addr, Address::from_bytes([1u8; 32]));
    }

    #[test]
    fn rejects_short_input() {
        let Err(err) = Address::from_hex("abcd") else {
            panic!("expected rejection");
        };
        assert_eq!(
            err,
            AmmError::InvalidConfiguration("address must be 32 bytes of hex")
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert!("zz".repeat(32).parse::<Address>().is_err());
    }
}
