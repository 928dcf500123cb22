//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint of an exchange: which token
//! it trades and which ledger account holds its reserves.  It can be built
//! in code or loaded from TOML, and is validated either way before a pool
//! is constructed from it.

mod pool_config;

pub use pool_config::PoolConfig;
