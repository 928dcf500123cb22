//! # Native AMM
//!
//! A constant-product liquidity pool pairing a host chain's native value
//! with a single fungible token, in the style of Uniswap V1.
//!
//! Liquidity providers deposit both assets and receive pool shares that
//! entitle them to a pro-rata slice of the reserves.  Traders swap in
//! either direction at a price set by `native × token = k`, paying a 1%
//! fee that stays in the pool.
//!
//! Reserves are never stored: they are the balances the pool account holds
//! on the ledgers, read fresh on every call.  The ledgers themselves are
//! external collaborators behind the capability traits in [`traits`], with
//! in-memory implementations in [`ledger`].
//!
//! # Quick Start
//!
//! ```rust
//! use native_amm::prelude::*;
//!
//! let token = Address::from_bytes([1u8; 32]);
//! let pool_account = Address::from_bytes([9u8; 32]);
//! let lp = Address::from_bytes([2u8; 32]);
//! let trader = Address::from_bytes([3u8; 32]);
//!
//! // 1. Fund participants on the in-memory ledgers
//! let mut asset = MemoryAssetLedger::new();
//! asset.issue(&lp, Amount::new(1_000)).expect("issue");
//! asset.approve(&lp, &pool_account, Amount::new(1_000));
//! let mut native = MemoryNativeLedger::new();
//! native.fund(&lp, Amount::new(1_000)).expect("fund");
//! native.fund(&trader, Amount::new(100)).expect("fund");
//!
//! // 2. Create the pool
//! let config = PoolConfig::new(token, pool_account).expect("valid config");
//! let mut pool = Exchange::new(config, asset, MemoryShareLedger::new(), native)
//!     .expect("pool created");
//!
//! // 3. Seed it: the first provider sets the price
//! let seed = pool
//!     .add_liquidity(&lp, Amount::new(1_000), Amount::new(1_000))
//!     .expect("seeded");
//! assert_eq!(seed.shares_minted(), Shares::new(1_000));
//!
//! // 4. Sell 100 native units for tokens
//! let swap = pool
//!     .native_to_token_swap(&trader, Amount::new(100), Amount::new(89))
//!     .expect("swap succeeded");
//! assert_eq!(swap.amount_out(), Amount::new(90));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  PoolConfig + ledgers
//! └──────┬───────┘
//!        │ Exchange::new
//!        ▼
//! ┌──────────────┐
//! │   Exchange   │  deposits, withdrawals, swaps; checkpoint/rollback
//! └──────┬───────┘
//!        │ AssetLedger + ShareLedger + NativeLedger
//!        ▼
//! ┌──────────────┐
//! │   Ledgers    │  host ledgers, or the in-memory ones in `ledger`
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Address`](domain::Address), receipts |
//! | [`math`]   | Pricing curve, fee constants, wide `mul_div` |
//! | [`traits`] | Ledger capabilities: [`AssetLedger`](traits::AssetLedger), [`ShareLedger`](traits::ShareLedger), [`NativeLedger`](traits::NativeLedger) |
//! | [`ledger`] | In-memory ledger implementations |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), validated, loadable from TOML |
//! | [`pool`]   | [`Exchange`](pool::Exchange) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! Operations emit [`tracing`] events; the crate never installs a
//! subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
