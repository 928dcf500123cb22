//! Property-based tests using `proptest` for exchange invariants.
//!
//! 1. **Pricing bounds**: output is strictly below the output reserve and
//!    non-decreasing in the input.
//! 2. **Product growth**: `native × token` never decreases across swaps.
//! 3. **Proportional deposit**: the token contribution and the mint are
//!    the floors of the exact ratios.
//! 4. **Withdrawal floors**: payouts never exceed the exact share.
//! 5. **Swap round trip**: native → token → native returns at most the
//!    input.
//! 6. **Liquidity round trip**: withdrawing freshly minted shares returns
//!    at most the deposit, within one unit per asset while shares still
//!    track the native reserve 1:1.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Shares};
use crate::ledger::{MemoryAssetLedger, MemoryNativeLedger, MemoryShareLedger};
use crate::math::get_amount_of_tokens;
use crate::pool::Exchange;

type MemoryExchange = Exchange<MemoryAssetLedger, MemoryShareLedger, MemoryNativeLedger>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const WALLET: u128 = 1_000_000_000_000;

fn pool_account() -> Address {
    Address::from_bytes([9u8; 32])
}

fn provider() -> Address {
    Address::from_bytes([2u8; 32])
}

fn trader() -> Address {
    Address::from_bytes([3u8; 32])
}

/// A pool seeded by `provider()` with the given reserves; `trader()` holds
/// a full, approved wallet of both assets.
fn make_seeded(native: u128, tokens: u128) -> MemoryExchange {
    let mut asset = MemoryAssetLedger::new();
    let mut ledger = MemoryNativeLedger::new();
    for who in [provider(), trader()] {
        let Ok(()) = asset.issue(&who, Amount::new(WALLET)) else {
            panic!("issue");
        };
        asset.approve(&who, &pool_account(), Amount::new(WALLET));
        let Ok(()) = ledger.fund(&who, Amount::new(WALLET)) else {
            panic!("fund");
        };
    }
    let Ok(cfg) = PoolConfig::new(Address::from_bytes([1u8; 32]), pool_account()) else {
        panic!("valid config");
    };
    let Ok(mut pool) = Exchange::new(cfg, asset, MemoryShareLedger::new(), ledger) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(&provider(), Amount::new(native), Amount::new(tokens)) else {
        panic!("seed");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade sizes from one unit up to a full reserve.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=10_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Pricing bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_below_reserve(
        input in 1u128..=u128::MAX / 2,
        rin in 1u128..=u128::MAX / 2,
        rout in 1u128..=u128::MAX / 2,
    ) {
        let Ok(out) = get_amount_of_tokens(Amount::new(input), Amount::new(rin), Amount::new(rout))
        else {
            panic!("positive reserves must price");
        };
        prop_assert!(out.get() < rout, "output {} reached reserve {}", out, rout);
    }

    #[test]
    fn prop_output_monotone_in_input(
        a in trade_strategy(),
        b in trade_strategy(),
        rin in reserve_strategy(),
        rout in reserve_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let Ok(lo) = get_amount_of_tokens(Amount::new(small), Amount::new(rin), Amount::new(rout))
        else {
            panic!("price small");
        };
        let Ok(hi) = get_amount_of_tokens(Amount::new(large), Amount::new(rin), Amount::new(rout))
        else {
            panic!("price large");
        };
        prop_assert!(lo <= hi, "larger input priced lower: {} > {}", lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Product growth
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_non_decreasing(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        trades in prop::collection::vec((any::<bool>(), trade_strategy()), 1..8),
    ) {
        let mut pool = make_seeded(rn, rt);
        let mut k = pool.state().product();
        for (sell_native, size) in trades {
            let result = if sell_native {
                pool.native_to_token_swap(&trader(), Amount::new(size), Amount::ZERO)
            } else {
                pool.token_to_native_swap(&trader(), Amount::new(size), Amount::ZERO)
            };
            let next = pool.state().product();
            if result.is_ok() {
                prop_assert!(next >= k, "product decreased: {:?} -> {:?}", k, next);
            } else {
                prop_assert_eq!(next, k);
            }
            k = next;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Proportional deposit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_deposit_floors(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        value in trade_strategy(),
    ) {
        let mut pool = make_seeded(rn, rt);
        let total = pool.total_shares().get();
        let Ok(receipt) = pool.add_liquidity(&trader(), Amount::new(value), Amount::new(WALLET))
        else {
            panic!("deposit with ample tokens must succeed");
        };
        prop_assert_eq!(receipt.token_in().get(), value * rt / rn);
        prop_assert_eq!(receipt.shares_minted().get(), total * value / rn);
        prop_assert_eq!(pool.native_reserve().get(), rn + value);
        prop_assert_eq!(pool.token_reserve().get(), rt + value * rt / rn);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Withdrawal floors
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdrawal_never_overpays(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        burn_bps in 1u128..=10_000u128,
        nudge in trade_strategy(),
    ) {
        let mut pool = make_seeded(rn, rt);
        let Ok(_) = pool.native_to_token_swap(&trader(), Amount::new(nudge), Amount::ZERO) else {
            return Ok(());
        };
        let native = pool.native_reserve().get();
        let tokens = pool.token_reserve().get();
        let total = pool.total_shares().get();
        let burn = (total * burn_bps / 10_000).max(1);

        let Ok(w) = pool.remove_liquidity(&provider(), Shares::new(burn)) else {
            panic!("provider holds every share");
        };
        prop_assert_eq!(w.native_out().get(), native * burn / total);
        prop_assert_eq!(w.token_out().get(), tokens * burn / total);
        prop_assert!(w.native_out().get() * total <= native * burn);
        prop_assert!(w.token_out().get() * total <= tokens * burn);
        prop_assert_eq!(pool.shares_of(&provider()).get(), total - burn);
        prop_assert_eq!(pool.total_shares().get(), total - burn);
        prop_assert_eq!(pool.native_reserve().get(), native - w.native_out().get());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Swap round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        value in trade_strategy(),
    ) {
        let mut pool = make_seeded(rn, rt);
        let Ok(bought) = pool.native_to_token_swap(&trader(), Amount::new(value), Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(sold) = pool.token_to_native_swap(&trader(), bought.amount_out(), Amount::ZERO)
        else {
            panic!("selling bought tokens back must succeed");
        };
        prop_assert!(
            sold.amount_out().get() <= value,
            "round-trip should lose value: final={} > original={}",
            sold.amount_out(), value
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Liquidity round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_then_withdraw_on_fresh_pool(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        value in trade_strategy(),
    ) {
        let mut pool = make_seeded(rn, rt);
        let Ok(d) = pool.add_liquidity(&trader(), Amount::new(value), Amount::new(WALLET)) else {
            panic!("deposit with ample tokens must succeed");
        };
        let Ok(w) = pool.remove_liquidity(&trader(), d.shares_minted()) else {
            panic!("withdrawing minted shares must succeed");
        };
        let pulled = d.token_in().get();
        prop_assert!(w.native_out().get() <= value);
        prop_assert!(w.token_out().get() <= pulled);
        let native_loss = value - w.native_out().get();
        let token_loss = pulled - w.token_out().get();
        prop_assert!(native_loss <= 1, "native loss {}", native_loss);
        prop_assert!(token_loss <= 1, "token loss {}", token_loss);
        prop_assert_eq!(pool.shares_of(&trader()), Shares::ZERO);
    }

    #[test]
    fn prop_deposit_then_withdraw_after_fees(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        nudge in trade_strategy(),
        value in trade_strategy(),
    ) {
        let mut pool = make_seeded(rn, rt);
        let Ok(_) = pool.native_to_token_swap(&trader(), Amount::new(nudge), Amount::ZERO) else {
            return Ok(());
        };
        let Ok(d) = pool.add_liquidity(&trader(), Amount::new(value), Amount::new(WALLET)) else {
            panic!("deposit with ample tokens must succeed");
        };
        if d.shares_minted().is_zero() {
            return Ok(());
        }
        let Ok(w) = pool.remove_liquidity(&trader(), d.shares_minted()) else {
            panic!("withdrawing minted shares must succeed");
        };
        prop_assert!(w.native_out().get() <= value);
        prop_assert!(w.token_out().get() <= d.token_in().get());
    }
}
