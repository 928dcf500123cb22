//! Native/token exchange example.
//!
//! Demonstrates loading a pool configuration from TOML, seeding the pool,
//! trading in both directions, and withdrawing liquidity.  Pool events are
//! printed by a `tracing` fmt subscriber.
//!
//! # Run
//!
//! ```bash
//! cargo run --example exchange
//! ```

use native_amm::config::PoolConfig;
use native_amm::domain::{Address, Amount, Shares};
use native_amm::ledger::{MemoryAssetLedger, MemoryNativeLedger, MemoryShareLedger};
use native_amm::pool::Exchange;
use native_amm::traits::{AssetLedger, NativeLedger};

const CONFIG: &str = r#"
token   = "0x0101010101010101010101010101010101010101010101010101010101010101"
account = "0x0909090909090909090909090909090909090909090909090909090909090909"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== Native/Token Exchange (x · y = k, 1% fee) ===\n");

    // ── 1. Load the configuration ───────────────────────────────────────
    let config = PoolConfig::from_toml_str(CONFIG)?;
    println!("Token:        {}", config.token());
    println!("Pool account: {}", config.account());

    // ── 2. Fund participants ────────────────────────────────────────────
    let provider = Address::from_bytes([2u8; 32]);
    let trader = Address::from_bytes([3u8; 32]);

    let mut asset = MemoryAssetLedger::new();
    asset.issue(&provider, Amount::new(5_000_000))?;
    asset.issue(&trader, Amount::new(100_000))?;
    asset.approve(&provider, &config.account(), Amount::new(5_000_000));
    asset.approve(&trader, &config.account(), Amount::new(100_000));

    let mut native = MemoryNativeLedger::new();
    native.fund(&provider, Amount::new(1_000_000))?;
    native.fund(&trader, Amount::new(50_000))?;

    let mut pool = Exchange::new(config, asset, MemoryShareLedger::new(), native)?;

    // ── 3. Seed the pool: 1 native = 4 tokens ───────────────────────────
    let seed = pool.add_liquidity(&provider, Amount::new(1_000_000), Amount::new(4_000_000))?;
    println!("\n{seed}");
    println!("State: {}", pool.state());
    let (num, den) = pool.spot_price()?;
    println!("Spot price: {num}/{den} native per token");

    // ── 4. Buy tokens with native value ─────────────────────────────────
    let quote = pool.get_token_amount(Amount::new(10_000))?;
    println!("\nQuote for 10000 native: {quote} tokens");
    let buy = pool.native_to_token_swap(&trader, Amount::new(10_000), Amount::new(39_000))?;
    println!("{buy}");

    // ── 5. Sell the tokens back ─────────────────────────────────────────
    let sell = pool.token_to_native_swap(&trader, buy.amount_out(), Amount::ZERO)?;
    println!("{sell}");
    println!(
        "Round trip: 10000 native in, {} native back",
        sell.amount_out()
    );

    // ── 6. A slippage limit that cannot be met ──────────────────────────
    match pool.native_to_token_swap(&trader, Amount::new(1_000), Amount::new(1_000_000)) {
        Ok(receipt) => println!("unexpected fill: {receipt}"),
        Err(err) => println!("\nRejected as expected: {err} ({:?})", err.kind()),
    }

    // ── 7. Withdraw half the liquidity ──────────────────────────────────
    let half = Shares::new(pool.shares_of(&provider).get() / 2);
    let withdrawal = pool.remove_liquidity(&provider, half)?;
    println!("\n{withdrawal}");
    println!("State: {}", pool.state());

    println!(
        "\nTrader now holds {} native and {} tokens",
        pool.native_ledger().balance_of(&trader),
        pool.asset_ledger().balance_of(&trader)
    );

    Ok(())
}
