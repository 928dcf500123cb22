//! Native/token exchange (Uniswap V1 style).
//!
//! The pool pairs the host's native value with a single fungible token.
//! Reserves are never cached: every read queries the ledgers for the
//! balances held by the pool account.  Liquidity providers hold pool
//! shares on a separate [`ShareLedger`].
//!
//! # Swap Algorithm (input X → output Y)
//!
//! 1. `effective = amount_in × 99`
//! 2. `amount_out = effective × reserve_y / (reserve_x × 100 + effective)`
//! 3. the full `amount_in` joins `reserve_x`, so the 1% stays in the pool
//!
//! # Ordering
//!
//! Every operation finalizes its bookkeeping (share burns, mints) before
//! issuing an outbound transfer.  Inbound pulls may happen at any point
//! since they only ever increase pool assets.
//!
//! # Atomicity
//!
//! Each mutating operation checkpoints all three ledgers first and rolls
//! every one of them back if any step fails.

use tracing::{debug, info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    Address, Amount, DepositReceipt, PoolState, Shares, SwapDirection, SwapReceipt, Withdrawal,
};
use crate::error::AmmError;
use crate::math::{fee_retained, get_amount_of_tokens, CheckedArithmetic};
use crate::traits::{AssetLedger, NativeLedger, ShareLedger, Transactional};

/// A constant-product exchange between native value and one token.
///
/// Owns the three ledgers it settles against.  Hosts that keep ledgers
/// elsewhere implement the [`traits`](crate::traits) over handles to them.
///
/// # Example
///
/// ```rust
/// use native_amm::config::PoolConfig;
/// use native_amm::domain::{Address, Amount};
/// use native_amm::ledger::{MemoryAssetLedger, MemoryNativeLedger, MemoryShareLedger};
/// use native_amm::pool::Exchange;
///
/// let token = Address::from_bytes([1u8; 32]);
/// let pool_account = Address::from_bytes([9u8; 32]);
/// let alice = Address::from_bytes([2u8; 32]);
///
/// let mut asset = MemoryAssetLedger::new();
/// asset.issue(&alice, Amount::new(1_000)).expect("issue");
/// asset.approve(&alice, &pool_account, Amount::new(1_000));
/// let mut native = MemoryNativeLedger::new();
/// native.fund(&alice, Amount::new(2_000)).expect("fund");
///
/// let cfg = PoolConfig::new(token, pool_account).expect("valid config");
/// let mut pool = Exchange::new(cfg, asset, MemoryShareLedger::new(), native).expect("pool");
///
/// pool.add_liquidity(&alice, Amount::new(1_000), Amount::new(1_000)).expect("seed");
/// let receipt = pool
///     .native_to_token_swap(&alice, Amount::new(100), Amount::new(89))
///     .expect("swap");
/// assert_eq!(receipt.amount_out(), Amount::new(90));
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<A, S, N> {
    config: PoolConfig,
    asset: A,
    shares: S,
    native: N,
}

impl<A, S, N> Exchange<A, S, N>
where
    A: AssetLedger,
    S: ShareLedger,
    N: NativeLedger,
{
    /// Creates a pool over the given ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(config: PoolConfig, asset: A, shares: S, native: N) -> Result<Self, AmmError> {
        config.validate()?;
        info!(
            token = %config.token(),
            account = %config.account(),
            "exchange created"
        );
        Ok(Self {
            config,
            asset,
            shares,
            native,
        })
    }

    /// The pool's configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Identity of the traded token.
    #[must_use]
    pub const fn token(&self) -> Address {
        self.config.token()
    }

    /// The pool's own ledger account.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.config.account()
    }

    /// Read access to the token ledger.
    #[must_use]
    pub const fn asset_ledger(&self) -> &A {
        &self.asset
    }

    /// Mutable access to the token ledger, for issuance and approvals.
    pub fn asset_ledger_mut(&mut self) -> &mut A {
        &mut self.asset
    }

    /// Read access to the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &S {
        &self.shares
    }

    /// Mutable access to the share ledger, for secondary share transfers.
    pub fn share_ledger_mut(&mut self) -> &mut S {
        &mut self.shares
    }

    /// Read access to the native ledger.
    #[must_use]
    pub const fn native_ledger(&self) -> &N {
        &self.native
    }

    /// Mutable access to the native ledger.
    pub fn native_ledger_mut(&mut self) -> &mut N {
        &mut self.native
    }

    // -- reserve accounting -------------------------------------------------

    /// Token balance currently held by the pool.
    #[must_use]
    pub fn token_reserve(&self) -> Amount {
        self.asset.balance_of(&self.config.account())
    }

    /// Native balance currently held by the pool.
    #[must_use]
    pub fn native_reserve(&self) -> Amount {
        self.native.balance_of(&self.config.account())
    }

    /// Outstanding pool shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.shares.total_supply()
    }

    /// Pool shares held by `account`.
    #[must_use]
    pub fn shares_of(&self, account: &Address) -> Shares {
        self.shares.balance_of(account)
    }

    /// Snapshot of reserves and share supply.
    #[must_use]
    pub fn state(&self) -> PoolState {
        PoolState::new(self.native_reserve(), self.token_reserve(), self.total_shares())
    }

    // -- quotes --------------------------------------------------------------

    /// Tokens a swap of `native_sold` would yield at current reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserve`] if the pool is not seeded.
    pub fn get_token_amount(&self, native_sold: Amount) -> Result<Amount, AmmError> {
        get_amount_of_tokens(native_sold, self.native_reserve(), self.token_reserve())
    }

    /// Native value a swap of `tokens_sold` would yield at current reserves.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserve`] if the pool is not seeded.
    pub fn get_native_amount(&self, tokens_sold: Amount) -> Result<Amount, AmmError> {
        get_amount_of_tokens(tokens_sold, self.token_reserve(), self.native_reserve())
    }

    /// Marginal price as an unreduced `(native_reserve, token_reserve)`
    /// ratio: native units per token unit.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidReserve`] if either reserve is zero.
    pub fn spot_price(&self) -> Result<(Amount, Amount), AmmError> {
        let native = self.native_reserve();
        let token = self.token_reserve();
        if native.is_zero() || token.is_zero() {
            return Err(AmmError::InvalidReserve("pool has no reserves"));
        }
        Ok((native, token))
    }

    // -- pool operations -----------------------------------------------------

    /// Deposits `value` native units plus a matching token contribution.
    ///
    /// On an empty pool (no shares outstanding) the caller sets the price:
    /// exactly `max_tokens` are pulled and `value` shares are minted.
    /// Otherwise the token contribution is
    /// `⌊value × token_reserve / prior_native_reserve⌋` and the mint is
    /// `⌊total_shares × value / prior_native_reserve⌋`, where the prior
    /// reserve excludes `value`.
    ///
    /// Tokens are pulled with `transfer_from`, so the caller must have
    /// approved the pool account beforehand.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `value` is zero, or `max_tokens` is
    ///   zero on an empty pool.
    /// - [`AmmError::InsufficientInput`] if `max_tokens` is below the
    ///   required contribution.
    /// - [`AmmError::Ledger`] if a transfer or the mint fails.
    pub fn add_liquidity(
        &mut self,
        caller: &Address,
        value: Amount,
        max_tokens: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        self.atomically(|pool| pool.deposit(caller, value, max_tokens))
            .map_err(|err| {
                warn!(caller = %caller, value = %value, error = %err, "deposit rejected");
                err
            })
    }

    /// Burns `shares` from `caller` and pays out the proportional slice of
    /// both reserves, rounded down.
    ///
    /// Shares are burned before either payout is sent.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InvalidReserve`] if no shares are outstanding.
    /// - [`AmmError::Ledger`] if the burn exceeds the caller's balance or
    ///   a payout fails.
    pub fn remove_liquidity(
        &mut self,
        caller: &Address,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        self.atomically(|pool| pool.withdraw(caller, shares))
            .map_err(|err| {
                warn!(caller = %caller, shares = %shares, error = %err, "withdrawal rejected");
                err
            })
    }

    /// Sells `value` native units for tokens delivered to `caller`.
    ///
    /// Fails unless the output strictly exceeds `min_tokens`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `value` is zero.
    /// - [`AmmError::InvalidReserve`] if the pool is not seeded.
    /// - [`AmmError::InsufficientOutput`] if the output is not above
    ///   `min_tokens`.
    /// - [`AmmError::Ledger`] if a transfer fails.
    pub fn native_to_token_swap(
        &mut self,
        caller: &Address,
        value: Amount,
        min_tokens: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        self.native_to_token_transfer(caller, value, min_tokens, caller)
    }

    /// Like [`native_to_token_swap`](Self::native_to_token_swap), but the
    /// bought tokens go to `recipient`.
    ///
    /// # Errors
    ///
    /// Same as [`native_to_token_swap`](Self::native_to_token_swap).
    pub fn native_to_token_transfer(
        &mut self,
        caller: &Address,
        value: Amount,
        min_tokens: Amount,
        recipient: &Address,
    ) -> Result<SwapReceipt, AmmError> {
        self.atomically(|pool| pool.sell_native(caller, value, min_tokens, recipient))
            .map_err(|err| {
                warn!(caller = %caller, value = %value, error = %err, "native->token swap rejected");
                err
            })
    }

    /// Sells `tokens_in` tokens for native value delivered to `caller`.
    ///
    /// Fails if the output is below `min_native`.  Tokens are pulled with
    /// `transfer_from` before the native payout is sent.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `tokens_in` is zero.
    /// - [`AmmError::InvalidReserve`] if the pool is not seeded.
    /// - [`AmmError::InsufficientOutput`] if the output is below
    ///   `min_native`.
    /// - [`AmmError::Ledger`] if a transfer fails.
    pub fn token_to_native_swap(
        &mut self,
        caller: &Address,
        tokens_in: Amount,
        min_native: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        self.atomically(|pool| pool.sell_tokens(caller, tokens_in, min_native))
            .map_err(|err| {
                warn!(caller = %caller, tokens_in = %tokens_in, error = %err, "token->native swap rejected");
                err
            })
    }

    // -- internals -----------------------------------------------------------

    /// Runs `op` against a checkpoint of all three ledgers, restoring
    /// every one of them if it fails.
    fn atomically<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, AmmError>,
    ) -> Result<T, AmmError> {
        let asset = self.asset.checkpoint();
        let shares = self.shares.checkpoint();
        let native = self.native.checkpoint();

        let result = op(self);
        if result.is_err() {
            self.asset.rollback(asset);
            self.shares.rollback(shares);
            self.native.rollback(native);
            debug!("ledgers rolled back");
        }
        result
    }

    fn deposit(
        &mut self,
        caller: &Address,
        value: Amount,
        max_tokens: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        if value.is_zero() {
            return Err(AmmError::InvalidAmount("attached native value must be positive"));
        }
        let account = self.config.account();
        let total = self.shares.total_supply();

        if total.is_zero() {
            if max_tokens.is_zero() {
                return Err(AmmError::InvalidAmount(
                    "initial deposit requires a token amount",
                ));
            }
            self.native.transfer(caller, &account, value)?;
            self.asset.transfer_from(&account, caller, &account, max_tokens)?;
            let minted = Shares::new(value.get());
            self.shares.mint(caller, minted)?;
            info!(
                caller = %caller,
                native_in = %value,
                token_in = %max_tokens,
                shares = %minted,
                "pool seeded"
            );
            return Ok(DepositReceipt::new(value, max_tokens, minted));
        }

        self.native.transfer(caller, &account, value)?;
        let prior_native = self.native_reserve().safe_sub(&value)?;
        if prior_native.is_zero() {
            return Err(AmmError::InvalidReserve("native reserve is empty"));
        }
        let token_reserve = self.token_reserve();
        let required = value.scale_floor(token_reserve.get(), prior_native.get())?;
        let minted = total.scale_floor(value.get(), prior_native.get())?;
        debug!(
            prior_native = %prior_native,
            token_reserve = %token_reserve,
            required = %required,
            minted = %minted,
            "proportional deposit computed"
        );

        if max_tokens < required {
            return Err(AmmError::InsufficientInput {
                required,
                offered: max_tokens,
            });
        }
        if minted.is_zero() {
            warn!(caller = %caller, value = %value, "deposit mints no shares");
        }

        self.asset.transfer_from(&account, caller, &account, required)?;
        self.shares.mint(caller, minted)?;
        info!(
            caller = %caller,
            native_in = %value,
            token_in = %required,
            shares = %minted,
            "liquidity added"
        );
        Ok(DepositReceipt::new(value, required, minted))
    }

    fn withdraw(&mut self, caller: &Address, shares: Shares) -> Result<Withdrawal, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("share amount must be positive"));
        }
        let total = self.shares.total_supply();
        if total.is_zero() {
            return Err(AmmError::InvalidReserve("pool has no liquidity"));
        }
        let native_reserve = self.native_reserve();
        let token_reserve = self.token_reserve();

        self.shares.burn(caller, shares)?;

        // shares <= total after a successful burn, so neither quotient can overflow
        let native_out = native_reserve.scale_floor(shares.get(), total.get())?;
        let token_out = token_reserve.scale_floor(shares.get(), total.get())?;
        debug!(
            total_shares = %total,
            native_out = %native_out,
            token_out = %token_out,
            "withdrawal computed"
        );
        if native_out.is_zero() && token_out.is_zero() {
            warn!(caller = %caller, shares = %shares, "withdrawal pays nothing");
        }

        let account = self.config.account();
        self.native.transfer(&account, caller, native_out)?;
        self.asset.transfer(&account, caller, token_out)?;
        info!(
            caller = %caller,
            shares = %shares,
            native_out = %native_out,
            token_out = %token_out,
            "liquidity removed"
        );
        Ok(Withdrawal::new(shares, native_out, token_out))
    }

    fn sell_native(
        &mut self,
        caller: &Address,
        value: Amount,
        min_tokens: Amount,
        recipient: &Address,
    ) -> Result<SwapReceipt, AmmError> {
        if value.is_zero() {
            return Err(AmmError::InvalidAmount("attached native value must be positive"));
        }
        let account = self.config.account();
        self.native.transfer(caller, &account, value)?;
        let input_reserve = self.native_reserve().safe_sub(&value)?;
        let output_reserve = self.token_reserve();

        let token_out = get_amount_of_tokens(value, input_reserve, output_reserve)?;
        debug!(
            input_reserve = %input_reserve,
            output_reserve = %output_reserve,
            token_out = %token_out,
            "native->token priced"
        );
        if token_out <= min_tokens {
            return Err(AmmError::InsufficientOutput {
                actual: token_out,
                minimum: min_tokens,
            });
        }

        self.asset.transfer(&account, recipient, token_out)?;
        let fee = fee_retained(value);
        info!(
            caller = %caller,
            recipient = %recipient,
            native_in = %value,
            token_out = %token_out,
            fee = %fee,
            "native->token swap"
        );
        Ok(SwapReceipt::new(
            SwapDirection::NativeToToken,
            *recipient,
            value,
            token_out,
            fee,
        ))
    }

    fn sell_tokens(
        &mut self,
        caller: &Address,
        tokens_in: Amount,
        min_native: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        if tokens_in.is_zero() {
            return Err(AmmError::InvalidAmount("token input must be positive"));
        }
        let input_reserve = self.token_reserve();
        let output_reserve = self.native_reserve();

        let native_out = get_amount_of_tokens(tokens_in, input_reserve, output_reserve)?;
        debug!(
            input_reserve = %input_reserve,
            output_reserve = %output_reserve,
            native_out = %native_out,
            "token->native priced"
        );
        if native_out < min_native {
            return Err(AmmError::InsufficientOutput {
                actual: native_out,
                minimum: min_native,
            });
        }

        let account = self.config.account();
        self.asset.transfer_from(&account, caller, &account, tokens_in)?;
        self.native.transfer(&account, caller, native_out)?;
        let fee = fee_retained(tokens_in);
        info!(
            caller = %caller,
            tokens_in = %tokens_in,
            native_out = %native_out,
            fee = %fee,
            "token->native swap"
        );
        Ok(SwapReceipt::new(
            SwapDirection::TokenToNative,
            *caller,
            tokens_in,
            native_out,
            fee,
        ))
    }
}
