use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{normalized_price, value_of},
    state::{CubeToken, CubeTokenParams},
};

/// Pool-wide ledger. Collateral held by the vault always equals
/// `pool_balance + accrued_fees` outside of an emergency withdrawal.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Pool {
    pub admin: Pubkey,
    pub collateral_mint: Pubkey,
    pub collateral_vault: Pubkey,
    pub guardian_set: Pubkey,
    /// Collateral owned by share holders, excluding uncollected protocol fees.
    pub pool_balance: u64,
    /// Sum over cube tokens of `total_supply * last_price`.
    pub total_equity: u128,
    pub accrued_fees: u64,
    /// 0 means unlimited.
    pub max_pool_balance: u64,
    /// Share of every deposit/withdraw fee that goes to `accrued_fees`.
    pub protocol_fee_bps: u16,
    pub num_cube_tokens: u32,
    pub finalized: bool,
    pub locked: bool,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
    pub authority_bump: u8,
}

/// Result of folding one token's fresh price into `total_equity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquityRefresh {
    pub price: u128,
    pub total_equity: u128,
    /// False when price updates are paused and the stored price was reused.
    pub refreshed: bool,
}

impl Pool {
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, ErrorCode::Reentrancy);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// One-way. Returns false if the pool was already finalized.
    pub fn mark_finalized(&mut self) -> bool {
        let changed = !self.finalized;
        self.finalized = true;
        changed
    }

    /// Takes the lock for an emergency sweep. Release with `unlock`.
    pub fn begin_emergency(&mut self) -> Result<()> {
        require!(!self.finalized, ErrorCode::Finalized);
        self.lock()
    }

    /// Fills a freshly created `CubeToken` and seeds its price at `1.0`.
    ///
    /// `pool`, `share_mint` and `bump` are left as the caller set them. Nothing
    /// is written unless the spot price is usable.
    pub fn register_token(
        &mut self,
        token: &mut CubeToken,
        params: &CubeTokenParams,
        spot_price: u64,
        now: i64,
    ) -> Result<()> {
        params.validate()?;
        require!(!token.added, ErrorCode::TokenAlreadyRegistered);
        require!(spot_price > 0, ErrorCode::InvalidPrice);

        let mut candidate = CubeToken {
            pool: token.pool,
            share_mint: token.share_mint,
            currency_key: params.currency_key,
            inverse: params.inverse,
            index: self.num_cube_tokens,
            added: true,
            deposit_paused: false,
            withdraw_paused: false,
            price_update_paused: false,
            fee_bps: params.fee_bps,
            max_pool_share_bps: params.max_pool_share_bps,
            initial_spot_price: spot_price,
            last_price: 0,
            last_updated: 0,
            total_supply: 0,
            bump: token.bump,
        };

        // Zero supply: total_equity is unchanged.
        let refresh = self.refresh_token_equity(&candidate, spot_price)?;
        let num_cube_tokens = self
            .num_cube_tokens
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        self.commit_refresh(&mut candidate, &refresh, now);
        *token = candidate;
        self.num_cube_tokens = num_cube_tokens;
        self.last_updated_at = now;
        Ok(())
    }

    /// Computes the token's current price and the aggregate equity it implies,
    /// without mutating anything.
    pub fn refresh_token_equity(&self, token: &CubeToken, spot_price: u64) -> Result<EquityRefresh> {
        if token.price_update_paused {
            return Ok(EquityRefresh {
                price: token.last_price,
                total_equity: self.total_equity,
                refreshed: false,
            });
        }

        let price = normalized_price(spot_price, token.initial_spot_price, token.inverse)?;
        let old_value = value_of(token.total_supply, token.last_price)?;
        let new_value = value_of(token.total_supply, price)?;

        // Branch on the sign so no intermediate can underflow.
        let total_equity = if new_value >= old_value {
            self.total_equity
                .checked_add(new_value - old_value)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        } else {
            self.total_equity
                .checked_sub(old_value - new_value)
                .ok_or_else(|| error!(ErrorCode::InvalidPoolState))?
        };

        Ok(EquityRefresh {
            price,
            total_equity,
            refreshed: true,
        })
    }

    pub fn commit_refresh(&mut self, token: &mut CubeToken, refresh: &EquityRefresh, now: i64) {
        if refresh.refreshed {
            token.last_price = refresh.price;
            token.last_updated = now;
        }
        self.total_equity = refresh.total_equity;
    }

    /// Refreshes and commits in one step. Returns the refresh that was applied.
    pub fn update_token(
        &mut self,
        token: &mut CubeToken,
        spot_price: u64,
        now: i64,
    ) -> Result<EquityRefresh> {
        require!(token.added, ErrorCode::TokenNotRegistered);
        let refresh = self.refresh_token_equity(token, spot_price)?;
        self.commit_refresh(token, &refresh, now);
        Ok(refresh)
    }
}
