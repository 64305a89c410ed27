use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, SYMBOL_LEN},
    error::ErrorCode,
};

/// Owner-chosen parameters of a new cube token.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeTokenParams {
    pub currency_key: [u8; SYMBOL_LEN],
    pub inverse: bool,
    pub fee_bps: u16,
    pub max_pool_share_bps: u16,
}

impl CubeTokenParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.currency_key[0] != 0, ErrorCode::InvalidSymbol);
        require!(self.fee_bps < BPS_DENOM as u16, ErrorCode::InvalidBps);
        require!(
            self.max_pool_share_bps < BPS_DENOM as u16,
            ErrorCode::InvalidBps
        );
        Ok(())
    }
}

/// Per-token parameters. One account per (symbol, direction) pair, never closed.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct CubeToken {
    pub pool: Pubkey,
    pub share_mint: Pubkey,
    pub currency_key: [u8; SYMBOL_LEN],
    pub inverse: bool,
    /// Position in registration order.
    pub index: u32,
    pub added: bool,
    pub deposit_paused: bool,
    pub withdraw_paused: bool,
    pub price_update_paused: bool,
    /// Charged on both deposits and withdrawals.
    pub fee_bps: u16,
    /// 0 means unlimited.
    pub max_pool_share_bps: u16,
    /// Oracle spot price at registration, 8 decimals. Immutable.
    pub initial_spot_price: u64,
    /// Normalized price, 18 decimals.
    pub last_price: u128,
    pub last_updated: i64,
    /// Shares minted minus shares burned by the pool.
    pub total_supply: u64,
    pub bump: u8,
}

impl CubeToken {
    pub fn direction_seed(inverse: bool) -> &'static [u8] {
        if inverse {
            b"inverse"
        } else {
            b"long"
        }
    }

    pub fn symbol_str(&self) -> &str {
        let len = self
            .currency_key
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(SYMBOL_LEN);
        std::str::from_utf8(&self.currency_key[..len]).unwrap_or_default()
    }

    /// `cubeBTC` for the long token, `invBTC` for the inverse one.
    pub fn display_symbol(&self) -> String {
        let prefix = if self.inverse { "inv" } else { "cube" };
        format!("{}{}", prefix, self.symbol_str())
    }

    pub fn is_stale(&self, now: i64, max_stale_secs: i64) -> Result<bool> {
        let deadline = self
            .last_updated
            .checked_add(max_stale_secs)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(deadline <= now)
    }
}
