use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM, error::ErrorCode, events::ConfigUpdated, helpers::require_admin,
    state::Pool,
};

pub fn set_max_pool_balance_handler(
    ctx: Context<ConfigurePool>,
    max_pool_balance: u64,
) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let pool = &mut ctx.accounts.pool;
    pool.max_pool_balance = max_pool_balance;
    emit_pool_config(pool)
}

pub fn set_protocol_fee_handler(ctx: Context<ConfigurePool>, protocol_fee_bps: u16) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    require!(
        protocol_fee_bps <= BPS_DENOM as u16,
        ErrorCode::InvalidBps
    );

    let pool = &mut ctx.accounts.pool;
    pool.protocol_fee_bps = protocol_fee_bps;
    emit_pool_config(pool)
}

fn emit_pool_config(pool: &mut Pool) -> Result<()> {
    pool.last_updated_at = Clock::get()?.unix_timestamp;
    emit!(ConfigUpdated {
        cube_token: None,
        fee_bps: 0,
        max_pool_share_bps: 0,
        protocol_fee_bps: pool.protocol_fee_bps,
        max_pool_balance: pool.max_pool_balance,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ConfigurePool<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
