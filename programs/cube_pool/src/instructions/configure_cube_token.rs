use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::ConfigUpdated,
    helpers::require_admin,
    state::{CubeToken, Pool},
};

pub fn set_fee_handler(ctx: Context<ConfigureCubeToken>, fee_bps: u16) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    require!(fee_bps < BPS_DENOM as u16, ErrorCode::InvalidBps);

    ctx.accounts.cube_token.fee_bps = fee_bps;
    ctx.accounts.emit_config()
}

pub fn set_max_pool_share_handler(
    ctx: Context<ConfigureCubeToken>,
    max_pool_share_bps: u16,
) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    require!(
        max_pool_share_bps < BPS_DENOM as u16,
        ErrorCode::InvalidBps
    );

    ctx.accounts.cube_token.max_pool_share_bps = max_pool_share_bps;
    ctx.accounts.emit_config()
}

#[derive(Accounts)]
pub struct ConfigureCubeToken<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut, has_one = pool @ ErrorCode::InvalidCubeToken)]
    pub cube_token: Account<'info, CubeToken>,
}

impl ConfigureCubeToken<'_> {
    fn emit_config(&mut self) -> Result<()> {
        self.pool.last_updated_at = Clock::get()?.unix_timestamp;
        emit!(ConfigUpdated {
            cube_token: Some(self.cube_token.key()),
            fee_bps: self.cube_token.fee_bps,
            max_pool_share_bps: self.cube_token.max_pool_share_bps,
            protocol_fee_bps: self.pool.protocol_fee_bps,
            max_pool_balance: self.pool.max_pool_balance,
        });
        Ok(())
    }
}
