use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::EmergencyWithdrawn,
    helpers::{require_owner_or_guardian, transfer_from_vault},
    state::{GuardianSet, Pool},
};

/// Sweeps the whole vault to the admin. The ledger is left as is, so the
/// pool is unusable for redemptions until collateral is returned.
pub fn handler(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    require_owner_or_guardian(
        &ctx.accounts.authority,
        &ctx.accounts.pool,
        &ctx.accounts.guardian_set,
    )?;
    ctx.accounts.pool.begin_emergency()?;

    let pool_key = ctx.accounts.pool.key();
    let amount = ctx.accounts.collateral_vault.amount;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.admin_collateral,
        &ctx.accounts.pool_authority,
        &pool_key,
        ctx.accounts.pool.authority_bump,
        amount,
    )?;
    ctx.accounts.pool.unlock();

    emit!(EmergencyWithdrawn {
        caller: ctx.accounts.authority.key(),
        recipient: ctx.accounts.admin_collateral.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.guardian_set @ ErrorCode::InvalidGuardianSet)]
    pub guardian_set: Account<'info, GuardianSet>,
    #[account(
        mut,
        constraint = admin_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
        constraint = admin_collateral.owner == pool.admin @ ErrorCode::Unauthorized,
    )]
    pub admin_collateral: Account<'info, TokenAccount>,
    #[account(mut, address = pool.collateral_vault)]
    pub collateral_vault: Account<'info, TokenAccount>,
    /// CHECK: PDA signer for vault transfers.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
