use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::FeesCollected,
    helpers::{require_admin, transfer_from_vault},
    state::Pool,
};

pub fn handler(ctx: Context<CollectFees>) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    let amount = pool.accrued_fees;
    require!(amount > 0, ErrorCode::NothingToCollect);

    pool.lock()?;
    pool.accrued_fees = 0;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.recipient_collateral,
        &ctx.accounts.pool_authority,
        &pool_key,
        pool.authority_bump,
        amount,
    )?;

    pool.last_updated_at = Clock::get()?.unix_timestamp;
    pool.unlock();

    emit!(FeesCollected {
        recipient: ctx.accounts.recipient_collateral.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CollectFees<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        constraint = recipient_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
        constraint = recipient_collateral.owner != Pubkey::default() @ ErrorCode::ZeroAddress,
    )]
    pub recipient_collateral: Account<'info, TokenAccount>,
    #[account(mut, address = pool.collateral_vault)]
    pub collateral_vault: Account<'info, TokenAccount>,
    /// CHECK: PDA signer for vault transfers.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
