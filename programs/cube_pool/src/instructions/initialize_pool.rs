use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    events::PoolInitialized,
    state::{GuardianSet, Pool},
};

pub fn handler(
    ctx: Context<InitializePool>,
    protocol_fee_bps: u16,
    max_pool_balance: u64,
) -> Result<()> {
    require!(
        protocol_fee_bps <= BPS_DENOM as u16,
        ErrorCode::InvalidBps
    );

    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();

    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.collateral_mint = ctx.accounts.collateral_mint.key();
    pool.collateral_vault = ctx.accounts.collateral_vault.key();
    pool.guardian_set = ctx.accounts.guardian_set.key();
    pool.pool_balance = 0;
    pool.total_equity = 0;
    pool.accrued_fees = 0;
    pool.max_pool_balance = max_pool_balance;
    pool.protocol_fee_bps = protocol_fee_bps;
    pool.num_cube_tokens = 0;
    pool.finalized = false;
    pool.locked = false;
    pool.created_at = now;
    pool.last_updated_at = now;
    pool.bump = ctx.bumps.pool;
    pool.authority_bump = ctx.bumps.pool_authority;

    let guardian_set = &mut ctx.accounts.guardian_set;
    guardian_set.pool = pool_key;
    guardian_set.guardians = Vec::new();
    guardian_set.bump = ctx.bumps.guardian_set;

    emit!(PoolInitialized {
        pool: pool_key,
        admin: pool.admin,
        collateral_mint: pool.collateral_mint,
        protocol_fee_bps,
        max_pool_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub collateral_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = admin,
        seeds = [b"pool", collateral_mint.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA that owns the vault and every share mint.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"collateral-vault", pool.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = pool_authority,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = admin,
        seeds = [b"guardian-set", pool.key().as_ref()],
        bump,
        space = 8 + GuardianSet::INIT_SPACE,
    )]
    pub guardian_set: Account<'info, GuardianSet>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
