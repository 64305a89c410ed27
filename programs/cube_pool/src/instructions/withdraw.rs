use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use price_feeds::PriceFeed;

use crate::{
    error::ErrorCode,
    events::Withdrawn,
    helpers::{apply_withdraw, burn_shares, transfer_from_vault},
    state::{CubeToken, Pool},
};

pub fn handler(ctx: Context<Withdraw>, shares_in: u64) -> Result<u64> {
    require!(
        ctx.accounts.user_share_account.amount >= shares_in,
        ErrorCode::InsufficientShares
    );

    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);
    let pool_key = ctx.accounts.pool.key();

    let pool = &mut ctx.accounts.pool;
    let token = &mut ctx.accounts.cube_token;
    pool.lock()?;

    let outcome = apply_withdraw(pool, token, shares_in, spot_price, now)?;

    burn_shares(
        &ctx.accounts.token_program,
        &ctx.accounts.share_mint,
        &ctx.accounts.user_share_account,
        &ctx.accounts.user,
        shares_in,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.recipient_collateral,
        &ctx.accounts.pool_authority,
        &pool_key,
        pool.authority_bump,
        outcome.amount_out,
    )?;

    pool.last_updated_at = now;
    pool.unlock();

    emit!(Withdrawn {
        cube_token: token.key(),
        sender: ctx.accounts.user.key(),
        recipient: ctx.accounts.recipient_collateral.owner,
        shares_in,
        amount_out: outcome.amount_out,
        fee: outcome.fee,
        protocol_fee: outcome.protocol_fee,
    });

    Ok(outcome.amount_out)
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        has_one = pool @ ErrorCode::InvalidCubeToken,
        has_one = share_mint @ ErrorCode::InvalidCubeToken,
    )]
    pub cube_token: Account<'info, CubeToken>,
    #[account(constraint = price_feed.symbol == cube_token.currency_key @ ErrorCode::InvalidPriceFeed)]
    pub price_feed: Account<'info, PriceFeed>,
    #[account(mut)]
    pub share_mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = user_share_account.mint == share_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = user_share_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_share_account: Account<'info, TokenAccount>,
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
