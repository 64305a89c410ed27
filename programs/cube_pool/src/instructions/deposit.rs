use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use price_feeds::PriceFeed;

use crate::{
    error::ErrorCode,
    events::Deposited,
    helpers::{apply_deposit, mint_shares, transfer_to_vault},
    state::{CubeToken, Pool},
};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);
    let pool_key = ctx.accounts.pool.key();

    let pool = &mut ctx.accounts.pool;
    let token = &mut ctx.accounts.cube_token;
    pool.lock()?;

    let outcome = apply_deposit(pool, token, amount, spot_price, now)?;

    transfer_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.user_collateral,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.user,
        amount,
    )?;
    mint_shares(
        &ctx.accounts.token_program,
        &ctx.accounts.share_mint,
        &ctx.accounts.recipient_share_account,
        &ctx.accounts.pool_authority,
        &pool_key,
        pool.authority_bump,
        outcome.shares_out,
    )?;

    pool.last_updated_at = now;
    pool.unlock();

    emit!(Deposited {
        cube_token: token.key(),
        sender: ctx.accounts.user.key(),
        recipient: ctx.accounts.recipient_share_account.owner,
        amount,
        shares_out: outcome.shares_out,
        fee: outcome.fee,
        protocol_fee: outcome.protocol_fee,
    });

    Ok(outcome.shares_out)
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
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
        constraint = user_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_collateral.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_collateral: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = recipient_share_account.mint == share_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = recipient_share_account.owner != Pubkey::default() @ ErrorCode::ZeroAddress,
    )]
    pub recipient_share_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.collateral_vault)]
    pub collateral_vault: Account<'info, TokenAccount>,
    /// CHECK: PDA signer for share minting.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
