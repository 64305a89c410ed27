use anchor_lang::prelude::*;
use price_feeds::PriceFeed;

use crate::{
    error::ErrorCode,
    helpers::{quote_deposit, quote_price, quote_withdraw},
    state::{CubeToken, Pool},
};

pub fn price_handler(ctx: Context<Quote>) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);
    quote_price(&ctx.accounts.pool, &ctx.accounts.cube_token, spot_price)
}

pub fn deposit_handler(ctx: Context<Quote>, amount: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);
    quote_deposit(
        &ctx.accounts.pool,
        &ctx.accounts.cube_token,
        amount,
        spot_price,
        now,
    )
    .map(|outcome| outcome.shares_out)
}

pub fn withdraw_handler(ctx: Context<Quote>, shares_in: u64) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);
    quote_withdraw(
        &ctx.accounts.pool,
        &ctx.accounts.cube_token,
        shares_in,
        spot_price,
        now,
    )
    .map(|outcome| outcome.amount_out)
}

#[derive(Accounts)]
pub struct Quote<'info> {
    #[account(
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(has_one = pool @ ErrorCode::InvalidCubeToken)]
    pub cube_token: Account<'info, CubeToken>,
    #[account(constraint = price_feed.symbol == cube_token.currency_key @ ErrorCode::InvalidPriceFeed)]
    pub price_feed: Account<'info, PriceFeed>,
}
