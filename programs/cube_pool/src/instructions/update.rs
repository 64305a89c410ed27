use anchor_lang::prelude::*;
use price_feeds::PriceFeed;

use crate::{
    error::ErrorCode,
    events::PriceUpdated,
    state::{CubeToken, Pool},
};

pub fn handler(ctx: Context<Update>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);

    let pool = &mut ctx.accounts.pool;
    let token = &mut ctx.accounts.cube_token;
    pool.lock()?;
    let refresh = pool.update_token(token, spot_price, now)?;
    pool.unlock();

    if !refresh.refreshed {
        msg!("price updates paused for {}", token.display_symbol());
        return Ok(());
    }

    emit!(PriceUpdated {
        cube_token: token.key(),
        spot_price,
        price: refresh.price,
        total_equity: refresh.total_equity,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Update<'info> {
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut, has_one = pool @ ErrorCode::InvalidCubeToken)]
    pub cube_token: Account<'info, CubeToken>,
    #[account(constraint = price_feed.symbol == cube_token.currency_key @ ErrorCode::InvalidPriceFeed)]
    pub price_feed: Account<'info, PriceFeed>,
}
