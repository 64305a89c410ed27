use anchor_lang::prelude::*;
use price_feeds::PriceFeed;

use crate::{
    error::ErrorCode,
    events::PriceUpdated,
    helpers::refresh_if_stale,
    state::{CubeToken, Pool},
};

/// Remaining accounts: `[cube_token (writable), price_feed]` pairs.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RefreshStale<'info>>,
    max_stale_secs: i64,
) -> Result<()> {
    require!(max_stale_secs >= 0, ErrorCode::InvalidStaleness);
    let remaining = ctx.remaining_accounts;
    require!(remaining.len() % 2 == 0, ErrorCode::InvalidCubeToken);

    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.lock()?;

    let mut refreshed = 0u32;
    for pair in remaining.chunks(2) {
        let (token_info, feed_info) = (&pair[0], &pair[1]);
        require!(token_info.is_writable, ErrorCode::InvalidCubeToken);

        let mut token = Account::<CubeToken>::try_from(token_info)?;
        require_keys_eq!(token.pool, pool_key, ErrorCode::InvalidCubeToken);
        let feed = Account::<PriceFeed>::try_from(feed_info)?;
        require!(
            feed.symbol == token.currency_key,
            ErrorCode::InvalidPriceFeed
        );

        let spot_price = feed.price_at(now);
        if let Some(refresh) = refresh_if_stale(pool, &mut token, spot_price, now, max_stale_secs)? {
            if refresh.refreshed {
                refreshed += 1;
                emit!(PriceUpdated {
                    cube_token: token.key(),
                    spot_price,
                    price: refresh.price,
                    total_equity: refresh.total_equity,
                });
            }
            token.exit(&crate::ID)?;
        }
    }

    pool.unlock();
    msg!("refreshed {} of {} cube tokens", refreshed, remaining.len() / 2);

    Ok(())
}

#[derive(Accounts)]
pub struct RefreshStale<'info> {
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
