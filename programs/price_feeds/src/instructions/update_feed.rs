use anchor_lang::prelude::*;

use crate::{
    events::FeedParamsUpdated,
    helpers::require_admin,
    state::{FeedParams, FeedsConfig, PriceFeed},
};

pub fn handler(ctx: Context<UpdateFeed>, params: FeedParams) -> Result<()> {
    require_admin(&ctx.accounts.authority, &ctx.accounts.feeds_config)?;
    params.validate()?;

    let feed = &mut ctx.accounts.price_feed;
    if feed.params.source != params.source {
        // A price from the previous source must not be served under the new one.
        feed.price = 0;
        feed.publish_time = 0;
    }
    feed.params = params;

    ctx.accounts.feeds_config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(FeedParamsUpdated {
        feed: feed.key(),
        source: params.source,
        updater: params.updater,
        max_staleness_sec: params.max_staleness_sec,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFeed<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"feeds-config"],
        bump = feeds_config.bump,
    )]
    pub feeds_config: Account<'info, FeedsConfig>,
    #[account(
        mut,
        seeds = [b"price-feed", price_feed.symbol_str().as_bytes()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}
