use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::FeedPriceUpdated,
    state::{FeedSource, FeedsConfig, PriceFeed},
};

pub fn handler(ctx: Context<PostPrice>, price: u64) -> Result<()> {
    let signer = ctx.accounts.authority.key();
    let feed = &mut ctx.accounts.price_feed;
    require!(
        signer == feed.params.updater || signer == ctx.accounts.feeds_config.admin,
        ErrorCode::Unauthorized
    );
    require!(
        feed.params.source == FeedSource::Manual,
        ErrorCode::WrongFeedSource
    );

    // Zero is accepted: it marks the feed as unavailable for consumers.
    let now = Clock::get()?.unix_timestamp;
    feed.price = price;
    feed.publish_time = now;

    emit!(FeedPriceUpdated {
        feed: feed.key(),
        price,
        publish_time: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PostPrice<'info> {
    pub authority: Signer<'info>,
    #[account(
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
