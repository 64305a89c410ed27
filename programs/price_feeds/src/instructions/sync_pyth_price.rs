use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::FeedPriceUpdated,
    helpers::read_pyth_price_update,
    state::{FeedSource, PriceFeed},
};

pub fn handler(ctx: Context<SyncPythPrice>) -> Result<()> {
    let feed = &mut ctx.accounts.price_feed;
    require!(
        feed.params.source == FeedSource::Pyth,
        ErrorCode::WrongFeedSource
    );

    let (price, publish_time) =
        read_pyth_price_update(&ctx.accounts.price_update, &feed.params.pyth_feed_id)?;
    require!(publish_time >= feed.publish_time, ErrorCode::OutdatedUpdate);

    feed.price = price;
    feed.publish_time = publish_time;

    emit!(FeedPriceUpdated {
        feed: feed.key(),
        price,
        publish_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SyncPythPrice<'info> {
    #[account(
        mut,
        seeds = [b"price-feed", price_feed.symbol_str().as_bytes()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
    /// CHECK: owner, discriminator and feed id are verified when decoding.
    pub price_update: UncheckedAccount<'info>,
}
