use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::FeedAdded,
    helpers::{require_admin, to_fixed_symbol},
    state::{FeedParams, FeedsConfig, PriceFeed},
};

pub fn handler(ctx: Context<AddFeed>, symbol: String, params: FeedParams) -> Result<()> {
    require_admin(&ctx.accounts.authority, &ctx.accounts.feeds_config)?;
    params.validate()?;

    let feed = &mut ctx.accounts.price_feed;
    feed.symbol = to_fixed_symbol(&symbol)?;
    feed.params = params;
    feed.price = 0;
    feed.publish_time = 0;
    feed.bump = ctx.bumps.price_feed;

    let config = &mut ctx.accounts.feeds_config;
    config.num_feeds = config
        .num_feeds
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(FeedAdded {
        feed: feed.key(),
        symbol,
        source: params.source,
        updater: params.updater,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct AddFeed<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"feeds-config"],
        bump = feeds_config.bump,
    )]
    pub feeds_config: Account<'info, FeedsConfig>,
    #[account(
        init,
        payer = authority,
        seeds = [b"price-feed", symbol.as_bytes()],
        bump,
        space = 8 + PriceFeed::INIT_SPACE,
    )]
    pub price_feed: Account<'info, PriceFeed>,
    pub system_program: Program<'info, System>,
}
