use anchor_lang::prelude::*;

use crate::state::FeedSource;

#[event]
pub struct FeedAdded {
    pub feed: Pubkey,
    pub symbol: String,
    pub source: FeedSource,
    pub updater: Pubkey,
}

#[event]
pub struct FeedParamsUpdated {
    pub feed: Pubkey,
    pub source: FeedSource,
    pub updater: Pubkey,
    pub max_staleness_sec: i64,
}

#[event]
pub struct FeedPriceUpdated {
    pub feed: Pubkey,
    pub price: u64,
    pub publish_time: i64,
}
