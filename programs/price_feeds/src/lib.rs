use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("39EfsRKTsKtNphoRBeEoRiLkqDpVi5ypWUreyKjcdaLV");

#[program]
pub mod price_feeds {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>, admin: Pubkey) -> Result<()> {
        instructions::initialize_registry::handler(ctx, admin)
    }

    pub fn add_feed(ctx: Context<AddFeed>, symbol: String, params: FeedParams) -> Result<()> {
        instructions::add_feed::handler(ctx, symbol, params)
    }

    pub fn update_feed(ctx: Context<UpdateFeed>, params: FeedParams) -> Result<()> {
        instructions::update_feed::handler(ctx, params)
    }

    pub fn post_price(ctx: Context<PostPrice>, price: u64) -> Result<()> {
        instructions::post_price::handler(ctx, price)
    }

    pub fn sync_pyth_price(ctx: Context<SyncPythPrice>) -> Result<()> {
        instructions::sync_pyth_price::handler(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::handler(ctx, new_admin)
    }
}
