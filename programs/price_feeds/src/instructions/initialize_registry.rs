use anchor_lang::prelude::*;

use crate::state::FeedsConfig;

pub fn handler(ctx: Context<InitializeRegistry>, admin: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.feeds_config;
    config.admin = admin;
    config.num_feeds = 0;
    config.created_at = now;
    config.last_updated_at = now;
    config.bump = ctx.bumps.feeds_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"feeds-config"],
        bump,
        space = 8 + FeedsConfig::INIT_SPACE,
    )]
    pub feeds_config: Account<'info, FeedsConfig>,
    pub system_program: Program<'info, System>,
}
