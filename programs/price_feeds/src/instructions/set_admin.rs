use anchor_lang::prelude::*;

use crate::{helpers::require_admin, state::FeedsConfig};

pub fn handler(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.authority, &ctx.accounts.feeds_config)?;

    let config = &mut ctx.accounts.feeds_config;
    msg!("Feeds admin transferred from {} to {}", config.admin, new_admin);
    config.admin = new_admin;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"feeds-config"],
        bump = feeds_config.bump,
    )]
    pub feeds_config: Account<'info, FeedsConfig>,
}
