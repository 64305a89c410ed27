use anchor_lang::prelude::*;

use crate::{
    events::GuardianAdded,
    helpers::require_admin,
    state::{GuardianSet, Pool},
};

pub fn handler(ctx: Context<AddGuardian>, guardian: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    ctx.accounts.guardian_set.add(guardian)?;
    ctx.accounts.pool.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(GuardianAdded { guardian });

    Ok(())
}

#[derive(Accounts)]
pub struct AddGuardian<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [b"guardian-set", pool.key().as_ref()],
        bump = guardian_set.bump,
    )]
    pub guardian_set: Account<'info, GuardianSet>,
}
