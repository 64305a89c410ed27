use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::GuardianRemoved,
    state::{GuardianSet, Pool},
};

/// Callable by the admin, or by a guardian removing itself.
pub fn handler(ctx: Context<RemoveGuardian>, guardian: Pubkey) -> Result<()> {
    let signer = ctx.accounts.authority.key();
    require!(
        signer == ctx.accounts.pool.admin || signer == guardian,
        ErrorCode::Unauthorized
    );

    ctx.accounts.guardian_set.remove(&guardian)?;
    ctx.accounts.pool.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(GuardianRemoved {
        guardian,
        removed_by: signer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveGuardian<'info> {
    pub authority: Signer<'info>,
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
