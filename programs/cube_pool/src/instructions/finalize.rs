use anchor_lang::prelude::*;

use crate::{events::PoolFinalized, helpers::require_admin, state::Pool};

pub fn handler(ctx: Context<Finalize>) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let pool = &mut ctx.accounts.pool;
    if !pool.mark_finalized() {
        return Ok(());
    }
    pool.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(PoolFinalized { pool: pool.key() });

    Ok(())
}

#[derive(Accounts)]
pub struct Finalize<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
