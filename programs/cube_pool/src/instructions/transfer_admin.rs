use anchor_lang::prelude::*;

use crate::{error::ErrorCode, events::AdminTransferred, helpers::require_admin, state::Pool};

pub fn handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::ZeroAddress);

    let pool = &mut ctx.accounts.pool;
    let previous_admin = pool.admin;
    pool.admin = new_admin;
    pool.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(AdminTransferred {
        previous_admin,
        new_admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
