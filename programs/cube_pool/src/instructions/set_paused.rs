use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::PauseChanged,
    helpers::require_owner_or_guardian,
    state::{CubeToken, GuardianSet, Pool},
};

fn apply_flags(token: &mut CubeToken, deposit: bool, withdraw: bool, price_update: bool) {
    token.deposit_paused = deposit;
    token.withdraw_paused = withdraw;
    token.price_update_paused = price_update;
}

pub fn handler(
    ctx: Context<SetPaused>,
    deposit: bool,
    withdraw: bool,
    price_update: bool,
) -> Result<()> {
    require_owner_or_guardian(
        &ctx.accounts.authority,
        &ctx.accounts.pool,
        &ctx.accounts.guardian_set,
    )?;

    ctx.accounts.pool.lock()?;
    let token = &mut ctx.accounts.cube_token;
    require!(token.added, ErrorCode::TokenNotRegistered);
    apply_flags(token, deposit, withdraw, price_update);
    ctx.accounts.pool.unlock();

    emit!(PauseChanged {
        cube_token: token.key(),
        deposit_paused: deposit,
        withdraw_paused: withdraw,
        price_update_paused: price_update,
    });

    Ok(())
}

/// Remaining accounts: every writable `CubeToken` to pause.
pub fn set_all_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetAllPaused<'info>>,
    deposit: bool,
    withdraw: bool,
    price_update: bool,
) -> Result<()> {
    require_owner_or_guardian(
        &ctx.accounts.authority,
        &ctx.accounts.pool,
        &ctx.accounts.guardian_set,
    )?;

    let pool_key = ctx.accounts.pool.key();
    ctx.accounts.pool.lock()?;
    for info in ctx.remaining_accounts {
        require!(info.is_writable, ErrorCode::InvalidCubeToken);
        let mut token = Account::<CubeToken>::try_from(info)?;
        require_keys_eq!(token.pool, pool_key, ErrorCode::InvalidCubeToken);

        apply_flags(&mut token, deposit, withdraw, price_update);
        token.exit(&crate::ID)?;

        emit!(PauseChanged {
            cube_token: info.key(),
            deposit_paused: deposit,
            withdraw_paused: withdraw,
            price_update_paused: price_update,
        });
    }
    ctx.accounts.pool.unlock();

    if (ctx.remaining_accounts.len() as u32) < ctx.accounts.pool.num_cube_tokens {
        msg!(
            "paused {} of {} cube tokens",
            ctx.remaining_accounts.len(),
            ctx.accounts.pool.num_cube_tokens
        );
    }

    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.guardian_set @ ErrorCode::InvalidGuardianSet)]
    pub guardian_set: Account<'info, GuardianSet>,
    #[account(mut, has_one = pool @ ErrorCode::InvalidCubeToken)]
    pub cube_token: Account<'info, CubeToken>,
}

#[derive(Accounts)]
pub struct SetAllPaused<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.guardian_set @ ErrorCode::InvalidGuardianSet)]
    pub guardian_set: Account<'info, GuardianSet>,
}
