use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use price_feeds::{helpers::to_fixed_symbol, PriceFeed};

use crate::{
    error::ErrorCode,
    events::CubeTokenRegistered,
    helpers::require_admin,
    state::{CubeToken, CubeTokenParams, Pool},
};

pub fn handler(
    ctx: Context<RegisterCubeToken>,
    symbol: String,
    inverse: bool,
    fee_bps: u16,
    max_pool_share_bps: u16,
) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let currency_key =
        to_fixed_symbol(&symbol).map_err(|_| error!(ErrorCode::InvalidSymbol))?;
    require!(
        ctx.accounts.price_feed.symbol == currency_key,
        ErrorCode::InvalidPriceFeed
    );
    let params = CubeTokenParams {
        currency_key,
        inverse,
        fee_bps,
        max_pool_share_bps,
    };

    let now = Clock::get()?.unix_timestamp;
    let spot_price = ctx.accounts.price_feed.price_at(now);

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.lock()?;

    let token = &mut ctx.accounts.cube_token;
    token.pool = pool_key;
    token.share_mint = ctx.accounts.share_mint.key();
    token.bump = ctx.bumps.cube_token;
    pool.register_token(token, &params, spot_price, now)?;
    pool.unlock();

    emit!(CubeTokenRegistered {
        cube_token: token.key(),
        share_mint: token.share_mint,
        display_symbol: token.display_symbol(),
        inverse,
        index: token.index,
        initial_spot_price: spot_price,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(symbol: String, inverse: bool)]
pub struct RegisterCubeToken<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.collateral_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA set as share mint authority.
    #[account(seeds = [b"pool-authority", pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,
    #[account(address = pool.collateral_mint)]
    pub collateral_mint: Account<'info, Mint>,
    pub price_feed: Account<'info, PriceFeed>,
    #[account(
        init,
        payer = admin,
        seeds = [
            b"cube-token",
            pool.key().as_ref(),
            symbol.as_bytes(),
            CubeToken::direction_seed(inverse),
        ],
        bump,
        space = 8 + CubeToken::INIT_SPACE,
    )]
    pub cube_token: Account<'info, CubeToken>,
    #[account(
        init,
        payer = admin,
        seeds = [b"share-mint", cube_token.key().as_ref()],
        bump,
        mint::decimals = collateral_mint.decimals,
        mint::authority = pool_authority,
    )]
    pub share_mint: Account<'info, Mint>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
