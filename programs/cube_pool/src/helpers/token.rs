use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

pub const POOL_AUTHORITY_SEED: &[u8] = b"pool-authority";

/// Moves collateral out of the vault, signed by the pool authority PDA.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &UncheckedAccount<'info>,
    pool: &Pubkey,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, pool.as_ref(), &[authority_bump]];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: authority.to_account_info(),
    };

    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
    )
}

pub fn transfer_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: vault.to_account_info(),
        authority: owner.to_account_info(),
    };
    token::transfer(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}

pub fn mint_shares<'info>(
    token_program: &Program<'info, Token>,
    share_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    authority: &UncheckedAccount<'info>,
    pool: &Pubkey,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, pool.as_ref(), &[authority_bump]];
    let signer = &[seeds];

    let cpi_accounts = MintTo {
        mint: share_mint.to_account_info(),
        to: to.to_account_info(),
        authority: authority.to_account_info(),
    };

    token::mint_to(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
    )
}

/// Burns shares from the holder's account; the holder signs.
pub fn burn_shares<'info>(
    token_program: &Program<'info, Token>,
    share_mint: &Account<'info, Mint>,
    from: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Burn {
        mint: share_mint.to_account_info(),
        from: from.to_account_info(),
        authority: owner.to_account_info(),
    };
    token::burn(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}
