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

declare_id!("FhfXw78iXBDPcPHHyu6oSkn5s4iPbyrkYDWjAVE7yXPM");

#[program]
pub mod cube_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        protocol_fee_bps: u16,
        max_pool_balance: u64,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, protocol_fee_bps, max_pool_balance)
    }

    pub fn register_cube_token(
        ctx: Context<RegisterCubeToken>,
        symbol: String,
        inverse: bool,
        fee_bps: u16,
        max_pool_share_bps: u16,
    ) -> Result<()> {
        instructions::register_cube_token::handler(ctx, symbol, inverse, fee_bps, max_pool_share_bps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, shares_in: u64) -> Result<u64> {
        instructions::withdraw::handler(ctx, shares_in)
    }

    pub fn update(ctx: Context<Update>) -> Result<()> {
        instructions::update::handler(ctx)
    }

    pub fn refresh_stale<'info>(
        ctx: Context<'_, '_, 'info, 'info, RefreshStale<'info>>,
        max_stale_secs: i64,
    ) -> Result<()> {
        instructions::refresh_stale::handler(ctx, max_stale_secs)
    }

    pub fn quote_price(ctx: Context<Quote>) -> Result<u128> {
        instructions::quote::price_handler(ctx)
    }

    pub fn quote_deposit(ctx: Context<Quote>, amount: u64) -> Result<u64> {
        instructions::quote::deposit_handler(ctx, amount)
    }

    pub fn quote_withdraw(ctx: Context<Quote>, shares_in: u64) -> Result<u64> {
        instructions::quote::withdraw_handler(ctx, shares_in)
    }

    pub fn set_fee(ctx: Context<ConfigureCubeToken>, fee_bps: u16) -> Result<()> {
        instructions::configure_cube_token::set_fee_handler(ctx, fee_bps)
    }

    pub fn set_max_pool_share(
        ctx: Context<ConfigureCubeToken>,
        max_pool_share_bps: u16,
    ) -> Result<()> {
        instructions::configure_cube_token::set_max_pool_share_handler(ctx, max_pool_share_bps)
    }

    pub fn set_max_pool_balance(ctx: Context<ConfigurePool>, max_pool_balance: u64) -> Result<()> {
        instructions::configure_pool::set_max_pool_balance_handler(ctx, max_pool_balance)
    }

    pub fn set_protocol_fee(ctx: Context<ConfigurePool>, protocol_fee_bps: u16) -> Result<()> {
        instructions::configure_pool::set_protocol_fee_handler(ctx, protocol_fee_bps)
    }

    pub fn set_paused(
        ctx: Context<SetPaused>,
        deposit: bool,
        withdraw: bool,
        price_update: bool,
    ) -> Result<()> {
        instructions::set_paused::handler(ctx, deposit, withdraw, price_update)
    }

    pub fn set_all_paused<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetAllPaused<'info>>,
        deposit: bool,
        withdraw: bool,
        price_update: bool,
    ) -> Result<()> {
        instructions::set_paused::set_all_handler(ctx, deposit, withdraw, price_update)
    }

    pub fn add_guardian(ctx: Context<AddGuardian>, guardian: Pubkey) -> Result<()> {
        instructions::add_guardian::handler(ctx, guardian)
    }

    pub fn remove_guardian(ctx: Context<RemoveGuardian>, guardian: Pubkey) -> Result<()> {
        instructions::remove_guardian::handler(ctx, guardian)
    }

    pub fn collect_fees(ctx: Context<CollectFees>) -> Result<()> {
        instructions::collect_fees::handler(ctx)
    }

    pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
        instructions::finalize::handler(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::handler(ctx, new_admin)
    }
}
