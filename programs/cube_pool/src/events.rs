use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub collateral_mint: Pubkey,
    pub protocol_fee_bps: u16,
    pub max_pool_balance: u64,
}

#[event]
pub struct CubeTokenRegistered {
    pub cube_token: Pubkey,
    pub share_mint: Pubkey,
    pub display_symbol: String,
    pub inverse: bool,
    pub index: u32,
    pub initial_spot_price: u64,
}

#[event]
pub struct Deposited {
    pub cube_token: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub shares_out: u64,
    pub fee: u64,
    pub protocol_fee: u64,
}

#[event]
pub struct Withdrawn {
    pub cube_token: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub shares_in: u64,
    pub amount_out: u64,
    pub fee: u64,
    pub protocol_fee: u64,
}

#[event]
pub struct PriceUpdated {
    pub cube_token: Pubkey,
    pub spot_price: u64,
    pub price: u128,
    pub total_equity: u128,
}

#[event]
pub struct PauseChanged {
    pub cube_token: Pubkey,
    pub deposit_paused: bool,
    pub withdraw_paused: bool,
    pub price_update_paused: bool,
}

#[event]
pub struct ConfigUpdated {
    pub cube_token: Option<Pubkey>,
    pub fee_bps: u16,
    pub max_pool_share_bps: u16,
    pub protocol_fee_bps: u16,
    pub max_pool_balance: u64,
}

#[event]
pub struct FeesCollected {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct GuardianAdded {
    pub guardian: Pubkey,
}

#[event]
pub struct GuardianRemoved {
    pub guardian: Pubkey,
    pub removed_by: Pubkey,
}

#[event]
pub struct PoolFinalized {
    pub pool: Pubkey,
}

#[event]
pub struct EmergencyWithdrawn {
    pub caller: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}
