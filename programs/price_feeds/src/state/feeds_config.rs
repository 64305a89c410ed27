use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct FeedsConfig {
    pub admin: Pubkey,
    pub num_feeds: u32,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}
