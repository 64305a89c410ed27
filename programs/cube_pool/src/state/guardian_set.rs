use anchor_lang::prelude::*;

use crate::{constants::MAX_GUARDIANS, error::ErrorCode};

/// Keys allowed to pause cube tokens and trigger an emergency withdrawal.
#[account]
#[derive(InitSpace)]
pub struct GuardianSet {
    pub pool: Pubkey,
    #[max_len(MAX_GUARDIANS)]
    pub guardians: Vec<Pubkey>,
    pub bump: u8,
}

impl GuardianSet {
    pub fn is_guardian(&self, key: &Pubkey) -> bool {
        self.guardians.contains(key)
    }

    pub fn add(&mut self, guardian: Pubkey) -> Result<()> {
        require_keys_neq!(guardian, Pubkey::default(), ErrorCode::ZeroAddress);
        require!(
            self.guardians.len() < MAX_GUARDIANS,
            ErrorCode::GuardianSetFull
        );
        require!(
            !self.is_guardian(&guardian),
            ErrorCode::GuardianAlreadyExists
        );
        self.guardians.push(guardian);
        Ok(())
    }

    pub fn remove(&mut self, guardian: &Pubkey) -> Result<()> {
        let idx = self
            .guardians
            .iter()
            .position(|g| g == guardian)
            .ok_or_else(|| error!(ErrorCode::GuardianNotFound))?;
        self.guardians.swap_remove(idx);
        Ok(())
    }
}
